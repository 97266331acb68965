use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

/// A NEXO response as handed back by the payment SDK, decoded for display.
#[derive(Debug, Clone, PartialEq)]
pub struct NexoResponse {
    text: String,
    json: Option<Value>,
}

impl NexoResponse {
    /// Decodes a standard Base64 payload. Surrounding whitespace is ignored.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = STANDARD.decode(encoded.trim())?;
        let text = String::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    pub fn from_text(text: String) -> Self {
        let json = serde_json::from_str(&text).ok();
        Self { text, json }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    fn envelope(&self) -> Option<&Map<String, Value>> {
        self.json.as_ref()?.get("SaleToPOIResponse")?.as_object()
    }

    pub fn category(&self) -> Option<&str> {
        self.envelope()?
            .get("MessageHeader")?
            .get("MessageCategory")?
            .as_str()
    }

    /// `Response.Result` of whichever response body the envelope carries.
    pub fn result(&self) -> Option<&str> {
        self.envelope()?
            .iter()
            .filter(|(key, _)| key.as_str() != "MessageHeader")
            .find_map(|(_, body)| body.get("Response")?.get("Result")?.as_str())
    }

    pub fn is_success(&self) -> bool {
        self.result() == Some("Success")
    }

    /// Pretty JSON when the payload parses, the raw text otherwise.
    pub fn to_display(&self) -> String {
        self.json
            .as_ref()
            .and_then(|json| serde_json::to_string_pretty(json).ok())
            .unwrap_or_else(|| self.text.clone())
    }
}
