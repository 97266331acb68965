use crate::error::Result;
use async_trait::async_trait;

/// An outgoing HTTP POST with a JSON body.
#[derive(Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    pub fn json(url: impl Into<String>, body: String) -> Self {
        Self {
            url: url.into(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// `None` when the server sent no body at all.
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single request and hands back whatever the server answered.
///
/// Implementations report connection-level failures as
/// [`PosError::Transport`](crate::error::PosError::Transport) and return
/// every HTTP status, success or not, as an [`HttpResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse>;
}

pub type HttpTransportBox = Box<dyn HttpTransport>;

/// Exchanges a setup token issued by the payment SDK for session data.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn session_data(&self, setup_token: &str) -> Result<String>;
}
