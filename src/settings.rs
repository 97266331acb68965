//! Process-wide configuration, loaded once at startup and read-only after.
//!
//! Sources, lowest precedence first: built-in defaults, an optional config
//! file, then `NEXO_POS_*` environment variables (`NEXO_POS_API_KEY`,
//! `NEXO_POS_MERCHANT_ACCOUNT`, ...).

use crate::error::{PosError, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub const DEFAULT_AUTH_ENDPOINT: &str =
    "https://checkout-test.adyen.com/checkout/possdk/v68/sessions";
pub const DEFAULT_SALE_ID: &str = "NexoPosDemo";
pub const DEFAULT_POI_ID: &str = "S1F2-000123";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const ENV_PREFIX: &str = "NEXO_POS";

/// Backend API key. Never printed by `Debug`.
#[derive(Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub merchant_account: String,
    pub api_key: ApiKey,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub auth_endpoint: String,
    pub merchant_account: Option<String>,
    pub api_key: Option<ApiKey>,
    pub sale_id: String,
    pub poi_id: String,
    pub currency: String,
    /// Log full session request/response bodies. Demo use only.
    pub log_bodies: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            merchant_account: None,
            api_key: None,
            sale_id: DEFAULT_SALE_ID.to_string(),
            poi_id: DEFAULT_POI_ID.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            log_bodies: false,
        }
    }
}

impl Settings {
    /// Loads settings, reading `path` (format picked from its extension) when given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("auth_endpoint", DEFAULT_AUTH_ENDPOINT)?
            .set_default("sale_id", DEFAULT_SALE_ID)?
            .set_default("poi_id", DEFAULT_POI_ID)?
            .set_default("currency", DEFAULT_CURRENCY)?
            .set_default("log_bodies", false)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Merchant account and API key, both required to open a session.
    pub fn credentials(&self) -> Result<Credentials> {
        let merchant_account = self
            .merchant_account
            .clone()
            .filter(|account| !account.is_empty())
            .ok_or_else(|| {
                PosError::Config(format!(
                    "merchant_account not set (config file or {ENV_PREFIX}_MERCHANT_ACCOUNT)"
                ))
            })?;
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.expose().is_empty())
            .ok_or_else(|| {
                PosError::Config(format!("api_key not set (config file or {ENV_PREFIX}_API_KEY)"))
            })?;

        Ok(Credentials {
            merchant_account,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert!(!format!("{:?}", Settings {
            api_key: Some(key),
            ..Settings::default()
        })
        .contains("super-secret"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file(
            r#"
            merchant_account = "DemoMerchant"
            api_key = "key-123"
            poi_id = "V400m-324688179"
            log_bodies = true
            "#,
        );

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.poi_id, "V400m-324688179");
        assert_eq!(settings.sale_id, DEFAULT_SALE_ID);
        assert_eq!(settings.auth_endpoint, DEFAULT_AUTH_ENDPOINT);
        assert!(settings.log_bodies);

        let credentials = settings.credentials().unwrap();
        assert_eq!(credentials.merchant_account, "DemoMerchant");
        assert_eq!(credentials.api_key.expose(), "key-123");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/nexo-pos.toml")));
        assert!(matches!(result, Err(PosError::Settings(_))));
    }

    #[test]
    fn test_missing_credentials() {
        let settings = Settings::default();
        assert!(matches!(settings.credentials(), Err(PosError::Config(_))));

        let settings = Settings {
            merchant_account: Some("DemoMerchant".to_string()),
            api_key: Some(ApiKey::new("")),
            ..Settings::default()
        };
        assert!(matches!(settings.credentials(), Err(PosError::Config(_))));
    }
}
