use thiserror::Error;

/// Boxed source error produced by an HTTP transport.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum PosError {
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),
    #[error("Session request rejected with HTTP status {code}")]
    HttpStatus { code: u16 },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, PosError>;
