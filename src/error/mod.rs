//! Error types for the radio code SDK.

pub mod code;

pub use code::ErrorCode;

use thiserror::Error;

/// Local failure causes.
///
/// Client operations never return these directly: they are logged and folded
/// into [`ErrorCode::ConnectionError`]. They surface from configuration
/// loading, catalog lookups and [`crate::client::ApiResponse::into_result`].
#[derive(Error, Debug)]
pub enum RadioError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Empty response from the web API")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("HTTP error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Unknown radio model: {0}")]
    UnknownModel(String),

    #[error("Request rejected: {0}")]
    Rejected(ErrorCode),
}

impl RadioError {
    /// Whether sending the same request again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            Self::EmptyResponse => true,
            Self::Status { status, .. } => *status == 429 || (500..=599).contains(status),
            _ => false,
        }
    }

    /// The caller-facing code this error collapses to.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Rejected(code) => *code,
            Self::UnknownModel(_) => ErrorCode::InvalidRadioModel,
            _ => ErrorCode::ConnectionError,
        }
    }
}

impl From<toml::de::Error> for RadioError {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration(error.to_string())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RadioError>;
