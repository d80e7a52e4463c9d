use std::path::PathBuf;

use adyen_types::{FieldNotFound, UnexpectedBody};
use thiserror::Error;

/// Errors that can occur while talking to Adyen
#[derive(Error, Debug)]
pub enum AdyenError {
    /// HTTP error from reqwest (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be parsed as JSON
    #[error("Invalid response body (HTTP {status}): {source}")]
    InvalidBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Response body was JSON but not an object
    #[error(transparent)]
    UnexpectedBody(#[from] UnexpectedBody),

    /// Request payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A requested response field is missing
    #[error(transparent)]
    FieldNotFound(#[from] FieldNotFound),

    /// Missing or invalid configuration (credentials, merchant account, currency)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl AdyenError {
    /// Whether the error came from the HTTP round-trip rather than from the caller
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AdyenError::Http(_) | AdyenError::InvalidBody { .. } | AdyenError::UnexpectedBody(_)
        )
    }
}

/// Result type alias for Adyen operations
pub type Result<T> = std::result::Result<T, AdyenError>;
