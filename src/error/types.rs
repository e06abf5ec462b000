//! Error types returned by the request and response helpers.

use thiserror::Error;

/// Result type for all helper operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the request/response helpers.
///
/// A response whose content type is not `application/json` is *not* an error;
/// it decodes into a result whose error slot carries the raw body text.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, DNS, TLS or send failure reported by the transport
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The caller's cancellation token fired before the operation finished
    #[error("Request cancelled")]
    Cancelled,

    /// The request payload could not be serialized to JSON
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A body declared as `application/json` did not decode into the target type
    #[error("Failed to decode {type_name} from response (status {status}): {source}")]
    Decode {
        type_name: &'static str,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The target URL could not be parsed
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Invalid header, token, proxy or body/header combination
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ClientError {
    /// Whether the operation was aborted by its cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Whether the failure came from the transport (including body reads).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::ReadBody(_))
    }

    /// HTTP status associated with the error, when a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Decode { status, .. } => Some(*status),
            Self::Transport(e) | Self::ReadBody(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
