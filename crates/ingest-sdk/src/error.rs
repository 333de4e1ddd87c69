//! Error types for ingestion client operations.

use thiserror::Error;

/// Failures raised by a [`Transport`](crate::transport::Transport) implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Decode(_) => None,
        }
    }
}

/// Errors returned by the ingestion client.
#[derive(Debug, Error)]
pub enum SdkError {
    /// A call was rejected locally before any request was sent.
    ///
    /// The message is rendered verbatim so callers can match on it.
    #[error("{0}")]
    InvalidArgument(String),

    /// A payload could not be constructed from its options.
    #[error("invalid {payload} payload: {message}")]
    Payload {
        payload: &'static str,
        message: String,
    },

    /// The remote call failed. Propagated unchanged from the transport.
    #[error(transparent)]
    Remote(#[from] TransportError),

    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Client configuration is missing or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// The ingestion base URI could not be built.
    #[error("invalid ingestion URI: {0}")]
    InvalidUri(#[from] url::ParseError),
}

impl SdkError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SdkError::InvalidArgument(message.into())
    }

    /// True when the error was produced by local pre-flight validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SdkError::InvalidArgument(_))
    }
}

/// Result type for client operations.
pub type SdkResult<T> = Result<T, SdkError>;
