//! Error types module
//!
//! Every failure surfaced by the client maps onto one `ArchiveError` variant.
//! Nothing is retried or logged here; callers receive the full context
//! (status code, response body, wrapped cause).

use std::io;

/// Boxed cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The inputs cannot be turned into a valid HTTP request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Connection, TLS or body-read failure.
    #[error("{context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: BoxError,
    },

    /// The identifier lookup returned something that is not the expected JSON.
    #[error("Unable to decode the response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The remote service answered with a non-2xx status.
    #[error("{status} Response: {body}")]
    Rejected { status: u16, body: String },

    /// The uniqueness check failed or reported `success = false`.
    #[error("Unable to find a unique identifier for {candidate:?}: {reason}")]
    IdentifierUnresolved {
        candidate: String,
        reason: String,
        #[source]
        source: Option<Box<ArchiveError>>,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for client operations
pub type ArchiveResult<T> = Result<T, ArchiveError>;

impl ArchiveError {
    pub fn transport(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ArchiveError::Transport {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn missing_credentials() -> Self {
        ArchiveError::Config(
            "IA_S3_ACCESS_KEY and IA_S3_SECRET_KEY must be set for uploads".to_string(),
        )
    }

    /// Status code of a rejected request, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ArchiveError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
