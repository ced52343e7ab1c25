//! Error types for Backlog integration.

/// Invalid client configuration, one variant per rejected field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// Endpoint is empty or does not use an http(s) scheme.
    #[error("invalid endpoint URL: must start with http:// or https://")]
    InvalidEndpoint,

    /// Access token is empty or shorter than the minimum length.
    #[error("invalid API key: must be at least {min_len} characters")]
    InvalidAccessToken {
        /// Minimum accepted length.
        min_len: usize,
    },

    /// Wiki ID is empty or not numeric.
    #[error("invalid wiki ID '{0}': must be a number")]
    InvalidWikiId(String),
}

/// Error from Backlog API operations.
#[derive(Debug, thiserror::Error)]
pub enum BacklogError {
    /// HTTP request failed (network error, timeout, unreadable body).
    #[error("HTTP request failed")]
    Transport(#[from] ureq::Error),

    /// Server answered with a non-2xx status.
    #[error("HTTP error: {status} - {body}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Attachment association returned an empty list.
    #[error("attachment response contained no attachments")]
    EmptyAttachmentResponse,
}

impl BacklogError {
    /// HTTP status code for remote errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
