//! Error types for the buildbot client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the buildbot master
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request never completed (DNS, connect, TLS, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The master answered with a non-200 status
    #[error("unexpected status {status} from {url}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// URL that produced the status
        url: String,
    },

    /// The response body did not parse as the expected payload
    #[error("failed to parse response: {0}")]
    ParseError(String),

    /// The builder has no builds to inspect
    #[error("builder '{0}' has no builds")]
    NoBuilds(String),
}

impl ClientError {
    /// Create an API error from a status code and the offending URL
    pub fn api_error(status: u16, url: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            url: url.into(),
        }
    }

    /// Check if this error is a transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}
