//! Error types for client operations
//!
//! One flat enum covers the whole surface: authentication, transport,
//! remote rejection, decoding, and configuration. Every failure
//! propagates to the immediate caller; the client performs no retries
//! and no local recovery.

use reqwest::StatusCode;
use thiserror::Error;

/// Top-level client error
#[derive(Debug, Error)]
pub enum Error {
    /// Token exchange with the identity provider was rejected or returned
    /// a malformed body
    #[error("authentication failed: {reason}")]
    AuthenticationFailed {
        /// What the token endpoint objected to
        reason: String,
    },

    /// No token is stored; `authenticate` has never succeeded on this client
    #[error("not authenticated: call `authenticate` before issuing requests")]
    NotAuthenticated,

    /// The extension API answered with a non-success status
    #[error("API request failed with HTTP {status}: {body}")]
    Api {
        /// HTTP status returned by the remote API
        status: StatusCode,
        /// Raw response body, surfaced verbatim
        body: String,
    },

    /// Transport-level failure (connect, TLS, timeout in the transport)
    #[error("network error: {source}")]
    Network {
        /// Underlying transport error
        #[from]
        source: reqwest::Error,
    },

    /// A response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Invalid construction-time configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_body() {
        let err = Error::Api {
            status: StatusCode::FORBIDDEN,
            body: "{\"error\":\"insufficient_scope\"}".to_string(),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("insufficient_scope"));
    }

    #[test]
    fn not_authenticated_points_at_authenticate() {
        let err = Error::NotAuthenticated;
        assert!(err.to_string().contains("authenticate"));
    }
}
