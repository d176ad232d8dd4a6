//! Errors produced by the remote resource clients.

use thiserror::Error;

/// Errors that can occur when talking to the catalog backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response envelope (DNS, refused
    /// connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend rejected the bearer token. The client has already cleared
    /// the credential vault and fired the forced sign-out hooks by the time
    /// this value reaches the caller.
    #[error("authentication rejected")]
    Unauthorized,

    /// The backend answered with an error envelope.
    #[error("api error {code}: {message}")]
    Api {
        /// Backend status code from the envelope.
        code: i32,
        /// Envelope message. Logged, never shown to the user verbatim.
        message: String,
    },

    /// Non-success HTTP status without a parseable envelope.
    #[error("http status {status}")]
    Status {
        /// The HTTP status code received.
        status: reqwest::StatusCode,
    },

    /// The response body was not valid envelope JSON.
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A success envelope arrived without the expected `result` payload.
    #[error("response envelope carried no result")]
    MissingResult,
}

impl ApiError {
    /// Whether this error is the centrally handled 401 case.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = ApiError::Api {
            code: 1009,
            message: "INVALID_PASSWORD".into(),
        };
        assert_eq!(err.to_string(), "api error 1009: INVALID_PASSWORD");
        assert!(!err.is_unauthorized());
        assert!(ApiError::Unauthorized.is_unauthorized());
    }
}
