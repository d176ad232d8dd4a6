//! The backend's uniform response envelope.
//!
//! Every endpoint wraps its payload as `{ code, message, result }`. A `code`
//! of [`SUCCESS_CODE`] means the operation succeeded; anything else carries a
//! human-readable `message` describing the validation or business failure.

use serde::{Deserialize, Serialize};

/// Envelope code the backend uses for successful responses.
pub const SUCCESS_CODE: i32 = 1000;

/// Uniform response wrapper returned by every backend endpoint.
///
/// `result` is absent on pure side-effect endpoints (logout, password change)
/// and on error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Backend status code. `1000` is success; anything else is an error.
    pub code: i32,
    /// Human-readable message, usually only present on errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The actual payload.
    #[serde(default = "none_result", skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

// `#[serde(default)]` alone requires `T: Default`; this helper does not.
fn none_result<T>() -> Option<T> {
    None
}

impl<T> ApiEnvelope<T> {
    /// Whether the envelope reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_decodes_payload() {
        let json = r#"{"code":1000,"result":{"valid":true}}"#;
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(json).expect("decode");
        assert!(envelope.is_success());
        assert_eq!(envelope.result.expect("result")["valid"], true);
        assert!(envelope.message.is_none());
    }

    #[test]
    fn error_envelope_carries_message_without_result() {
        let json = r#"{"code":1009,"message":"INVALID_PASSWORD"}"#;
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(json).expect("decode");
        assert!(!envelope.is_success());
        assert_eq!(envelope.message.as_deref(), Some("INVALID_PASSWORD"));
        assert!(envelope.result.is_none());
    }

    #[test]
    fn envelope_works_without_default_payloads() {
        // A payload type without `Default` must still decode when absent.
        #[derive(Debug, serde::Deserialize)]
        struct NoDefault {
            #[allow(dead_code)]
            value: String,
        }

        let json = r#"{"code":1000}"#;
        let envelope: ApiEnvelope<NoDefault> = serde_json::from_str(json).expect("decode");
        assert!(envelope.is_success());
        assert!(envelope.result.is_none());
    }
}
