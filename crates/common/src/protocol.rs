//! Request and response types exchanged with the gateway.
//!
//! All bodies are JSON. Encrypted values travel as opaque base64 strings.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Encrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptRequest {
    /// Plaintext value to protect.
    pub value: String,
}

/// Successful response body for `POST /encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptResponse {
    /// Base64 blob: `IV || AES-128-CBC ciphertext`.
    pub blob: String,
}

// ---------------------------------------------------------------------------
// Decrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptRequest {
    /// Blob as produced by an encrypting party, passed through unmodified.
    pub blob: String,
}

/// Successful response body for `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptResponse {
    /// The recovered plaintext value.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"invalid_value"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: String,
    /// Freshness window applied on decrypt, in milliseconds.
    pub freshness_window_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decrypt_request_from_json() {
        let req: DecryptRequest = serde_json::from_value(json!({"blob": "AAAA"})).unwrap();
        assert_eq!(req.blob, "AAAA");
    }

    #[test]
    fn encrypt_request_requires_value() {
        assert!(serde_json::from_value::<EncryptRequest>(json!({})).is_err());
    }

    #[test]
    fn error_response_new() {
        let e = ErrorResponse::new("invalid_value", "value is invalid or expired");
        assert_eq!(e.code, "invalid_value");
        assert!(e.message.contains("expired"));
    }

    #[test]
    fn health_response_field_names() {
        let h = HealthResponse {
            status: "ok".into(),
            freshness_window_ms: 60_000,
        };
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v, json!({"status": "ok", "freshness_window_ms": 60000}));
    }
}
