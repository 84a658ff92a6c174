//! The canonical plaintext carried inside every blob.
//!
//! ```text
//! {"t":<i64 ms since Unix epoch>,"v":"<value>"}
//! ```
//!
//! Field names and order are part of the wire contract.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, DecodeFailure};

/// A value stamped with its encryption time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Milliseconds since the Unix epoch, captured at encryption time.
    #[serde(rename = "t")]
    pub timestamp: i64,
    /// The protected value.
    #[serde(rename = "v")]
    pub value: String,
}

impl Payload {
    /// Serialise to compact UTF-8 JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::EncodingFailure`] if serialisation fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(self).map_err(|e| CodecError::EncodingFailure(e.to_string()))
    }

    /// Parse decrypted plaintext back into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeFailure::Utf8`] for non-UTF-8 input and
    /// [`DecodeFailure::Payload`] if the JSON shape does not match.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeFailure> {
        let text = std::str::from_utf8(bytes).map_err(|_| DecodeFailure::Utf8)?;
        serde_json::from_str(text).map_err(|_| DecodeFailure::Payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_compact_with_fixed_field_names() {
        let p = Payload {
            timestamp: 1_700_000_000_000,
            value: "s3cr3t".into(),
        };
        let json = String::from_utf8(p.to_bytes().unwrap()).unwrap();
        assert_eq!(json, r#"{"t":1700000000000,"v":"s3cr3t"}"#);
    }

    #[test]
    fn escapes_quotes_and_unicode_round_trip() {
        let p = Payload {
            timestamp: 42,
            value: "he said \"héllo\" 🔑\n".into(),
        };
        let parsed = Payload::from_bytes(&p.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn ignores_unknown_fields() {
        let parsed = Payload::from_bytes(br#"{"t":1,"v":"x","extra":true}"#).unwrap();
        assert_eq!(parsed.value, "x");
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            Payload::from_bytes(br#"{"v":"x"}"#).unwrap_err(),
            DecodeFailure::Payload
        );
        assert_eq!(
            Payload::from_bytes(br#"{"t":1}"#).unwrap_err(),
            DecodeFailure::Payload
        );
    }

    #[test]
    fn rejects_wrong_types() {
        assert_eq!(
            Payload::from_bytes(br#"{"t":"now","v":"x"}"#).unwrap_err(),
            DecodeFailure::Payload
        );
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert_eq!(
            Payload::from_bytes(&[0xff, 0xfe, 0x7b]).unwrap_err(),
            DecodeFailure::Utf8
        );
    }
}
