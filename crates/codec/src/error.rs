//! Error types for the codec.
//!
//! [`CodecError`] is what callers see. [`DecodeFailure`] classifies why an
//! untrusted blob could not be turned back into a value; the public
//! [`Codec::decrypt`](crate::Codec::decrypt) boundary collapses every
//! variant of it into "no value".

use thiserror::Error;

use crate::cipher::KEY_LEN;

/// Errors produced by the codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The key material is not exactly [`KEY_LEN`] bytes.
    #[error("invalid key length: expected {KEY_LEN} bytes, got {actual}")]
    InvalidKeyLength {
        /// Length of the rejected key material in bytes.
        actual: usize,
    },

    /// The payload could not be serialised.
    #[error("payload encoding failed: {0}")]
    EncodingFailure(String),

    /// The OS entropy source could not produce an IV.
    #[error("entropy source unavailable")]
    EntropyUnavailable,

    /// An encrypted blob could not be decoded.
    #[error("decode failure: {0}")]
    Decode(#[from] DecodeFailure),
}

/// Reasons an encrypted blob is rejected on decode.
///
/// Display strings never include key, plaintext, or ciphertext bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// The blob is not valid standard base64.
    #[error("malformed base64")]
    Base64,

    /// The decoded blob is too short to hold an IV and one cipher block.
    #[error("blob too short ({len} bytes)")]
    Undersized { len: usize },

    /// The ciphertext is not a whole number of cipher blocks.
    #[error("ciphertext not block aligned ({len} bytes)")]
    Misaligned { len: usize },

    /// Decryption produced invalid PKCS#7 padding.
    #[error("invalid padding")]
    Padding,

    /// The plaintext is not valid UTF-8.
    #[error("plaintext is not valid UTF-8")]
    Utf8,

    /// The plaintext does not have the expected payload shape.
    #[error("unexpected payload shape")]
    Payload,

    /// The embedded timestamp is outside the freshness window.
    #[error("payload expired ({age_ms} ms from now)")]
    Expired { age_ms: u64 },
}

impl DecodeFailure {
    /// Returns `true` when the blob was well formed but stale.
    pub fn is_expired(&self) -> bool {
        matches!(self, DecodeFailure::Expired { .. })
    }
}
