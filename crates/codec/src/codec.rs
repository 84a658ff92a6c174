//! The Dynamic-IV Codec: timestamped, IV-per-call AES-128-CBC encryption of
//! short-lived string values.
//!
//! # Blob format
//!
//! ```text
//! base64( IV[16] || AES-128-CBC-PKCS7( {"t":<ms>,"v":"<value>"} ) )
//! ```
//!
//! # Error asymmetry
//!
//! [`Codec::encrypt`] fails loudly on caller misuse. [`Codec::decrypt`]
//! handles attacker-influenced input and reports every decode problem,
//! including expiry, as `Ok(None)`. Only a wrong-length key is an `Err`.

use std::{sync::Arc, time::Duration};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::cipher;
use crate::clock::{Clock, SystemClock};
use crate::error::{CodecError, DecodeFailure};
use crate::key::KeyMaterial;
use crate::payload::Payload;

/// Default maximum distance between encryption time and decode time.
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_millis(60_000);

/// Stateless encrypt/decrypt pair sharing a clock and a freshness window.
///
/// Holds no key and no per-call state; cloning is cheap and a single value
/// can be shared across threads.
#[derive(Clone)]
pub struct Codec {
    clock: Arc<dyn Clock>,
    freshness_window: Duration,
}

impl Codec {
    /// A codec on the system clock with [`DEFAULT_FRESHNESS_WINDOW`].
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// A codec on the given clock with [`DEFAULT_FRESHNESS_WINDOW`].
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            freshness_window: DEFAULT_FRESHNESS_WINDOW,
        }
    }

    /// Replace the freshness window.
    pub fn with_freshness_window(mut self, window: Duration) -> Self {
        self.freshness_window = window;
        self
    }

    /// The configured freshness window.
    pub fn freshness_window(&self) -> Duration {
        self.freshness_window
    }

    /// Encrypt `value` under `key` with a fresh random IV and the current time.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidKeyLength`] if `key` is not 16 bytes,
    /// [`CodecError::EncodingFailure`] if the payload cannot be serialised, and
    /// [`CodecError::EntropyUnavailable`] if no IV could be generated.
    pub fn encrypt(&self, value: &str, key: impl AsRef<[u8]>) -> Result<String, CodecError> {
        let key = KeyMaterial::new(key)?;
        let payload = Payload {
            timestamp: self.clock.now_millis(),
            value: value.to_owned(),
        };
        let plaintext = payload.to_bytes()?;
        let iv = cipher::generate_iv()?;
        let frame = cipher::seal(&plaintext, key.as_bytes(), &iv);
        Ok(STANDARD.encode(frame))
    }

    /// Decrypt a blob, returning `None` for anything that is not a fresh,
    /// well-formed blob under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidKeyLength`] if `key` is not 16 bytes.
    /// Malformed, tampered, and expired blobs are **not** errors.
    pub fn decrypt(
        &self,
        blob: &str,
        key: impl AsRef<[u8]>,
    ) -> Result<Option<String>, CodecError> {
        match self.open(blob, key) {
            Ok(value) => Ok(Some(value)),
            Err(CodecError::Decode(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Decrypt a blob, exposing why it was rejected.
    ///
    /// Intended for callers that want to log expiry separately from
    /// corruption. Do not forward the [`DecodeFailure`] to untrusted parties.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidKeyLength`] for a bad key and
    /// [`CodecError::Decode`] for any rejected blob.
    pub fn open(&self, blob: &str, key: impl AsRef<[u8]>) -> Result<String, CodecError> {
        let key = KeyMaterial::new(key)?;
        let frame = STANDARD.decode(blob).map_err(|_| DecodeFailure::Base64)?;
        let plaintext = cipher::open(&frame, key.as_bytes())?;
        let payload = Payload::from_bytes(&plaintext)?;
        self.check_fresh(payload.timestamp)?;
        Ok(payload.value)
    }

    /// A timestamp is fresh iff `|now - timestamp| <= window` (inclusive).
    fn check_fresh(&self, timestamp: i64) -> Result<(), DecodeFailure> {
        let age_ms = self.clock.now_millis().abs_diff(timestamp);
        let window_ms = u64::try_from(self.freshness_window.as_millis()).unwrap_or(u64::MAX);
        if age_ms > window_ms {
            return Err(DecodeFailure::Expired { age_ms });
        }
        Ok(())
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("freshness_window", &self.freshness_window)
            .finish_non_exhaustive()
    }
}

/// Encrypt with the system clock and the default freshness window.
///
/// # Errors
///
/// See [`Codec::encrypt`].
pub fn encrypt(value: &str, key: impl AsRef<[u8]>) -> Result<String, CodecError> {
    Codec::new().encrypt(value, key)
}

/// Decrypt with the system clock and the default freshness window.
///
/// # Errors
///
/// See [`Codec::decrypt`].
pub fn decrypt(blob: &str, key: impl AsRef<[u8]>) -> Result<Option<String>, CodecError> {
    Codec::new().decrypt(blob, key)
}
