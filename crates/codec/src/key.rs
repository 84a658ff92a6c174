//! [`KeyMaterial`]: the shared 16-byte AES-128 key.
//!
//! The raw bytes are used verbatim as the cipher key. There is no KDF and no
//! salt, so a caller-supplied key string must already be exactly
//! [`KEY_LEN`] bytes of UTF-8.

use serde::{de, Deserialize, Deserializer};

use crate::cipher::KEY_LEN;
use crate::error::CodecError;

/// Fixed-size key buffer that holds exactly [`KEY_LEN`] bytes.
///
/// The buffer is overwritten with zeroes on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial(Box<[u8; KEY_LEN]>);

impl KeyMaterial {
    /// Validate and copy key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidKeyLength`] if `bytes` is not exactly
    /// [`KEY_LEN`] bytes long. Keys are never truncated or padded.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self, CodecError> {
        let bytes = bytes.as_ref();
        if bytes.len() != KEY_LEN {
            return Err(CodecError::InvalidKeyLength {
                actual: bytes.len(),
            });
        }
        let mut buf = Box::new([0u8; KEY_LEN]);
        buf.copy_from_slice(bytes);
        Ok(Self(buf))
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for KeyMaterial {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}

impl<'de> Deserialize<'de> for KeyMaterial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        KeyMaterial::new(raw.as_bytes()).map_err(de::Error::custom)
    }
}
