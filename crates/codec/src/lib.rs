//! Dynamic-IV codec for short-lived sensitive values.
//!
//! Values are stamped with their encryption time, encrypted with AES-128-CBC
//! under a fresh random IV, and shipped as a base64 blob. Decoding rejects
//! blobs that are malformed, encrypted under another key, or older than the
//! freshness window (60 s by default).
//!
//! ```text
//! blob    := base64( IV[16] || AES-128-CBC-PKCS7(payload, key, IV) )
//! payload := UTF-8( {"t":<i64 ms since epoch>,"v":"<value>"} )
//! ```
//!
//! The codec is stateless. The key is passed on every call and never stored,
//! and nothing here reads configuration or emits logs.

pub mod cipher;
pub mod clock;
pub mod codec;
pub mod error;
pub mod key;
pub mod payload;

pub use cipher::KEY_LEN;
pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{decrypt, encrypt, Codec, DEFAULT_FRESHNESS_WINDOW};
pub use error::{CodecError, DecodeFailure};
pub use key::KeyMaterial;
