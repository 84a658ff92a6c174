//! AES-128-CBC with PKCS#7 padding over `IV || ciphertext` frames.
//!
//! **No authentication tag.** CBC without a MAC is malleable: flipping bits
//! in one ciphertext block garbles that block and flips the same bits in the
//! next plaintext block. The frame layout is a compatibility contract with
//! the encrypting counterpart, so it is kept as is.
//!
//! **Never reuse an IV** under the same key. Every call to [`generate_iv`]
//! reads fresh bytes from the OS CSPRNG.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::{CodecError, DecodeFailure};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Byte length of an AES-128 key (16 bytes = 128 bits).
pub const KEY_LEN: usize = 16;

/// Byte length of the CBC initialisation vector.
pub const IV_LEN: usize = 16;

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// Smallest valid frame: one IV plus one padded block.
pub const MIN_FRAME_LEN: usize = IV_LEN + BLOCK_LEN;

/// Generate a random IV from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`CodecError::EntropyUnavailable`] if the entropy source fails.
pub fn generate_iv() -> Result<[u8; IV_LEN], CodecError> {
    let mut iv = [0u8; IV_LEN];
    getrandom::getrandom(&mut iv).map_err(|_| CodecError::EntropyUnavailable)?;
    Ok(iv)
}

/// Encrypt `plaintext` and return the frame `iv || ciphertext`.
pub fn seal(plaintext: &[u8], key: &[u8; KEY_LEN], iv: &[u8; IV_LEN]) -> Vec<u8> {
    let ciphertext =
        Aes128CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut frame = Vec::with_capacity(IV_LEN + ciphertext.len());
    frame.extend_from_slice(iv);
    frame.extend_from_slice(&ciphertext);
    frame
}

/// Split a frame into IV and ciphertext, decrypt, and strip padding.
///
/// # Errors
///
/// Returns [`DecodeFailure::Undersized`] for frames shorter than
/// [`MIN_FRAME_LEN`], [`DecodeFailure::Misaligned`] if the ciphertext is not
/// block aligned, and [`DecodeFailure::Padding`] if unpadding fails.
pub fn open(frame: &[u8], key: &[u8; KEY_LEN]) -> Result<Vec<u8>, DecodeFailure> {
    if frame.len() < MIN_FRAME_LEN {
        return Err(DecodeFailure::Undersized { len: frame.len() });
    }
    let (iv_bytes, ciphertext) = frame.split_at(IV_LEN);
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(DecodeFailure::Misaligned {
            len: ciphertext.len(),
        });
    }

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(iv_bytes);

    Aes128CbcDec::new(key.into(), (&iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| DecodeFailure::Padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; KEY_LEN] = *b"0123456789abcdef";

    #[test]
    fn seal_open_round_trip() {
        let iv = generate_iv().unwrap();
        let frame = seal(b"attack at dawn", &KEY, &iv);
        assert_eq!(open(&frame, &KEY).unwrap(), b"attack at dawn");
    }

    #[test]
    fn frame_starts_with_iv_and_is_block_aligned() {
        let iv = [0x11u8; IV_LEN];
        let frame = seal(b"x", &KEY, &iv);
        assert_eq!(&frame[..IV_LEN], &iv);
        assert_eq!((frame.len() - IV_LEN) % BLOCK_LEN, 0);
    }

    #[test]
    fn full_block_plaintext_gets_extra_padding_block() {
        let iv = [0u8; IV_LEN];
        let frame = seal(&[b'a'; BLOCK_LEN], &KEY, &iv);
        assert_eq!(frame.len(), IV_LEN + 2 * BLOCK_LEN);
    }

    #[test]
    fn empty_plaintext_is_one_block() {
        let iv = [0u8; IV_LEN];
        let frame = seal(b"", &KEY, &iv);
        assert_eq!(frame.len(), MIN_FRAME_LEN);
        assert!(open(&frame, &KEY).unwrap().is_empty());
    }

    #[test]
    fn generated_ivs_differ() {
        assert_ne!(generate_iv().unwrap(), generate_iv().unwrap());
    }

    #[test]
    fn rejects_undersized_frame() {
        let err = open(&[0u8; MIN_FRAME_LEN - 1], &KEY).unwrap_err();
        assert_eq!(err, DecodeFailure::Undersized { len: MIN_FRAME_LEN - 1 });
    }

    #[test]
    fn rejects_misaligned_ciphertext() {
        let err = open(&[0u8; MIN_FRAME_LEN + 3], &KEY).unwrap_err();
        assert_eq!(err, DecodeFailure::Misaligned { len: BLOCK_LEN + 3 });
    }

    #[test]
    fn wrong_key_does_not_recover_plaintext() {
        let iv = generate_iv().unwrap();
        let frame = seal(b"secret", &KEY, &iv);
        let other = *b"fedcba9876543210";
        assert_ne!(open(&frame, &other).ok().as_deref(), Some(&b"secret"[..]));
    }
}
