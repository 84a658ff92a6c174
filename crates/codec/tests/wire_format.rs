//! Pins the blob format by decoding it independently of the codec, the way
//! the encrypting counterpart's decoder would.

use std::sync::Arc;

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use dyniv_codec::{Codec, ManualClock};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

const KEY: &[u8; 16] = b"0123456789abcdef";
const T0: i64 = 1_700_000_000_000;

#[test]
fn blob_is_iv_then_cbc_ciphertext_of_compact_json() {
    let codec = Codec::with_clock(Arc::new(ManualClock::new(T0)));
    let blob = codec.encrypt("s3cr3t", KEY).unwrap();

    let frame = STANDARD.decode(&blob).unwrap();
    let (iv, ciphertext) = frame.split_at(16);
    let mut iv_arr = [0u8; 16];
    iv_arr.copy_from_slice(iv);

    let plaintext = Aes128CbcDec::new(KEY.into(), (&iv_arr).into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .unwrap();

    assert_eq!(
        String::from_utf8(plaintext).unwrap(),
        r#"{"t":1700000000000,"v":"s3cr3t"}"#
    );
}

#[test]
fn decodes_blob_built_by_a_foreign_encoder() {
    let iv = [0x5au8; 16];
    let payload = serde_json::json!({ "t": T0 + 1_000, "v": "from the frontend" });
    let ciphertext = Aes128CbcEnc::new(KEY.into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(payload.to_string().as_bytes());

    let mut frame = iv.to_vec();
    frame.extend_from_slice(&ciphertext);
    let blob = STANDARD.encode(frame);

    let codec = Codec::with_clock(Arc::new(ManualClock::new(T0)));
    assert_eq!(
        codec.decrypt(&blob, KEY).unwrap().as_deref(),
        Some("from the frontend")
    );
}

#[test]
fn stale_foreign_blob_is_rejected() {
    let iv = [0x01u8; 16];
    let payload = serde_json::json!({ "t": T0, "v": "old" });
    let ciphertext = Aes128CbcEnc::new(KEY.into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(payload.to_string().as_bytes());
    let mut frame = iv.to_vec();
    frame.extend_from_slice(&ciphertext);
    let blob = STANDARD.encode(frame);

    let clock = ManualClock::new(T0);
    let codec = Codec::with_clock(Arc::new(clock.clone()));
    clock.advance(61_000);
    assert_eq!(codec.decrypt(&blob, KEY).unwrap(), None);
}
