mod common;

use std::time::Duration;

use timeseal::{wire, Error, NONCE_BYTES, OVERHEAD_BYTES, TAG_BYTES};

use common::{manual_codec, T0_SECS};

#[test]
fn sign_verify_roundtrip() {
    let (codec, _) = manual_codec(Duration::from_secs(1));
    let blob = codec.sign(b"visible payload");

    assert_eq!(&blob[..15], b"visible payload");
    assert_eq!(blob.len(), 15 + OVERHEAD_BYTES);
    assert_eq!(codec.verify(&blob).unwrap(), b"visible payload");
}

#[test]
fn verify_borrows_from_blob() {
    let (codec, _) = manual_codec(Duration::ZERO);
    let blob = codec.sign(b"zero copy");
    let payload = codec.verify(&blob).unwrap();
    assert_eq!(payload.as_ptr(), blob.as_ptr());
}

#[test]
fn sign_empty_payload() {
    let (codec, _) = manual_codec(Duration::ZERO);
    let blob = codec.sign(b"");
    assert_eq!(blob.len(), OVERHEAD_BYTES);
    assert_eq!(codec.verify(&blob).unwrap(), b"");
}

#[test]
fn tampered_payload_fails() {
    let (codec, _) = manual_codec(Duration::from_secs(1));
    let mut blob = codec.sign(b"amount=10");
    blob[7] = b'9';

    assert!(matches!(
        codec.verify(&blob),
        Err(Error::AuthenticationFailed(_))
    ));
}

#[test]
fn every_bit_flip_fails() {
    let (codec, _) = manual_codec(Duration::ZERO);
    let blob = codec.sign(b"signed");

    for byte in 0..blob.len() {
        for bit in 0..8 {
            let mut t = blob.clone();
            t[byte] ^= 1 << bit;
            assert!(codec.verify(&t).is_err(), "byte {byte} bit {bit}");
        }
    }
}

#[test]
fn too_short_is_invalid_data() {
    let (codec, _) = manual_codec(Duration::ZERO);
    assert_eq!(codec.verify(b""), Err(Error::InvalidData));
    assert_eq!(
        codec.verify(&[0u8; NONCE_BYTES + TAG_BYTES - 1]),
        Err(Error::InvalidData)
    );
}

#[test]
fn signed_blob_expires() {
    let (codec, clock) = manual_codec(Duration::from_secs(1));
    let blob = codec.sign(b"short lived");

    clock.advance(Duration::from_millis(900));
    assert!(codec.verify(&blob).is_ok());

    clock.advance(Duration::from_millis(200));
    assert_eq!(codec.verify(&blob), Err(Error::Expired));
}

#[test]
fn signed_blob_from_future_is_expired() {
    let (codec, clock) = manual_codec(Duration::from_secs(1));
    let blob = codec.sign(b"skewed");

    clock.rewind(Duration::from_millis(1));
    assert_eq!(codec.verify(&blob), Err(Error::Expired));
}

#[test]
fn signed_nonce_carries_timestamp() {
    let (codec, _) = manual_codec(Duration::ZERO);
    let blob = codec.sign(b"ts");
    let parts = wire::split_signed(&blob).unwrap();
    assert_eq!(parts.issued_at().unix_secs, T0_SECS);
    assert_eq!(parts.plaintext, b"ts");
}

#[test]
fn modes_are_not_interchangeable() {
    let (codec, _) = manual_codec(Duration::ZERO);

    let signed = codec.sign(b"mode");
    assert!(codec.decode(&signed).is_err());

    let sealed = codec.encode(b"mode");
    assert!(codec.verify(&sealed).is_err());
}

#[test]
fn sign_into_reuses_buffer() {
    let (codec, _) = manual_codec(Duration::ZERO);
    let mut buf = b"previous contents that are longer".to_vec();

    codec.sign_into(b"new", &mut buf);
    assert_eq!(buf.len(), 3 + OVERHEAD_BYTES);
    assert_eq!(codec.verify(&buf).unwrap(), b"new");
}
