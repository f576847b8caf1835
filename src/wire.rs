//! Blob layouts
//!
//! Sealed (encode/decode):
//!   nonce[12] || ciphertext[len(plaintext)] || tag[16]
//!
//! Signed (sign/verify):
//!   plaintext[L] || nonce[12] || tag[16]
//!
//! nonce = nanos_lo32_le[4] || unix_secs_be[8]

use crate::clock::Timestamp;
use crate::error::Error;
use crate::nonce;

pub const NONCE_BYTES: usize = 12;
pub const TAG_BYTES: usize = 16;

/// Fixed expansion of both layouts.
pub const OVERHEAD_BYTES: usize = NONCE_BYTES + TAG_BYTES; // 28

/// Shortest input `decode` will hand to the primitive.
pub const MIN_SEALED_BYTES: usize = NONCE_BYTES;

/// Shortest input `verify` accepts.
pub const MIN_SIGNED_BYTES: usize = OVERHEAD_BYTES;

/// Borrowed view of a sealed blob.
#[derive(Debug, Clone, Copy)]
pub struct SealedParts<'a> {
    pub nonce: &'a [u8; NONCE_BYTES],
    /// Ciphertext followed by the tag; may be shorter than a tag if truncated.
    pub body: &'a [u8],
}

impl SealedParts<'_> {
    /// Unauthenticated issue time.
    pub fn issued_at(&self) -> Timestamp {
        nonce::issued_at(self.nonce)
    }
}

/// Borrowed view of a signed blob.
#[derive(Debug, Clone, Copy)]
pub struct SignedParts<'a> {
    pub plaintext: &'a [u8],
    pub nonce: &'a [u8; NONCE_BYTES],
    pub tag: &'a [u8; TAG_BYTES],
}

impl SignedParts<'_> {
    /// Unauthenticated issue time.
    pub fn issued_at(&self) -> Timestamp {
        nonce::issued_at(self.nonce)
    }
}

pub fn split_sealed(blob: &[u8]) -> Result<SealedParts<'_>, Error> {
    if blob.len() < MIN_SEALED_BYTES {
        return Err(Error::InvalidData);
    }

    let (nonce, body) = blob.split_at(NONCE_BYTES);
    let nonce: &[u8; NONCE_BYTES] = nonce.try_into().map_err(|_| Error::InvalidData)?;

    Ok(SealedParts { nonce, body })
}

pub fn split_signed(blob: &[u8]) -> Result<SignedParts<'_>, Error> {
    if blob.len() < MIN_SIGNED_BYTES {
        return Err(Error::InvalidData);
    }

    let nonce_start = blob.len() - OVERHEAD_BYTES;
    let tag_start = nonce_start + NONCE_BYTES;

    let nonce: &[u8; NONCE_BYTES] = blob[nonce_start..tag_start]
        .try_into()
        .map_err(|_| Error::InvalidData)?;
    let tag: &[u8; TAG_BYTES] = blob[tag_start..]
        .try_into()
        .map_err(|_| Error::InvalidData)?;

    Ok(SignedParts {
        plaintext: &blob[..nonce_start],
        nonce,
        tag,
    })
}

/// Issue time embedded in a sealed blob, without authenticating it.
///
/// Useful for diagnostics only; never base a decision on it unless
/// `Codec::decode` on the same blob has succeeded.
pub fn timestamp_of(blob: &[u8]) -> Result<Timestamp, Error> {
    split_sealed(blob).map(|p| p.issued_at())
}
