//! The codec: one AES-GCM key, one freshness policy, one clock.

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use crate::aead::{Cipher, KeySize, MAX_MESSAGE_BYTES};
use crate::clock::{Clock, Timestamp};
#[cfg(feature = "std")]
use crate::clock::SystemClock;
use crate::error::Error;
use crate::nonce;
use crate::wire::{self, NONCE_BYTES, OVERHEAD_BYTES, TAG_BYTES};

/// Encrypts/authenticates payloads into opaque, optionally self-expiring blobs.
///
/// A `Codec` is fixed by its key and `max_age` at construction and holds no
/// mutable state, so a single instance can be shared across threads.
///
/// Two independent modes are offered:
///
/// - [`encode`](Self::encode) / [`decode`](Self::decode): confidentiality,
///   integrity and freshness. Blob: `nonce || ciphertext || tag`.
/// - [`sign`](Self::sign) / [`verify`](Self::verify): integrity and freshness
///   only, the payload stays readable. Blob: `payload || nonce || tag`.
///
/// Blobs from one mode are not accepted by the other.
#[derive(Clone)]
pub struct Codec<C> {
    cipher: Cipher,
    max_age: Duration,
    clock: C,
}

#[cfg(feature = "std")]
impl Codec<SystemClock> {
    /// Build a codec on the system clock.
    ///
    /// `key` must be 16, 24 or 32 bytes (AES-128/192/256); it is copied and
    /// the caller's buffer is never referenced again. A zero `max_age`
    /// disables the freshness check entirely.
    pub fn new(key: &[u8], max_age: Duration) -> Result<Self, Error> {
        Self::with_clock(key, max_age, SystemClock)
    }
}

impl<C: Clock> Codec<C> {
    /// Build a codec that reads "now" from `clock`.
    pub fn with_clock(key: &[u8], max_age: Duration, clock: C) -> Result<Self, Error> {
        let cipher = Cipher::new(key)?;

        tracing::debug!(
            key_bits = cipher.key_size().bits(),
            max_age_ms = max_age.as_millis() as u64,
            "codec initialised"
        );

        Ok(Self {
            cipher,
            max_age,
            clock,
        })
    }

    /// Bytes added to every payload by either mode (nonce + tag).
    #[inline]
    pub fn overhead(&self) -> usize {
        OVERHEAD_BYTES
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    pub fn key_size(&self) -> KeySize {
        self.cipher.key_size()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Encrypt `plaintext` into a fresh blob.
    ///
    /// # Panics
    ///
    /// If `plaintext` is larger than GCM permits (2^36 - 32 bytes).
    pub fn encode(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(plaintext, &mut out);
        out
    }

    /// Like [`encode`](Self::encode), but writes into `dst`, reusing its
    /// allocation. Previous contents of `dst` are discarded.
    pub fn encode_into(&self, plaintext: &[u8], dst: &mut Vec<u8>) {
        let nonce = nonce::build(self.clock.now());

        dst.clear();
        dst.reserve(plaintext.len() + OVERHEAD_BYTES);
        dst.extend_from_slice(&nonce);
        dst.extend_from_slice(plaintext);

        let tag = self
            .cipher
            .seal_in_place(&nonce, &mut dst[NONCE_BYTES..])
            .unwrap_or_else(|_| too_long(plaintext.len()));
        dst.extend_from_slice(&tag);
    }

    /// Authenticate and decrypt a blob produced by [`encode`](Self::encode).
    pub fn decode(&self, blob: &[u8]) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.decode_into(blob, &mut out)?;
        Ok(out)
    }

    /// Like [`decode`](Self::decode), but writes the plaintext into `dst`.
    /// On error `dst` is left empty.
    pub fn decode_into(&self, blob: &[u8], dst: &mut Vec<u8>) -> Result<(), Error> {
        dst.clear();

        let parts = wire::split_sealed(blob)?;

        // The issue time is read before the tag is checked so stale blobs are
        // dropped without running GCM. That is only sound because the tag also
        // covers the nonce: a blob with a forged timestamp that slips past this
        // check still fails below, and nothing else reads the timestamp.
        self.check_fresh(parts.issued_at())?;

        let Some(ct_len) = parts.body.len().checked_sub(TAG_BYTES) else {
            return Err(Error::AuthenticationFailed(aes_gcm::Error));
        };
        let (ciphertext, tag) = parts.body.split_at(ct_len);
        let tag: &[u8; TAG_BYTES] = tag.try_into().map_err(|_| Error::InvalidData)?;

        dst.extend_from_slice(ciphertext);
        if let Err(e) = self.cipher.open_in_place(parts.nonce, &mut dst[..], tag) {
            dst.clear();
            return Err(e.into());
        }
        Ok(())
    }

    /// Wrap `data` with a nonce and tag, leaving it readable.
    ///
    /// # Panics
    ///
    /// If `data` is larger than GCM permits (2^36 - 32 bytes).
    pub fn sign(&self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        self.sign_into(data, &mut out);
        out
    }

    /// Like [`sign`](Self::sign), but writes into `dst`, reusing its allocation.
    pub fn sign_into(&self, data: &[u8], dst: &mut Vec<u8>) {
        let nonce = nonce::build(self.clock.now());
        let tag = self
            .cipher
            .tag_only(&nonce, data)
            .unwrap_or_else(|_| too_long(data.len()));

        dst.clear();
        dst.reserve(data.len() + OVERHEAD_BYTES);
        dst.extend_from_slice(data);
        dst.extend_from_slice(&nonce);
        dst.extend_from_slice(&tag);
    }

    /// Check a blob produced by [`sign`](Self::sign) and return the payload
    /// it carries, borrowed from `blob`.
    pub fn verify<'a>(&self, blob: &'a [u8]) -> Result<&'a [u8], Error> {
        let parts = wire::split_signed(blob)?;

        // Same ordering and caveat as decode_into.
        self.check_fresh(parts.issued_at())?;

        self.cipher
            .verify_tag(parts.nonce, parts.plaintext, parts.tag)?;
        Ok(parts.plaintext)
    }

    /// Reject timestamps older than `max_age` or ahead of the clock.
    fn check_fresh(&self, issued: Timestamp) -> Result<(), Error> {
        if self.max_age.is_zero() {
            return Ok(());
        }

        let elapsed = self.clock.now().as_nanos() - issued.as_nanos();
        if elapsed < 0 || elapsed > self.max_age.as_nanos() as i128 {
            return Err(Error::Expired);
        }
        Ok(())
    }
}

impl<C> fmt::Debug for Codec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("key_size", &self.cipher.key_size())
            .field("max_age", &self.max_age)
            .finish_non_exhaustive()
    }
}

#[cold]
fn too_long(len: usize) -> ! {
    panic!("message of {len} bytes exceeds the AES-GCM limit of {MAX_MESSAGE_BYTES} bytes")
}
