//! Timestamp-derived nonces.
//!
//! Layout (12 bytes):
//!   nonce[0..4]  = low 32 bits of the sub-second nanoseconds, little-endian
//!   nonce[4..12] = Unix seconds, big-endian
//!
//! No RNG is involved, so the codec stays stateless and every blob carries a
//! recoverable issue time. Uniqueness rests on the clock: two calls under the
//! same key that land on the same second and the same nanosecond value produce
//! the same nonce, which breaks GCM for that pair. Clocks with coarse sub-second
//! resolution (some VMs tick in microseconds or worse) widen that window, so
//! callers issuing many tokens per tick should not share a key across them.
//!
//! The nonce travels in the clear. It is still covered by the GCM tag (the tag
//! is a function of the nonce), so a forged timestamp can only ever cause an
//! authentication failure, never a successful open.

use crate::clock::Timestamp;
use crate::wire::NONCE_BYTES;

/// Build the nonce for an encode/sign issued at `at`.
pub fn build(at: Timestamp) -> [u8; NONCE_BYTES] {
    let mut n = [0u8; NONCE_BYTES];
    n[..4].copy_from_slice(&at.subsec_nanos.to_le_bytes());
    n[4..].copy_from_slice(&at.unix_secs.to_be_bytes());
    n
}

/// Read the embedded issue time (whole seconds) back out of a nonce.
///
/// The result is unauthenticated until the tag over this nonce verifies.
#[inline]
pub fn issued_at(nonce: &[u8; NONCE_BYTES]) -> Timestamp {
    let mut secs = [0u8; 8];
    secs.copy_from_slice(&nonce[4..]);
    Timestamp::from_unix_secs(i64::from_be_bytes(secs))
}
