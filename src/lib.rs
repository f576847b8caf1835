//! # timeseal
//!
//! Stateless, tamper-evident, optionally self-expiring tokens.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use timeseal::Codec;
//!
//! let codec = Codec::new(b"!THIS IS MY KEY!", Duration::from_secs(1)).unwrap();
//!
//! let mut token = codec.encode(b"My Message");
//! assert_eq!(codec.decode(&token).unwrap(), b"My Message");
//!
//! token[0] ^= 0x80;
//! assert!(codec.decode(&token).is_err());
//! ```
//!
//! ## Security Properties
//!
//! - **AEAD**: AES-GCM with 128/192/256-bit keys and a 12-byte nonce
//! - **Embedded issue time**: the nonce carries the Unix second it was made in
//! - **Freshness**: blobs older than `max_age`, or dated in the future, are rejected
//! - **Tamper evidence**: any bit flip, including in the timestamp, fails authentication
//!
//! ## What's NOT Provided
//!
//! - Key distribution or rotation
//! - Replay protection inside the freshness window
//! - Guaranteed nonce uniqueness on coarse clocks (see [`nonce`])
//! - Any transport encoding (base64, cookies, ...)

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/timeseal/0.1.0")]

extern crate alloc;

mod aead;
mod codec;
mod error;

pub mod clock;
pub mod nonce;
pub mod wire;

pub use aead::{generate_key, KeySize, MAX_MESSAGE_BYTES};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, Timestamp};
pub use codec::Codec;
pub use error::Error;
pub use wire::{NONCE_BYTES, OVERHEAD_BYTES, TAG_BYTES};

/// Re-exported so callers can name the source of
/// [`Error::AuthenticationFailed`].
pub use aes_gcm;
