#![no_main]

use std::time::Duration;

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;
use timeseal::{Codec, SystemClock};

static CODEC: Lazy<Codec<SystemClock>> =
    Lazy::new(|| Codec::new(b"!THIS IS MY KEY!", Duration::ZERO).unwrap());

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = CODEC.verify(data) {
        assert_eq!(payload.len() + CODEC.overhead(), data.len());
    }
});
