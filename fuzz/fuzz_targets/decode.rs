#![no_main]

use std::time::Duration;

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;
use timeseal::{Codec, SystemClock};

static CODEC: Lazy<Codec<SystemClock>> =
    Lazy::new(|| Codec::new(b"!THIS IS MY KEY!", Duration::ZERO).unwrap());

fuzz_target!(|data: &[u8]| {
    let _ = timeseal::wire::timestamp_of(data);

    let mut out = Vec::new();
    if CODEC.decode_into(data, &mut out).is_err() {
        assert!(out.is_empty());
    }
});
