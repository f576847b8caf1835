#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use timeseal::{Clock, Codec, Timestamp};

pub const KEY_128: &[u8; 16] = b"!THIS IS MY KEY!";

/// Start of 2024-01-01 UTC, on a whole second.
pub const T0_SECS: i64 = 1_704_067_200;

/// Test clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    nanos: AtomicI64,
}

impl ManualClock {
    pub fn at(t: Timestamp) -> Arc<Self> {
        Arc::new(Self {
            nanos: AtomicI64::new(t.as_nanos() as i64),
        })
    }

    pub fn advance(&self, d: Duration) {
        self.nanos.fetch_add(d.as_nanos() as i64, Ordering::SeqCst);
    }

    pub fn rewind(&self, d: Duration) {
        self.nanos.fetch_sub(d.as_nanos() as i64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let n = self.nanos.load(Ordering::SeqCst);
        Timestamp::new(n.div_euclid(1_000_000_000), n.rem_euclid(1_000_000_000) as u32)
    }
}

pub fn manual_codec(max_age: Duration) -> (Codec<Arc<ManualClock>>, Arc<ManualClock>) {
    let clock = ManualClock::at(Timestamp::from_unix_secs(T0_SECS));
    let codec = Codec::with_clock(KEY_128, max_age, clock.clone()).unwrap();
    (codec, clock)
}
