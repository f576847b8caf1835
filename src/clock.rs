//! Time source used for nonce construction and freshness checks.
//!
//! The codec never reads the wall clock directly; it asks a [`Clock`]. Production
//! code uses [`SystemClock`]; tests and no_std targets supply their own.

#[cfg(feature = "std")]
use alloc::sync::Arc;

/// A point in time relative to the Unix epoch.
///
/// `subsec_nanos` is always in `0..1_000_000_000`, also for instants before the
/// epoch (where `unix_secs` is negative and rounds toward negative infinity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub unix_secs: i64,
    pub subsec_nanos: u32,
}

pub(crate) const NANOS_PER_SEC: i128 = 1_000_000_000;

impl Timestamp {
    pub const fn new(unix_secs: i64, subsec_nanos: u32) -> Self {
        Self {
            unix_secs,
            subsec_nanos,
        }
    }

    /// Whole seconds only.
    pub const fn from_unix_secs(unix_secs: i64) -> Self {
        Self::new(unix_secs, 0)
    }

    /// Total nanoseconds since the epoch. Never overflows.
    pub fn as_nanos(&self) -> i128 {
        self.unix_secs as i128 * NANOS_PER_SEC + self.subsec_nanos as i128
    }
}

/// Source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(feature = "std")]
impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Wall clock backed by [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => Timestamp::new(d.as_secs() as i64, d.subsec_nanos()),
            Err(e) => {
                // Clock set before 1970.
                let d = e.duration();
                let secs = -(d.as_secs() as i64);
                match d.subsec_nanos() {
                    0 => Timestamp::new(secs, 0),
                    n => Timestamp::new(secs - 1, 1_000_000_000 - n),
                }
            }
        }
    }
}
