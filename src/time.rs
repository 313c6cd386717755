//! Wall-clock access
//!
//! The time stamper samples the current time through the [`Clock`] trait so
//! tests can supply deterministic timestamps. A process-wide clock shared by
//! many devices only needs `&self` access.

/// Source of the current Unix-epoch time
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Clock backed by the operating system time
#[cfg(feature = "std")]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}
