//! Injectable time source for request signing.

use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the current Unix timestamp in seconds.
///
/// Marvel request hashes are time-dependent; abstracting the clock keeps
/// the signing function deterministic under test.
pub trait Clock: Send + Sync {
    fn unix_timestamp(&self) -> u64;
}

/// Wall-clock implementation used in production.
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// A clock pinned to a fixed timestamp, for tests.
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> u64 {
        self.0
    }
}
