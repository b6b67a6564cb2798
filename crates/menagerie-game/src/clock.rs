//! Time sources for the facade.
//!
//! The engines never read the clock themselves; the facade samples one
//! of these and hands the timestamp down, so the same operations can
//! run against wall time or a scripted time line.

use menagerie_core::Timestamp;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_unix(chrono::Utc::now().timestamp())
    }
}

/// Adjustable time for tests and replays.
#[derive(Debug)]
pub struct ManualClock {
    unix: AtomicI64,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            unix: AtomicI64::new(start.unix()),
        }
    }

    /// Move the clock forward.
    pub fn advance_secs(&self, secs: i64) {
        self.unix.fetch_add(secs, Ordering::Relaxed);
    }

    /// Move the clock forward by whole hours.
    pub fn advance_hours(&self, hours: i64) {
        self.advance_secs(hours * menagerie_core::SECS_PER_HOUR);
    }

    /// Jump to an absolute time. Going backwards is allowed; the
    /// engines treat negative elapsed time as nothing elapsed.
    pub fn set(&self, t: Timestamp) {
        self.unix.store(t.unix(), Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_unix(self.unix.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(Timestamp::from_unix(1_000));
        assert_eq!(clock.now().unix(), 1_000);
        clock.advance_hours(2);
        assert_eq!(clock.now().unix(), 1_000 + 7_200);
        clock.set(Timestamp::from_unix(500));
        assert_eq!(clock.now().unix(), 500);
    }
}
