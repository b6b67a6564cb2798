//! Wall-clock time for accrual computation
//!
//! Engines never read a system clock: `now` arrives as an explicit
//! `Timestamp` argument so elapsed-time math is reproducible in tests.
//! Only the facade layer consults a real clock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds in one hour
pub const SECS_PER_HOUR: i64 = 3600;

/// A point in time, unix seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Create a timestamp from unix seconds
    pub fn from_unix(secs: i64) -> Self {
        Self(secs)
    }

    /// Get the raw unix seconds
    pub fn unix(&self) -> i64 {
        self.0
    }

    /// Signed seconds elapsed since an earlier timestamp
    ///
    /// Negative when `earlier` is actually in the future (clock skew);
    /// callers treat negative elapsed time as "nothing elapsed".
    pub fn seconds_since(&self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }

    /// Fractional hours elapsed since an earlier timestamp
    pub fn hours_since(&self, earlier: Timestamp) -> f64 {
        self.seconds_since(earlier) as f64 / SECS_PER_HOUR as f64
    }

    /// This timestamp shifted forward by whole seconds
    pub fn add_secs(&self, secs: i64) -> Self {
        Self(self.0 + secs)
    }

    /// This timestamp shifted forward by whole hours
    pub fn add_hours(&self, hours: i64) -> Self {
        Self(self.0 + hours * SECS_PER_HOUR)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
