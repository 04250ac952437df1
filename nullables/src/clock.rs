//! Nullable clock — deterministic time for testing.

use std::cell::Cell;
use waypoint_types::{time::NANOS_PER_SEC, Timestamp};

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_nanos: u64) -> Self {
        Self {
            current: Cell::new(initial_nanos),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::from_nanos(self.current.get())
    }

    /// Advance time by a number of nanoseconds.
    pub fn advance(&self, nanos: u64) {
        self.current.set(self.current.get() + nanos);
    }

    /// Advance time by a number of whole seconds.
    pub fn advance_secs(&self, secs: u64) {
        self.advance(secs * NANOS_PER_SEC);
    }

    /// Set the time to a specific value.
    pub fn set(&self, nanos: u64) {
        self.current.set(nanos);
    }
}
