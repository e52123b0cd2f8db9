//! Wall-clock abstraction and `HH:MM` formatting.
//!
//! The current-customer check compares rendered time labels against the
//! clock, so the time source is injected rather than read ambiently. Use
//! [`WallClock`] in the binary and [`FixedClock`] in tests or embeddings
//! that need deterministic time.

use std::fmt::Debug;

use chrono::{Local, NaiveTime, Timelike};

/// A source of the current wall-clock time.
pub trait Clock: Send + Debug {
    /// Returns the current local time of day.
    fn now(&self) -> NaiveTime;
}

/// The real system clock (local timezone).
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock frozen at a fixed time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    /// Create a clock that always reports `time`.
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Format a time of day as `HH:MM` - 24-hour, zero-padded, no seconds.
///
/// Queue entry labels are rendered by the server in this exact format, and
/// matching is plain string equality, so this function is the only place
/// the comparison string may be produced.
pub fn format_hhmm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
