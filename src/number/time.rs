//! Elapsed race time, decomposed into the fields the announcer speaks.
//!
//! This is always an elapsed quantity (a lap, a gap, a stint), never a
//! wall-clock time.

use std::time::Duration;

/// A non-negative elapsed time with minutes, seconds and milliseconds kept
/// within their spoken ranges (0-59, 0-59, 0-999).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceTime {
    hours: u32,
    minutes: u32,
    seconds: u32,
    millis: u32,
}

impl RaceTime {
    /// Build a time from components. Overflowing fields carry upward, so
    /// `RaceTime::new(0, 0, 61, 0)` is one minute one second.
    pub fn new(hours: u32, minutes: u32, seconds: u32, millis: u32) -> Self {
        let total = (hours as u64 * 3600 + minutes as u64 * 60 + seconds as u64) * 1000
            + millis as u64;
        Self::from_millis(total)
    }

    pub fn from_millis(total_millis: u64) -> Self {
        let millis = (total_millis % 1000) as u32;
        let total_seconds = total_millis / 1000;
        Self {
            hours: (total_seconds / 3600) as u32,
            minutes: ((total_seconds / 60) % 60) as u32,
            seconds: (total_seconds % 60) as u32,
            millis,
        }
    }

    pub fn from_duration(duration: Duration) -> Self {
        Self::from_millis(duration.as_millis() as u64)
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn millis(&self) -> u32 {
        self.millis
    }

    fn total_millis(&self) -> u64 {
        (self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64) * 1000
            + self.millis as u64
    }

    /// Milliseconds above 949 would round up to ten tenths, which no sound
    /// pack has a clip for. Advance to the next whole second instead so the
    /// carry lands in the seconds (and, at 59.95+, minutes/hours) fields.
    pub(crate) fn normalized_for_tenths(&self) -> Self {
        if self.millis > 949 {
            Self::from_millis(self.total_millis() + (1000 - self.millis) as u64)
        } else {
            *self
        }
    }

    /// Fractional second spoken as tenths, rounded half up. Only valid after
    /// [`normalized_for_tenths`](Self::normalized_for_tenths), which keeps
    /// the result in 0-9.
    pub(crate) fn tenths(&self) -> u32 {
        (self.millis + 50) / 100
    }
}
