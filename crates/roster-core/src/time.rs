//! Reporting clock.
//!
//! The schedule sheet is written against one fixed timezone, so "what hour
//! is it" must come from a configured UTC offset — never from the host's
//! local timezone, which on a scheduler box is usually UTC and would shift
//! every timeblock lookup.

use chrono::{DateTime, FixedOffset, Timelike, Utc};

use crate::{CoreError, CoreResult};

/// Wall clock pinned to a fixed UTC offset.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug)]
pub struct ReportingClock {
    offset: FixedOffset,
}

impl ReportingClock {
    /// Create a clock at the given offset east of UTC, in minutes
    /// (e.g. `-300` for UTC-5).
    pub fn from_offset_minutes(minutes: i32) -> CoreResult<Self> {
        let offset = FixedOffset::east_opt(minutes * 60)
            .ok_or_else(|| CoreError::Config(format!("invalid UTC offset: {minutes} minutes")))?;
        Ok(Self { offset })
    }

    /// The current hour of day (0–23) in the configured timezone.
    pub fn current_hour(&self) -> u8 {
        self.hour_of(Utc::now())
    }

    /// Hour of day (0–23) of an arbitrary instant in the configured timezone.
    /// Exists so lookups are testable against a fixed instant.
    pub fn hour_of(&self, instant: DateTime<Utc>) -> u8 {
        instant.with_timezone(&self.offset).hour() as u8
    }
}
