//! Time-axis resolution: hour labels → 24-hour integers → current timeblock.
//!
//! Axis values need not be unique or sorted — a wrap-around axis like
//! `["10PM", "12AM", "2AM"]` is legal.  When duplicates exist, resolution
//! picks the first matching column (stable left-to-right scan).

use crate::{ScheduleError, ScheduleResult};

/// Convert an hour label like `"8AM"` or `"5PM"` to its 24-hour value.
///
/// Labels are case-sensitive: the suffix must be exactly `AM` or `PM`.
///
/// | Label   | Hour |
/// |---------|------|
/// | `12AM`  | 0    |
/// | `8AM`   | 8    |
/// | `12PM`  | 12   |
/// | `5PM`   | 17   |
/// | `11PM`  | 23   |
pub fn to_24hour(label: &str) -> ScheduleResult<u8> {
    let label = label.trim();
    let (digits, pm) = if let Some(d) = label.strip_suffix("AM") {
        (d, false)
    } else if let Some(d) = label.strip_suffix("PM") {
        (d, true)
    } else {
        return Err(ScheduleError::Parse(format!(
            "hour label {label:?} lacks an AM/PM suffix"
        )));
    };

    let hour: u8 = digits
        .parse()
        .map_err(|_| ScheduleError::Parse(format!("hour label {label:?} has a non-numeric hour")))?;
    if !(1..=12).contains(&hour) {
        return Err(ScheduleError::Parse(format!(
            "hour label {label:?} out of range (expected 1–12)"
        )));
    }

    Ok(match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    })
}

/// Parse a full time-axis row into 24-hour values, one per column.
pub fn parse_axis(labels: &[String]) -> ScheduleResult<Vec<u8>> {
    labels.iter().map(|l| to_24hour(l)).collect()
}

/// Index of the timeblock covering `hour`, scanning left to right.
///
/// A miss is a hard stop ([`ScheduleError::TimeblockNotFound`]), never a
/// default to column 0.
pub fn resolve_current_index(axis: &[u8], hour: u8) -> ScheduleResult<usize> {
    axis.iter()
        .position(|&h| h == hour)
        .ok_or(ScheduleError::TimeblockNotFound { hour })
}
