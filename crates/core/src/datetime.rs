//! Deadline parsing and timestamp formatting in the display timezone.
//!
//! Storage is always UTC. Responses format dates and datetimes in a fixed
//! display offset (default +09:00), and deadline input is interpreted as a
//! calendar date in that same offset before conversion to a UTC instant.

use chrono::{FixedOffset, NaiveDate, TimeZone};

use crate::types::Timestamp;

/// Default display offset in hours east of UTC (Asia/Tokyo).
pub const DEFAULT_DISPLAY_OFFSET_HOURS: i32 = 9;

/// Accepted wire format for deadline dates.
///
/// Earlier deployments accepted `YYYY-MM-DD`, later ones `YYYY/MM/DD`;
/// which one is live is a deployment choice, so it is configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY/MM/DD`
    SlashYmd,
    /// `YYYY-MM-DD`
    DashYmd,
}

impl DateFormat {
    /// chrono strftime pattern for this format.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::SlashYmd => "%Y/%m/%d",
            DateFormat::DashYmd => "%Y-%m-%d",
        }
    }
}

/// Build the display offset from a configured hour count.
///
/// # Panics
///
/// Panics on an out-of-range offset; configuration errors should fail at
/// startup, not at request time.
pub fn display_offset(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600)
        .unwrap_or_else(|| panic!("invalid display timezone offset: {hours}h"))
}

/// Parse a deadline string as a calendar date in the display timezone and
/// return the corresponding UTC instant (midnight local time).
pub fn parse_deadline(
    input: &str,
    format: DateFormat,
    offset: FixedOffset,
) -> Result<Timestamp, String> {
    let date = NaiveDate::parse_from_str(input, format.pattern())
        .map_err(|_| format!("The deadline_at does not match the format {}", format.pattern()))?;
    let local_midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| "The deadline_at is not a valid date".to_string())?;
    let local = offset
        .from_local_datetime(&local_midnight)
        .single()
        .ok_or_else(|| "The deadline_at is not a valid date".to_string())?;
    Ok(local.with_timezone(&chrono::Utc))
}

/// Format a stored UTC instant as a `YYYY/MM/DD` date in the display timezone.
pub fn format_date(ts: Timestamp, offset: FixedOffset) -> String {
    ts.with_timezone(&offset).format("%Y/%m/%d").to_string()
}

/// Format a stored UTC instant as `YYYY/MM/DD HH:MM:SS` in the display timezone.
pub fn format_datetime(ts: Timestamp, offset: FixedOffset) -> String {
    ts.with_timezone(&offset)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}
