//! # Temporal Types — UTC-Only Timestamps
//!
//! `Timestamp` records when an entry file last changed. Revision history
//! reports commit times with the committer's local offset; every value is
//! converted to UTC and truncated to whole seconds at construction so that
//! two builds of the same history render the same date.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A UTC timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse an RFC 3339 / strict ISO 8601 string with any offset.
    ///
    /// The result is converted to UTC. This is the format produced by
    /// `git log --format=%cI`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Timestamp`] if the string is not valid RFC 3339.
    pub fn parse_rfc3339(s: &str) -> Result<Self, CoreError> {
        let dt = DateTime::parse_from_rfc3339(s.trim())
            .map_err(|e| CoreError::Timestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}")))?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// Render the UTC calendar date in long US form (e.g., `January 5, 2026`).
    pub fn to_long_date(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let dt_with_nanos = dt.with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_utc(dt_with_nanos);
        assert_eq!(ts.as_datetime().nanosecond(), 0);
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:30:45Z");
    }

    #[test]
    fn test_parse_z_suffix() {
        let ts = Timestamp::parse_rfc3339("2026-01-15T12:00:00Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_converts_offset_to_utc() {
        let ts = Timestamp::parse_rfc3339("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_trims_trailing_newline() {
        let ts = Timestamp::parse_rfc3339("2026-01-15T12:00:00-04:00\n").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-01-15T16:00:00Z");
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(Timestamp::parse_rfc3339("not-a-date").is_err());
        assert!(Timestamp::parse_rfc3339("2026-01-15").is_err());
        assert!(Timestamp::parse_rfc3339("").is_err());
    }

    #[test]
    fn test_long_date_uses_utc_day() {
        // 23:30 at -05:00 is already the next day in UTC.
        let ts = Timestamp::parse_rfc3339("2025-12-31T23:30:00-05:00").unwrap();
        assert_eq!(ts.to_long_date(), "January 1, 2026");
    }

    #[test]
    fn test_long_date_no_zero_padding() {
        let ts = Timestamp::parse_rfc3339("2026-03-05T08:00:00Z").unwrap();
        assert_eq!(ts.to_long_date(), "March 5, 2026");
    }

    #[test]
    fn test_display_matches_iso8601() {
        let dt = Utc.with_ymd_and_hms(2026, 6, 30, 23, 59, 59).unwrap();
        let ts = Timestamp::from_utc(dt);
        assert_eq!(format!("{ts}"), ts.to_iso8601());
    }
}
