//! Timezone conversion utilities.
//!
//! The validator works with three representations of the same instant: UTC
//! (storage), the caller's local zone (form input), and the fixed business
//! reference zone (rule evaluation). Both directions go through the two
//! functions here with the zone as an explicit argument, so [`utc_to_local`]
//! with the reference zone is "to reference time" and [`local_to_utc`] with
//! the reference zone is the reverse. All conversions are zone-aware; a
//! fixed offset would drift across DST transitions.

use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use slotcheck_core::tz::parse_tz;
///
/// let tz = parse_tz("America/New_York").unwrap();
/// assert_eq!(tz.to_string(), "America/New_York");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| ScheduleError::InvalidTimezone(name.to_string()))
}

/// Convert a UTC instant to wall-clock time in the given zone.
pub fn utc_to_local(utc: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    utc.with_timezone(&tz)
}

/// Interpret a kindless wall-clock value in the given zone and convert it
/// to UTC.
///
/// Wall clocks without a zone tag are always treated as belonging to `tz`;
/// there is no "unspecified" escape hatch. Around DST transitions the value
/// may not map to exactly one instant:
///
/// - Ambiguous times (fall back, the hour occurs twice) resolve to the
///   first occurrence.
/// - Nonexistent times (spring forward, the hour is skipped) shift forward
///   by the length of the gap, so 02:30 inside a 02:00-03:00 gap resolves
///   the same instant as 03:30.
pub fn local_to_utc(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(first, _second) => first.with_timezone(&Utc),
        LocalResult::None => shift_past_gap(local, tz)
            // Unreachable for IANA zones; read the wall clock as UTC rather
            // than panic.
            .unwrap_or_else(|| Utc.from_utc_datetime(&local)),
    }
}

/// Resolve a wall clock that falls inside a DST gap by shifting it forward
/// by the gap length.
///
/// The scan bound of two days covers every transition in the IANA database.
/// Candidate wall clocks are minute-granular, so a minute step is exact.
fn shift_past_gap(local: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    let max_minutes: i64 = 2 * 24 * 60;

    let next = (1..=max_minutes)
        .map(|m| local + Duration::minutes(m))
        .find_map(|wall| tz.from_local_datetime(&wall).earliest())?;
    let previous = (1..=max_minutes)
        .map(|m| local - Duration::minutes(m))
        .find_map(|wall| tz.from_local_datetime(&wall).latest())?;

    let gap = next.naive_local() - previous.naive_local() - Duration::minutes(1);
    let shifted = local + gap;

    tz.from_local_datetime(&shifted)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .or(Some(next.with_timezone(&Utc)))
}

/// Format a datetime as RFC3339 with its timezone offset.
pub fn format_rfc3339<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Format a UTC datetime as RFC3339 with Z suffix.
pub fn format_rfc3339_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
