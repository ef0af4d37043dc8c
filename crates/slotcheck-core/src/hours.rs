//! Business-hours policy.
//!
//! Business hours are defined in a fixed reference zone, independent of the
//! caller's local zone. An interval is acceptable only if, re-expressed in
//! the reference zone, it lies on a single weekday between the open and
//! close times. Both endpoints convert independently, so the rule stays
//! correct across DST transitions in either zone.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;

use crate::tz::{local_to_utc, utc_to_local};

/// The business window: reference zone plus daily open and close times.
///
/// Boundaries are inclusive on both ends; an appointment running exactly
/// from open to close is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    /// The reference zone the window is defined in.
    pub zone: Tz,
    /// Daily opening time, reference-zone wall clock.
    pub open: NaiveTime,
    /// Daily closing time, reference-zone wall clock.
    pub close: NaiveTime,
}

impl Default for BusinessHours {
    /// 09:00-17:00 US Eastern.
    fn default() -> Self {
        Self {
            zone: chrono_tz::America::New_York,
            open: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }
}

impl BusinessHours {
    /// Build a window with explicit zone and boundaries.
    pub fn new(zone: Tz, open: NaiveTime, close: NaiveTime) -> Self {
        Self { zone, open, close }
    }

    /// Whether a UTC interval falls entirely inside the business window.
    ///
    /// Both endpoints are normalized to the reference zone first. The
    /// interval is rejected when either endpoint lands on a Saturday or
    /// Sunday there, when the endpoints fall on different reference-zone
    /// dates (the appointment crosses reference-zone midnight, even if it
    /// does not cross midnight in the caller's zone), or when it starts
    /// before open or ends after close.
    pub fn contains(&self, start_utc: DateTime<Utc>, end_utc: DateTime<Utc>) -> bool {
        let start = utc_to_local(start_utc, self.zone);
        let end = utc_to_local(end_utc, self.zone);

        if is_weekend(start.weekday()) || is_weekend(end.weekday()) {
            return false;
        }
        if start.date_naive() != end.date_naive() {
            return false;
        }

        start.time() >= self.open && end.time() <= self.close
    }

    /// The local wall-clock window corresponding to this business window on
    /// the given local date.
    ///
    /// Anchors the local date at noon to find the matching reference-zone
    /// date, places open and close on that date, and converts each boundary
    /// independently back to the caller's zone. Useful for showing a user
    /// which local times are bookable.
    pub fn local_window_for_date(
        &self,
        date: NaiveDate,
        local_zone: Tz,
    ) -> (NaiveDateTime, NaiveDateTime) {
        let noon = date.and_hms_opt(12, 0, 0).unwrap();
        let reference_date = utc_to_local(local_to_utc(noon, local_zone), self.zone).date_naive();

        let open_utc = local_to_utc(reference_date.and_time(self.open), self.zone);
        let close_utc = local_to_utc(reference_date.and_time(self.close), self.zone);

        (
            utc_to_local(open_utc, local_zone).naive_local(),
            utc_to_local(close_utc, local_zone).naive_local(),
        )
    }
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap()
    }

    fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap()
    }

    #[test]
    fn full_window_on_a_weekday_is_accepted() {
        let hours = BusinessHours::default();
        // Tuesday 2030-06-04, 09:00-17:00 EDT = 13:00-21:00 UTC.
        assert!(hours.contains(utc(2030, 6, 4, 13, 0), utc(2030, 6, 4, 21, 0)));
    }

    #[test]
    fn one_minute_before_open_is_rejected() {
        let hours = BusinessHours::default();
        // 08:59 EDT start.
        assert!(!hours.contains(utc(2030, 6, 4, 12, 59), utc(2030, 6, 4, 21, 0)));
    }

    #[test]
    fn one_minute_after_close_is_rejected() {
        let hours = BusinessHours::default();
        // 17:01 EDT end.
        assert!(!hours.contains(utc(2030, 6, 4, 13, 0), utc(2030, 6, 4, 21, 1)));
    }

    #[test]
    fn weekend_is_rejected_regardless_of_time() {
        let hours = BusinessHours::default();
        // Saturday 2030-06-08, 10:00-11:00 EDT.
        assert!(!hours.contains(utc(2030, 6, 8, 14, 0), utc(2030, 6, 8, 15, 0)));
    }

    #[test]
    fn crossing_reference_midnight_is_rejected() {
        let hours = BusinessHours::default();
        // 23:30 Jun 3 - 00:30 Jun 4 EDT; a Honolulu caller would see
        // 17:30-18:30 on a single local day.
        assert!(!hours.contains(utc(2030, 6, 4, 3, 30), utc(2030, 6, 4, 4, 30)));
    }

    #[test]
    fn window_respects_reference_zone_dst() {
        let hours = BusinessHours::default();
        // 10:00-11:00 Eastern wall clock year-round, but different UTC
        // instants in January (EST) and June (EDT). Both Mondays.
        assert!(hours.contains(utc(2026, 1, 5, 15, 0), utc(2026, 1, 5, 16, 0)));
        assert!(hours.contains(utc(2026, 6, 1, 14, 0), utc(2026, 6, 1, 15, 0)));
        // 15:00 UTC in June is 11:00 EDT; the same interval shifted to end
        // at 21:30 UTC (17:30 EDT) falls outside.
        assert!(!hours.contains(utc(2026, 6, 1, 20, 30), utc(2026, 6, 1, 21, 30)));
    }

    #[test]
    fn custom_window_and_zone() {
        let hours = BusinessHours::new(
            chrono_tz::Europe::Berlin,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        );
        // Monday 2030-06-03, 08:00-16:00 CEST = 06:00-14:00 UTC.
        assert!(hours.contains(utc(2030, 6, 3, 6, 0), utc(2030, 6, 3, 14, 0)));
        assert!(!hours.contains(utc(2030, 6, 3, 5, 59), utc(2030, 6, 3, 14, 0)));
    }

    #[test]
    fn local_window_tracks_reference_dst() {
        let hours = BusinessHours::default();
        let phoenix = chrono_tz::America::Phoenix;

        // Phoenix does not observe DST; the Eastern window slides under it.
        // Winter: ET = UTC-5, Phoenix = UTC-7 -> 07:00-15:00 local.
        let (open, close) = hours.local_window_for_date(date(2026, 1, 5), phoenix);
        assert_eq!(open, date(2026, 1, 5).and_hms_opt(7, 0, 0).unwrap());
        assert_eq!(close, date(2026, 1, 5).and_hms_opt(15, 0, 0).unwrap());

        // Summer: ET = UTC-4 -> 06:00-14:00 local.
        let (open, close) = hours.local_window_for_date(date(2026, 6, 1), phoenix);
        assert_eq!(open, date(2026, 6, 1).and_hms_opt(6, 0, 0).unwrap());
        assert_eq!(close, date(2026, 6, 1).and_hms_opt(14, 0, 0).unwrap());
    }

    #[test]
    fn local_window_in_the_reference_zone_itself() {
        let hours = BusinessHours::default();
        let (open, close) =
            hours.local_window_for_date(date(2030, 6, 3), chrono_tz::America::New_York);
        assert_eq!(open, date(2030, 6, 3).and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(close, date(2030, 6, 3).and_hms_opt(17, 0, 0).unwrap());
    }
}
