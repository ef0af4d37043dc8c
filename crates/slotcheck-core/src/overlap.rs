//! Interval overlap detection.
//!
//! Appointments conflict under the half-open rule: two intervals overlap
//! only when they share at least one instant strictly inside both. An
//! appointment ending exactly when another starts does not conflict.

use chrono::{DateTime, Utc};

use crate::models::Appointment;

/// True when `[a_start, a_end)` and `[b_start, b_end)` share an instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use slotcheck_core::overlap::overlaps;
///
/// let at = |h| Utc.with_ymd_and_hms(2030, 6, 3, h, 0, 0).single().unwrap();
///
/// // Touching boundaries do not conflict.
/// assert!(!overlaps(at(10), at(11), at(11), at(12)));
/// assert!(overlaps(at(10), at(11), at(10), at(11)));
/// ```
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// True when the candidate interval overlaps any appointment in `existing`
/// other than the excluded one.
///
/// Linear scan; the result is independent of the order and size of the
/// slice.
pub fn any_overlap(
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
    existing: &[Appointment],
    exclude_id: Option<i32>,
) -> bool {
    existing
        .iter()
        .filter(|appointment| exclude_id != Some(appointment.id))
        .any(|appointment| {
            overlaps(
                candidate_start,
                candidate_end,
                appointment.start_utc,
                appointment.end_utc,
            )
        })
}
