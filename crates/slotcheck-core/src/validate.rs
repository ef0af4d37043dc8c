//! Appointment validation.
//!
//! [`Validator`] composes the conversion, business-hours, and overlap rules
//! into a single pass/fail decision over a [`Candidate`]. It is a pure
//! decision function over its inputs plus two store reads; it never writes.
//! Checks run in a fixed order, cheapest first, and stop at the first
//! failure, so a candidate that is both in the past and outside business
//! hours reports [`RejectReason::InPast`].

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};
use crate::hours::BusinessHours;
use crate::models::{Candidate, RejectReason, Verdict};
use crate::overlap::any_overlap;
use crate::store::AppointmentStore;
use crate::tz::local_to_utc;

/// Decides whether a candidate appointment may be booked.
///
/// Holds the caller's local zone (candidate wall clocks are interpreted in
/// it) and the business window. Acting identity travels on the candidate,
/// never in shared state.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    local_zone: Tz,
    hours: BusinessHours,
}

impl Validator {
    /// Validator for callers in `local_zone`, with the default business
    /// window (09:00-17:00 US Eastern).
    pub fn new(local_zone: Tz) -> Self {
        Self {
            local_zone,
            hours: BusinessHours::default(),
        }
    }

    /// Override the business window.
    pub fn with_hours(mut self, hours: BusinessHours) -> Self {
        self.hours = hours;
        self
    }

    /// The configured business window.
    pub fn hours(&self) -> BusinessHours {
        self.hours
    }

    /// The candidate's endpoints as the UTC instants the caller would
    /// persist after an accepted verdict.
    pub fn utc_bounds(&self, candidate: &Candidate) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            local_to_utc(candidate.start_local, self.local_zone),
            local_to_utc(candidate.end_local, self.local_zone),
        )
    }

    /// Validate against the current clock.
    pub fn validate<S: AppointmentStore>(
        &self,
        store: &S,
        candidate: &Candidate,
    ) -> Result<Verdict> {
        self.validate_at(store, candidate, Utc::now())
    }

    /// Validate with an injected clock.
    ///
    /// The checks, in order:
    /// 1. end after start (local wall clock)
    /// 2. start not before `now_utc`
    /// 3. start and end on the same local calendar day
    /// 4. inside the business window (reference zone)
    /// 5. no overlap with the user's appointments
    /// 6. no overlap with the customer's appointments
    ///
    /// Identifier validity is checked before anything else, and before any
    /// store access; a malformed id is an `Err`, not a rejection. Store
    /// failures propagate unmodified.
    pub fn validate_at<S: AppointmentStore>(
        &self,
        store: &S,
        candidate: &Candidate,
        now_utc: DateTime<Utc>,
    ) -> Result<Verdict> {
        check_ids(candidate)?;

        if candidate.end_local <= candidate.start_local {
            return Ok(Verdict::rejected(RejectReason::InvalidOrdering));
        }

        let (start_utc, end_utc) = self.utc_bounds(candidate);

        if start_utc < now_utc {
            return Ok(Verdict::rejected(RejectReason::InPast));
        }

        if candidate.start_local.date() != candidate.end_local.date() {
            return Ok(Verdict::rejected(RejectReason::CrossesDay));
        }

        if !self.hours.contains(start_utc, end_utc) {
            return Ok(Verdict::rejected(RejectReason::OutsideBusinessHours));
        }

        let user_appointments = store.appointments_for_user(candidate.user_id)?;
        if any_overlap(start_utc, end_utc, &user_appointments, candidate.exclude_id) {
            return Ok(Verdict::rejected(RejectReason::UserConflict));
        }

        let customer_appointments = store.appointments_for_customer(candidate.customer_id)?;
        if any_overlap(start_utc, end_utc, &customer_appointments, candidate.exclude_id) {
            return Ok(Verdict::rejected(RejectReason::CustomerConflict));
        }

        Ok(Verdict::Accepted)
    }

    /// Boolean convenience over [`validate_at`](Self::validate_at).
    pub fn is_valid_at<S: AppointmentStore>(
        &self,
        store: &S,
        candidate: &Candidate,
        now_utc: DateTime<Utc>,
    ) -> Result<bool> {
        Ok(self.validate_at(store, candidate, now_utc)?.is_accepted())
    }
}

fn check_ids(candidate: &Candidate) -> Result<()> {
    if candidate.user_id <= 0 {
        return Err(ScheduleError::InvalidId(format!(
            "user id must be positive, got {}",
            candidate.user_id
        )));
    }
    if candidate.customer_id <= 0 {
        return Err(ScheduleError::InvalidId(format!(
            "customer id must be positive, got {}",
            candidate.customer_id
        )));
    }
    if let Some(id) = candidate.exclude_id {
        if id <= 0 {
            return Err(ScheduleError::InvalidId(format!(
                "exclude id must be positive, got {id}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::Appointment;
    use crate::store::InMemoryStore;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone};

    /// Store whose queries always fail, for propagation tests.
    struct BrokenStore;

    impl AppointmentStore for BrokenStore {
        fn appointments_for_user(
            &self,
            _: i32,
        ) -> std::result::Result<Vec<Appointment>, StoreError> {
            Err(StoreError::Connection("connection refused".into()))
        }

        fn appointments_for_customer(
            &self,
            _: i32,
        ) -> std::result::Result<Vec<Appointment>, StoreError> {
            Err(StoreError::Connection("connection refused".into()))
        }
    }

    fn validator() -> Validator {
        Validator::new(chrono_tz::America::New_York)
    }

    // Monday 2030-06-03, Eastern wall clock.
    fn wall(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn utc(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, d, h, m, 0).single().unwrap()
    }

    fn early_clock() -> DateTime<Utc> {
        utc(1, 0, 0)
    }

    fn existing(id: i32, user_id: i32, customer_id: i32) -> Appointment {
        // 10:00-11:00 EDT on Monday 2030-06-03.
        Appointment {
            id,
            user_id,
            customer_id,
            start_utc: utc(3, 14, 0),
            end_utc: utc(3, 15, 0),
        }
    }

    fn reason_of(verdict: Verdict) -> RejectReason {
        verdict.reason().expect("expected a rejection")
    }

    #[test]
    fn acceptable_candidate_passes() {
        let store = InMemoryStore::default();
        let candidate = Candidate::new(1, 10, wall(3, 9, 0), wall(3, 10, 0));
        let verdict = validator()
            .validate_at(&store, &candidate, early_clock())
            .unwrap();
        assert!(verdict.is_accepted());
    }

    #[test]
    fn end_not_after_start_is_invalid_ordering() {
        let store = InMemoryStore::default();
        let equal = Candidate::new(1, 10, wall(3, 9, 0), wall(3, 9, 0));
        let backwards = Candidate::new(1, 10, wall(3, 10, 0), wall(3, 9, 0));

        for candidate in [equal, backwards] {
            let verdict = validator()
                .validate_at(&store, &candidate, early_clock())
                .unwrap();
            assert_eq!(reason_of(verdict), RejectReason::InvalidOrdering);
        }
    }

    #[test]
    fn past_start_is_rejected() {
        let store = InMemoryStore::default();
        let candidate = Candidate::new(1, 10, wall(3, 9, 0), wall(3, 10, 0));
        // Clock one minute after the candidate's 13:00 UTC start.
        let verdict = validator()
            .validate_at(&store, &candidate, utc(3, 13, 1))
            .unwrap();
        assert_eq!(reason_of(verdict), RejectReason::InPast);
    }

    #[test]
    fn start_exactly_now_is_not_past() {
        let store = InMemoryStore::default();
        let candidate = Candidate::new(1, 10, wall(3, 9, 0), wall(3, 10, 0));
        let verdict = validator()
            .validate_at(&store, &candidate, utc(3, 13, 0))
            .unwrap();
        assert!(verdict.is_accepted());
    }

    #[test]
    fn crossing_local_midnight_is_rejected() {
        let store = InMemoryStore::default();
        let candidate = Candidate::new(1, 10, wall(3, 23, 0), wall(4, 0, 30));
        let verdict = validator()
            .validate_at(&store, &candidate, early_clock())
            .unwrap();
        assert_eq!(reason_of(verdict), RejectReason::CrossesDay);
    }

    #[test]
    fn in_past_wins_over_later_checks() {
        // Both in the past and crossing a day; the cheaper check reports.
        let store = InMemoryStore::default();
        let candidate = Candidate::new(1, 10, wall(3, 23, 0), wall(4, 0, 30));
        let verdict = validator()
            .validate_at(&store, &candidate, utc(10, 0, 0))
            .unwrap();
        assert_eq!(reason_of(verdict), RejectReason::InPast);
    }

    #[test]
    fn evening_slot_is_outside_business_hours() {
        let store = InMemoryStore::default();
        let candidate = Candidate::new(1, 10, wall(3, 18, 0), wall(3, 19, 0));
        let verdict = validator()
            .validate_at(&store, &candidate, early_clock())
            .unwrap();
        assert_eq!(reason_of(verdict), RejectReason::OutsideBusinessHours);
    }

    #[test]
    fn saturday_slot_is_outside_business_hours() {
        let store = InMemoryStore::default();
        // 2030-06-08 is a Saturday.
        let candidate = Candidate::new(1, 10, wall(8, 10, 0), wall(8, 11, 0));
        let verdict = validator()
            .validate_at(&store, &candidate, early_clock())
            .unwrap();
        assert_eq!(reason_of(verdict), RejectReason::OutsideBusinessHours);
    }

    #[test]
    fn user_overlap_is_detected_across_customers() {
        let store = InMemoryStore::default().with_appointment(existing(7, 1, 10));
        // Same user, different customer, overlapping slot.
        let candidate = Candidate::new(1, 99, wall(3, 10, 30), wall(3, 11, 30));
        let verdict = validator()
            .validate_at(&store, &candidate, early_clock())
            .unwrap();
        assert_eq!(reason_of(verdict), RejectReason::UserConflict);
    }

    #[test]
    fn customer_overlap_is_detected_across_users() {
        let store = InMemoryStore::default().with_appointment(existing(7, 1, 10));
        // Different user, same customer.
        let candidate = Candidate::new(2, 10, wall(3, 10, 30), wall(3, 11, 30));
        let verdict = validator()
            .validate_at(&store, &candidate, early_clock())
            .unwrap();
        assert_eq!(reason_of(verdict), RejectReason::CustomerConflict);
    }

    #[test]
    fn touching_slot_is_accepted() {
        let store = InMemoryStore::default().with_appointment(existing(7, 1, 10));
        // Starts exactly when the existing appointment ends.
        let candidate = Candidate::new(1, 10, wall(3, 11, 0), wall(3, 12, 0));
        let verdict = validator()
            .validate_at(&store, &candidate, early_clock())
            .unwrap();
        assert!(verdict.is_accepted());
    }

    #[test]
    fn editing_an_appointment_does_not_conflict_with_itself() {
        let store = InMemoryStore::default().with_appointment(existing(7, 1, 10));
        let same_slot = Candidate::new(1, 10, wall(3, 10, 0), wall(3, 11, 0));

        // Without the exclusion the prior version blocks the edit.
        let verdict = validator()
            .validate_at(&store, &same_slot, early_clock())
            .unwrap();
        assert_eq!(reason_of(verdict), RejectReason::UserConflict);

        let verdict = validator()
            .validate_at(&store, &same_slot.excluding(7), early_clock())
            .unwrap();
        assert!(verdict.is_accepted());
    }

    #[test]
    fn malformed_ids_fail_before_store_access() {
        // BrokenStore would error on any query; an InvalidId proves the
        // contract check ran first.
        let candidate = Candidate::new(0, 10, wall(3, 9, 0), wall(3, 10, 0));
        let err = validator()
            .validate_at(&BrokenStore, &candidate, early_clock())
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidId(_)));

        let candidate = Candidate::new(1, -3, wall(3, 9, 0), wall(3, 10, 0));
        let err = validator()
            .validate_at(&BrokenStore, &candidate, early_clock())
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidId(_)));
    }

    #[test]
    fn store_failure_propagates_unmodified() {
        let candidate = Candidate::new(1, 10, wall(3, 9, 0), wall(3, 10, 0));
        let err = validator()
            .validate_at(&BrokenStore, &candidate, early_clock())
            .unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Store(StoreError::Connection(_))
        ));
    }

    #[test]
    fn utc_bounds_match_persisted_form() {
        let candidate = Candidate::new(1, 10, wall(3, 9, 0), wall(3, 10, 0));
        let (start_utc, end_utc) = validator().utc_bounds(&candidate);
        assert_eq!(start_utc, utc(3, 13, 0));
        assert_eq!(end_utc, utc(3, 14, 0));
    }

    #[test]
    fn local_zone_changes_the_utc_interval() {
        // 08:00-16:00 Chicago wall clock is exactly the Eastern window;
        // 09:00-17:00 Chicago runs an hour past close.
        let store = InMemoryStore::default();
        let chicago = Validator::new(chrono_tz::America::Chicago);

        let aligned = Candidate::new(1, 10, wall(3, 8, 0), wall(3, 16, 0));
        assert!(chicago
            .validate_at(&store, &aligned, early_clock())
            .unwrap()
            .is_accepted());

        let late = Candidate::new(1, 10, wall(3, 9, 0), wall(3, 17, 0));
        assert_eq!(
            reason_of(chicago.validate_at(&store, &late, early_clock()).unwrap()),
            RejectReason::OutsideBusinessHours
        );
    }

    #[test]
    fn is_valid_at_mirrors_the_verdict() {
        let store = InMemoryStore::default();
        let good = Candidate::new(1, 10, wall(3, 9, 0), wall(3, 10, 0));
        let bad = Candidate::new(1, 10, wall(3, 10, 0), wall(3, 9, 0));

        assert!(validator().is_valid_at(&store, &good, early_clock()).unwrap());
        assert!(!validator().is_valid_at(&store, &bad, early_clock()).unwrap());
    }
}
