//! Core data types for slotcheck.
//!
//! This module defines the primary types used throughout the library:
//! - [`Appointment`] - A persisted appointment as a UTC interval with identity
//! - [`Candidate`] - A proposed appointment in caller-local wall-clock time
//! - [`RejectReason`] - Why a candidate failed validation
//! - [`Verdict`] - The outcome of validating a candidate

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted appointment as seen by the validator.
///
/// Timestamps are absolute UTC instants; `end_utc > start_utc` holds for
/// every appointment that passed validation. The id exists so that an
/// appointment being edited can be excluded from its own overlap check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: i32,
    /// The user the appointment is assigned to.
    pub user_id: i32,
    /// The customer the appointment is booked for.
    pub customer_id: i32,
    /// Start instant, stored in UTC.
    pub start_utc: DateTime<Utc>,
    /// End instant, stored in UTC.
    pub end_utc: DateTime<Utc>,
}

/// A proposed appointment submitted for validation.
///
/// Start and end are kindless wall-clock values interpreted in the caller's
/// zone (the [`Validator`](crate::validate::Validator) holds which zone that
/// is). A candidate is built once per save attempt and discarded afterwards;
/// it never mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// The user the appointment would be assigned to.
    pub user_id: i32,
    /// The customer the appointment would be booked for.
    pub customer_id: i32,
    /// Proposed start, caller-local wall clock.
    pub start_local: NaiveDateTime,
    /// Proposed end, caller-local wall clock.
    pub end_local: NaiveDateTime,
    /// When re-validating an edit, the id of the appointment being edited,
    /// so it does not conflict with its own prior version.
    pub exclude_id: Option<i32>,
}

impl Candidate {
    /// Create a candidate for a new appointment.
    pub fn new(
        user_id: i32,
        customer_id: i32,
        start_local: NaiveDateTime,
        end_local: NaiveDateTime,
    ) -> Self {
        Self {
            user_id,
            customer_id,
            start_local,
            end_local,
            exclude_id: None,
        }
    }

    /// Mark this candidate as an edit of an existing appointment, which is
    /// then skipped during the overlap checks.
    pub fn excluding(mut self, appointment_id: i32) -> Self {
        self.exclude_id = Some(appointment_id);
        self
    }
}

/// Why a candidate was rejected.
///
/// The variants mirror the ordered checks the validator runs; the first
/// failing check determines the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// End is not strictly after start.
    InvalidOrdering,
    /// Start (as UTC) is before the current time.
    InPast,
    /// Start and end fall on different caller-local calendar days.
    CrossesDay,
    /// The interval leaves the business window in the reference zone,
    /// lands on a weekend there, or crosses reference-zone midnight.
    OutsideBusinessHours,
    /// Overlaps an existing appointment for the same user.
    UserConflict,
    /// Overlaps an existing appointment for the same customer.
    CustomerConflict,
}

impl RejectReason {
    /// User-facing explanation, suitable for showing next to a form.
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::InvalidOrdering => "appointment end time must be after start time",
            RejectReason::InPast => "appointments cannot be scheduled in the past",
            RejectReason::CrossesDay => "appointment must start and end on the same day",
            RejectReason::OutsideBusinessHours => {
                "appointment must fall within business hours on a weekday"
            }
            RejectReason::UserConflict => {
                "time slot conflicts with another appointment for this user"
            }
            RejectReason::CustomerConflict => {
                "time slot conflicts with another appointment for this customer"
            }
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::InvalidOrdering => write!(f, "invalid_ordering"),
            RejectReason::InPast => write!(f, "in_past"),
            RejectReason::CrossesDay => write!(f, "crosses_day"),
            RejectReason::OutsideBusinessHours => write!(f, "outside_business_hours"),
            RejectReason::UserConflict => write!(f, "user_conflict"),
            RejectReason::CustomerConflict => write!(f, "customer_conflict"),
        }
    }
}

/// Outcome of validating a candidate.
///
/// Rejections are ordinary values, never `Err`; only store failures and
/// contract violations escalate to [`ScheduleError`](crate::error::ScheduleError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// The candidate may be persisted.
    Accepted,
    /// The candidate violated a business rule.
    Rejected {
        /// The first check that failed.
        reason: RejectReason,
    },
}

impl Verdict {
    /// Build a rejection for the given reason.
    pub fn rejected(reason: RejectReason) -> Self {
        Verdict::Rejected { reason }
    }

    /// True when the candidate passed every check.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Verdict::Rejected { reason } => Some(*reason),
            Verdict::Accepted => None,
        }
    }
}
