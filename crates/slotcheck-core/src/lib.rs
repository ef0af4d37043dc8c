//! # slotcheck-core
//!
//! A DST-safe appointment scheduling validation library for Rust.
//!
//! This library decides whether a proposed appointment (a wall-clock
//! interval assigned to one user and one customer) may be booked, given
//! business-hours rules defined in a fixed reference zone and the existing
//! appointments read from a store.
//!
//! ## Features
//!
//! - **DST Safety**: candidate wall clocks and the business window are
//!   converted zone-aware, so rules hold across spring-forward and
//!   fall-back transitions in both the caller's zone and the reference
//!   zone.
//! - **Ordered Checks**: chronological sanity, not-in-the-past, same local
//!   day, business hours, then per-user and per-customer overlap, stopping
//!   at the first failure with a structured reason.
//! - **Half-Open Overlap**: an appointment ending exactly when another
//!   starts does not conflict.
//! - **Edit Support**: an appointment being edited is excluded from its own
//!   overlap check by id.
//! - **Pluggable Store**: existing appointments come from an
//!   [`AppointmentStore`] implementation; infrastructure failures propagate
//!   untouched instead of masquerading as rejections.
//!
//! ## Example
//!
//! ```rust
//! use slotcheck_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let store = InMemoryStore::default();
//! let validator = Validator::new(parse_tz("America/New_York").unwrap());
//!
//! // Monday morning, inside the default 09:00-17:00 Eastern window.
//! let day = NaiveDate::from_ymd_opt(2030, 6, 3).unwrap();
//! let candidate = Candidate::new(
//!     1,
//!     10,
//!     day.and_hms_opt(9, 0, 0).unwrap(),
//!     day.and_hms_opt(10, 0, 0).unwrap(),
//! );
//!
//! let verdict = validator.validate(&store, &candidate).unwrap();
//! assert!(verdict.is_accepted());
//! ```

pub mod error;
pub mod hours;
pub mod models;
pub mod overlap;
pub mod store;
pub mod tz;
pub mod validate;

// Re-export commonly used types at the crate root
pub use error::{Result, ScheduleError, StoreError};
pub use hours::BusinessHours;
pub use models::{Appointment, Candidate, RejectReason, Verdict};
pub use overlap::{any_overlap, overlaps};
pub use store::{AppointmentStore, InMemoryStore};
pub use validate::Validator;

/// Prelude module for convenient imports.
///
/// ```
/// use slotcheck_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, ScheduleError, StoreError};
    pub use crate::hours::BusinessHours;
    pub use crate::models::*;
    pub use crate::overlap::{any_overlap, overlaps};
    pub use crate::store::{AppointmentStore, InMemoryStore};
    pub use crate::tz::{local_to_utc, parse_tz, utc_to_local};
    pub use crate::validate::Validator;
}
