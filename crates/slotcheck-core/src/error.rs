//! Error types for slotcheck-core.
//!
//! Business-rule rejections are NOT errors: the validator reports them as
//! [`Verdict::Rejected`](crate::models::Verdict) values. The types here cover
//! the two failure classes that do surface as `Err`: programming-contract
//! violations caught at the boundary, and infrastructure failures from the
//! appointment store, which pass through to the caller unmodified.

use thiserror::Error;

/// Infrastructure failure reported by an [`AppointmentStore`](crate::store::AppointmentStore).
///
/// Kept separate from [`ScheduleError`] so callers can always tell a broken
/// backend apart from a rejected candidate.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store connection failed: {0}")]
    Connection(String),

    /// The query ran but did not complete.
    #[error("store query failed: {0}")]
    Query(String),
}

/// The main error type for slotcheck operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Invalid IANA timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Malformed identifier passed to the validator (ids must be positive).
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// The appointment store failed; propagated without reinterpretation.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for slotcheck operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
