//! Appointment store access.
//!
//! The validator only ever reads: it needs the existing appointments for a
//! user and for a customer, as point-in-time snapshots. Persistence lives
//! behind [`AppointmentStore`] so a database-backed implementation and the
//! in-memory one used by tests and the CLI are interchangeable. Absence is
//! an empty `Vec`, never an error; `Err` is reserved for infrastructure
//! failures, which callers must see unmodified.

use crate::error::StoreError;
use crate::models::Appointment;

/// Read-only query surface over persisted appointments.
///
/// Both queries return snapshots across all counterparties: a user's
/// appointments span every customer and vice versa. Nothing here is
/// transactional; a concurrent writer may commit between a read and a
/// subsequent write, which the validator accepts as a best-effort check.
pub trait AppointmentStore {
    /// All appointments assigned to the user, any customer.
    fn appointments_for_user(&self, user_id: i32) -> Result<Vec<Appointment>, StoreError>;

    /// All appointments booked for the customer, any user.
    fn appointments_for_customer(&self, customer_id: i32) -> Result<Vec<Appointment>, StoreError>;
}

/// Vec-backed store for tests, examples, and the CLI snapshot file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    appointments: Vec<Appointment>,
}

impl InMemoryStore {
    /// Create a store seeded with the provided appointments.
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    /// Convenience helper for seeding a single appointment.
    pub fn with_appointment(mut self, appointment: Appointment) -> Self {
        self.appointments.push(appointment);
        self
    }

    /// Insert or replace by id. This is the commit step of the save
    /// workflow: validate first, then insert the UTC-converted candidate.
    pub fn insert(&mut self, appointment: Appointment) {
        match self
            .appointments
            .iter()
            .position(|a| a.id == appointment.id)
        {
            Some(index) => self.appointments[index] = appointment,
            None => self.appointments.push(appointment),
        }
    }

    /// Number of stored appointments.
    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    /// True when the store holds no appointments.
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

impl AppointmentStore for InMemoryStore {
    fn appointments_for_user(&self, user_id: i32) -> Result<Vec<Appointment>, StoreError> {
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    fn appointments_for_customer(&self, customer_id: i32) -> Result<Vec<Appointment>, StoreError> {
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect())
    }
}
