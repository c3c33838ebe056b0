//! Appointment scheduling orchestration.
//!
//! The manager owns the booked appointments and enforces the booking
//! rules; persisting appointments in a store is the caller's business.

use chrono::{DateTime, Utc};

use crate::domain::{Appointment, Patient, Physician, Room};
use crate::error::ScheduleError;

/// Books appointments and answers per-patient / per-physician queries.
///
/// `schedule` returns a copy of the booked appointment; the manager's own
/// records stay the source of truth and are mutable through
/// [`AppointmentManager::appointments_mut`] for status transitions.
#[derive(Debug, Default)]
pub struct AppointmentManager {
    appointments: Vec<Appointment>,
}

impl AppointmentManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and books an appointment.
    ///
    /// # Errors
    /// - [`ScheduleError::TimeNotInFuture`] when `at` is not after now
    /// - [`ScheduleError::NonPositiveFee`] when the fee is zero
    /// - [`ScheduleError::PhysicianUnavailable`] /
    ///   [`ScheduleError::RoomUnavailable`] when the physician or room
    ///   already has a booking at exactly `at`
    pub fn schedule(
        &mut self,
        patient: Patient,
        physician: Physician,
        room: Room,
        at: DateTime<Utc>,
        fee_cents: u64,
    ) -> Result<Appointment, ScheduleError> {
        if at <= Utc::now() {
            return Err(ScheduleError::TimeNotInFuture { at });
        }
        if fee_cents == 0 {
            return Err(ScheduleError::NonPositiveFee);
        }
        if self
            .appointments
            .iter()
            .any(|a| a.physician().license() == physician.license() && a.scheduled_at() == at)
        {
            return Err(ScheduleError::PhysicianUnavailable {
                license: physician.license().to_string(),
                at,
            });
        }
        if self
            .appointments
            .iter()
            .any(|a| a.room().code() == room.code() && a.scheduled_at() == at)
        {
            return Err(ScheduleError::RoomUnavailable {
                room: room.code().to_string(),
                at,
            });
        }

        let appointment = Appointment::new(patient, physician, room, at, fee_cents);
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Every booked appointment, in booking order.
    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Mutable view of the booked appointments, for status transitions.
    pub fn appointments_mut(&mut self) -> &mut [Appointment] {
        &mut self.appointments
    }

    /// Appointments for the patient with the given DNI.
    #[must_use]
    pub fn appointments_for_patient(&self, dni: &str) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.patient().dni() == dni)
            .collect()
    }

    /// Appointments for the physician with the given license number.
    #[must_use]
    pub fn appointments_for_physician(&self, license: &str) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.physician().license() == license)
            .collect()
    }
}
