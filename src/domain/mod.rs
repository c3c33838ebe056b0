//! Domain records for the hospital simulation.
//!
//! Everything here is constructed outside the store (builders produce
//! records with the identity slot empty) and handed to the generic store
//! for persistence and lookup.

mod appointment;
mod hospital;
mod patient;
mod physician;
mod types;

pub use appointment::{Appointment, AppointmentStatus};
pub use hospital::{Department, DepartmentBuilder, Hospital, HospitalBuilder, Room};
pub use patient::{MedicalHistory, Patient, PatientBuilder};
pub use physician::{Physician, PhysicianBuilder};
pub use types::{BloodType, MedicalSpecialty};

use crate::error::ValidationError;

pub(crate) fn require_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField { field }),
        Some(text) if text.trim().is_empty() => Err(ValidationError::BlankField { field }),
        Some(text) => Ok(text),
    }
}
