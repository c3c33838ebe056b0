//! Appointments between patients and physicians.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::hospital::Room;
use crate::domain::patient::Patient;
use crate::domain::physician::Physician;
use crate::ident::RecordId;
use crate::record::{AttributeDef, Record};
use crate::value::AttributeValue;

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked, not yet started.
    Scheduled,
    /// Patient is being seen.
    InProgress,
    /// Visit finished.
    Completed,
    /// Called off before it started.
    Cancelled,
}

impl AppointmentStatus {
    /// Lowercase label used in attribute lookups and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A booked appointment.
///
/// Produced only by the scheduling manager, which enforces the booking
/// rules; status transitions afterwards are caller-driven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    ident: Option<RecordId>,
    patient: Patient,
    physician: Physician,
    room: Room,
    scheduled_at: DateTime<Utc>,
    fee_cents: u64,
    status: AppointmentStatus,
    notes: Option<String>,
}

impl Appointment {
    pub(crate) fn new(
        patient: Patient,
        physician: Physician,
        room: Room,
        scheduled_at: DateTime<Utc>,
        fee_cents: u64,
    ) -> Self {
        Self {
            ident: None,
            patient,
            physician,
            room,
            scheduled_at,
            fee_cents,
            status: AppointmentStatus::Scheduled,
            notes: None,
        }
    }

    /// The patient being seen.
    #[must_use]
    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    /// The attending physician.
    #[must_use]
    pub fn physician(&self) -> &Physician {
        &self.physician
    }

    /// The booked room.
    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// When the appointment takes place.
    #[must_use]
    pub fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_at
    }

    /// Fee in smallest currency unit.
    #[must_use]
    pub fn fee_cents(&self) -> u64 {
        self.fee_cents
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    /// Sets the status. No transition rules are enforced.
    pub fn set_status(&mut self, status: AppointmentStatus) {
        self.status = status;
    }

    /// Free-form notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Replaces the notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = Some(notes.into());
    }
}

impl Record for Appointment {
    const KIND: &'static str = "Appointment";

    fn ident(&self) -> Option<RecordId> {
        self.ident
    }

    fn assign_ident(&mut self, id: RecordId) {
        self.ident = Some(id);
    }

    fn attributes() -> &'static [AttributeDef<Self>] {
        const ATTRS: &[AttributeDef<Appointment>] = &[
            AttributeDef {
                name: "status",
                get: |a| AttributeValue::from(a.status.label()),
            },
            AttributeDef {
                name: "patient_dni",
                get: |a| AttributeValue::from(a.patient.dni()),
            },
            AttributeDef {
                name: "physician_license",
                get: |a| AttributeValue::from(a.physician.license()),
            },
            AttributeDef {
                name: "room",
                get: |a| AttributeValue::from(a.room.code()),
            },
            AttributeDef {
                name: "scheduled_at",
                get: |a| AttributeValue::from(a.scheduled_at),
            },
        ];
        ATTRS
    }
}
