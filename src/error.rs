//! Error types for clinicore.
//!
//! All errors are strongly typed using thiserror, so callers can pattern
//! match on the specific condition instead of parsing messages.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::storage::StoreError;

/// Validation errors raised by record builders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field '{field}' is missing")]
    MissingField {
        /// The builder field that was never provided.
        field: &'static str,
    },

    #[error("field '{field}' must not be blank")]
    BlankField {
        /// The builder field that was provided empty.
        field: &'static str,
    },
}

/// Scheduling errors raised by the appointment manager.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("appointment time {at} is not in the future")]
    TimeNotInFuture {
        /// The rejected appointment time.
        at: DateTime<Utc>,
    },

    #[error("appointment fee must be positive")]
    NonPositiveFee,

    #[error("physician {license} already has an appointment at {at}")]
    PhysicianUnavailable {
        /// License number of the double-booked physician.
        license: String,
        /// The contested time slot.
        at: DateTime<Utc>,
    },

    #[error("room {room} is already booked at {at}")]
    RoomUnavailable {
        /// Code of the double-booked room.
        room: String,
        /// The contested time slot.
        at: DateTime<Utc>,
    },
}

/// Top-level error type for clinicore.
///
/// Aggregates the per-layer errors so orchestration code and the demo can
/// use one `?`-friendly result type.
#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("scheduling error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ClinicError {
    /// Returns true if this is a builder validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a scheduling error.
    #[must_use]
    pub const fn is_schedule(&self) -> bool {
        matches!(self, Self::Schedule(_))
    }

    /// Returns true if this is a store error.
    #[must_use]
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

/// Result type alias for clinicore operations.
pub type ClinicResult<T> = Result<T, ClinicError>;
