//! # clinicore - in-process data layer for a hospital simulation
//!
//! clinicore holds collections of domain records (patients, physicians,
//! appointments) behind one generic, identity-managed in-memory store.
//! The store assigns sequential identities, deletes by identity, and
//! resolves ad-hoc attribute lookups without a dedicated query method per
//! record type.
//!
//! ## Core Concepts
//!
//! - **Record**: the capability contract a storable type implements - an
//!   identity slot plus a static table of named attributes
//! - **`RecordId`**: the store-assigned sequential identity, never reused
//! - **`InMemoryStore`**: the only backend - a single-process object
//!   cache, not a database engine
//! - **`AppointmentManager`**: scheduling orchestration over the domain
//!   records
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clinicore::{AttributeValue, InMemoryStore, Patient, RecordStore};
//!
//! let store: InMemoryStore<Patient> = InMemoryStore::new();
//! let maria = store.save(maria)?;           // identity assigned here
//! let hits = store.find_by_attribute("dni", &AttributeValue::from("11111111"))?;
//! let gone = store.delete(maria.ident().expect("saved"))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;
pub mod error;
pub mod ident;
pub mod record;
pub mod schedule;
pub mod storage;
pub mod value;

// Re-export primary types at crate root for convenience
pub use domain::{
    Appointment, AppointmentStatus, BloodType, Department, DepartmentBuilder, Hospital,
    HospitalBuilder, MedicalHistory, MedicalSpecialty, Patient, PatientBuilder, Physician,
    PhysicianBuilder, Room,
};
pub use error::{ClinicError, ClinicResult, ScheduleError, ValidationError};
pub use ident::{IdentSequence, RecordId};
pub use record::{AttributeDef, Record};
pub use schedule::AppointmentManager;
pub use storage::{InMemoryStore, RecordStore, StoreError};
pub use value::AttributeValue;
