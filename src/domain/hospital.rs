//! Hospital structure: the hospital itself, its departments, and rooms.
//!
//! These types shape the simulation's data; they are collaborators of the
//! store, not records it manages.

use serde::{Deserialize, Serialize};

use crate::domain::patient::Patient;
use crate::domain::physician::Physician;
use crate::domain::require_text;
use crate::domain::types::MedicalSpecialty;
use crate::error::ValidationError;

/// A physical room inside a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    code: String,
    kind: String,
}

impl Room {
    /// Creates a room from a code (e.g. `CARD-101`) and a kind
    /// (e.g. `consulting room`).
    #[must_use]
    pub fn new(code: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            kind: kind.into(),
        }
    }

    /// Room code, unique within the hospital by convention.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// What the room is used for.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// A department practicing one specialty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    name: String,
    specialty: MedicalSpecialty,
    rooms: Vec<Room>,
    physicians: Vec<Physician>,
}

impl Department {
    /// Starts building a department.
    #[must_use]
    pub fn builder() -> DepartmentBuilder {
        DepartmentBuilder::default()
    }

    /// Department name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Practiced specialty.
    #[must_use]
    pub fn specialty(&self) -> MedicalSpecialty {
        self.specialty
    }

    /// Adds a room to this department.
    pub fn create_room(&mut self, code: impl Into<String>, kind: impl Into<String>) {
        self.rooms.push(Room::new(code, kind));
    }

    /// Registers a physician with this department.
    pub fn add_physician(&mut self, physician: Physician) {
        self.physicians.push(physician);
    }

    /// Rooms in creation order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Registered physicians.
    #[must_use]
    pub fn physicians(&self) -> &[Physician] {
        &self.physicians
    }
}

/// Builder for [`Department`].
#[derive(Debug, Default)]
pub struct DepartmentBuilder {
    name: Option<String>,
    specialty: Option<MedicalSpecialty>,
}

impl DepartmentBuilder {
    /// Sets the department name (required).
    #[must_use]
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Sets the practiced specialty (required).
    #[must_use]
    pub fn specialty(mut self, value: MedicalSpecialty) -> Self {
        self.specialty = Some(value);
        self
    }

    /// Validates required fields and builds the department.
    ///
    /// # Errors
    /// [`ValidationError`] naming the missing or blank field.
    pub fn build(self) -> Result<Department, ValidationError> {
        let name = require_text("name", self.name)?;
        let specialty = self
            .specialty
            .ok_or(ValidationError::MissingField { field: "specialty" })?;
        Ok(Department {
            name,
            specialty,
            rooms: Vec::new(),
            physicians: Vec::new(),
        })
    }
}

/// The hospital: owns departments and the register of patients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    name: String,
    address: String,
    phone: String,
    departments: Vec<Department>,
    patients: Vec<Patient>,
}

impl Hospital {
    /// Starts building a hospital.
    #[must_use]
    pub fn builder() -> HospitalBuilder {
        HospitalBuilder::default()
    }

    /// Hospital name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Contact phone.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Adds a department.
    pub fn add_department(&mut self, department: Department) {
        self.departments.push(department);
    }

    /// Registers a patient with the hospital.
    pub fn register_patient(&mut self, patient: Patient) {
        self.patients.push(patient);
    }

    /// Departments in creation order.
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Mutable view of the departments, for attaching rooms and staff.
    pub fn departments_mut(&mut self) -> &mut [Department] {
        &mut self.departments
    }

    /// The first department practicing `specialty`, if any.
    #[must_use]
    pub fn department_by_specialty(&self, specialty: MedicalSpecialty) -> Option<&Department> {
        self.departments.iter().find(|d| d.specialty == specialty)
    }

    /// Registered patients.
    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }
}

/// Builder for [`Hospital`].
#[derive(Debug, Default)]
pub struct HospitalBuilder {
    name: Option<String>,
    address: Option<String>,
    phone: Option<String>,
}

impl HospitalBuilder {
    /// Sets the hospital name (required).
    #[must_use]
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Sets the street address (required).
    #[must_use]
    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    /// Sets the contact phone (required).
    #[must_use]
    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// Validates required fields and builds the hospital.
    ///
    /// # Errors
    /// [`ValidationError`] naming the missing or blank field.
    pub fn build(self) -> Result<Hospital, ValidationError> {
        let name = require_text("name", self.name)?;
        let address = require_text("address", self.address)?;
        let phone = require_text("phone", self.phone)?;
        Ok(Hospital {
            name,
            address,
            phone,
            departments: Vec::new(),
            patients: Vec::new(),
        })
    }
}
