//! Physician records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::require_text;
use crate::domain::types::{BloodType, MedicalSpecialty};
use crate::error::ValidationError;
use crate::ident::RecordId;
use crate::record::{AttributeDef, Record};
use crate::value::AttributeValue;

/// A licensed physician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Physician {
    ident: Option<RecordId>,
    first_name: String,
    last_name: String,
    dni: String,
    birth_date: NaiveDate,
    blood_type: BloodType,
    license: String,
    specialty: MedicalSpecialty,
}

impl Physician {
    /// Starts building a physician.
    #[must_use]
    pub fn builder() -> PhysicianBuilder {
        PhysicianBuilder::default()
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"first last"` display form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// National identity document number.
    #[must_use]
    pub fn dni(&self) -> &str {
        &self.dni
    }

    /// Date of birth.
    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Blood type.
    #[must_use]
    pub fn blood_type(&self) -> BloodType {
        self.blood_type
    }

    /// Professional license number.
    #[must_use]
    pub fn license(&self) -> &str {
        &self.license
    }

    /// Practiced specialty.
    #[must_use]
    pub fn specialty(&self) -> MedicalSpecialty {
        self.specialty
    }
}

impl Record for Physician {
    const KIND: &'static str = "Physician";

    fn ident(&self) -> Option<RecordId> {
        self.ident
    }

    fn assign_ident(&mut self, id: RecordId) {
        self.ident = Some(id);
    }

    fn attributes() -> &'static [AttributeDef<Self>] {
        const ATTRS: &[AttributeDef<Physician>] = &[
            AttributeDef {
                name: "dni",
                get: |p| AttributeValue::from(p.dni.as_str()),
            },
            AttributeDef {
                name: "first_name",
                get: |p| AttributeValue::from(p.first_name.as_str()),
            },
            AttributeDef {
                name: "last_name",
                get: |p| AttributeValue::from(p.last_name.as_str()),
            },
            AttributeDef {
                name: "license",
                get: |p| AttributeValue::from(p.license.as_str()),
            },
            AttributeDef {
                name: "specialty",
                get: |p| AttributeValue::from(p.specialty.name()),
            },
        ];
        ATTRS
    }
}

/// Builder for [`Physician`].
#[derive(Debug, Default)]
pub struct PhysicianBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    dni: Option<String>,
    birth_date: Option<NaiveDate>,
    blood_type: Option<BloodType>,
    license: Option<String>,
    specialty: Option<MedicalSpecialty>,
}

impl PhysicianBuilder {
    /// Sets the given name (required).
    #[must_use]
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Sets the family name (required).
    #[must_use]
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Sets the identity document number (required).
    #[must_use]
    pub fn dni(mut self, value: impl Into<String>) -> Self {
        self.dni = Some(value.into());
        self
    }

    /// Sets the date of birth (required).
    #[must_use]
    pub fn birth_date(mut self, value: NaiveDate) -> Self {
        self.birth_date = Some(value);
        self
    }

    /// Sets the blood type (required).
    #[must_use]
    pub fn blood_type(mut self, value: BloodType) -> Self {
        self.blood_type = Some(value);
        self
    }

    /// Sets the professional license number (required).
    #[must_use]
    pub fn license(mut self, value: impl Into<String>) -> Self {
        self.license = Some(value.into());
        self
    }

    /// Sets the practiced specialty (required).
    #[must_use]
    pub fn specialty(mut self, value: MedicalSpecialty) -> Self {
        self.specialty = Some(value);
        self
    }

    /// Validates required fields and builds the physician.
    ///
    /// # Errors
    /// [`ValidationError::MissingField`] for an unset required field;
    /// [`ValidationError::BlankField`] for a provided-but-blank one.
    pub fn build(self) -> Result<Physician, ValidationError> {
        let first_name = require_text("first_name", self.first_name)?;
        let last_name = require_text("last_name", self.last_name)?;
        let dni = require_text("dni", self.dni)?;
        let license = require_text("license", self.license)?;
        let birth_date = self
            .birth_date
            .ok_or(ValidationError::MissingField { field: "birth_date" })?;
        let blood_type = self
            .blood_type
            .ok_or(ValidationError::MissingField { field: "blood_type" })?;
        let specialty = self
            .specialty
            .ok_or(ValidationError::MissingField { field: "specialty" })?;

        Ok(Physician {
            ident: None,
            first_name,
            last_name,
            dni,
            birth_date,
            blood_type,
            license,
            specialty,
        })
    }
}
