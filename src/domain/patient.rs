//! Patient records and their medical histories.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::require_text;
use crate::domain::types::BloodType;
use crate::error::ValidationError;
use crate::ident::RecordId;
use crate::record::{AttributeDef, Record};
use crate::value::AttributeValue;

/// Clinical history attached to a patient.
///
/// Entries are append-only lines of free text, the way a paper chart
/// accumulates them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistory {
    diagnoses: Vec<String>,
    treatments: Vec<String>,
    allergies: Vec<String>,
}

impl MedicalHistory {
    /// Appends a diagnosis line.
    pub fn add_diagnosis(&mut self, entry: impl Into<String>) {
        self.diagnoses.push(entry.into());
    }

    /// Appends a treatment line.
    pub fn add_treatment(&mut self, entry: impl Into<String>) {
        self.treatments.push(entry.into());
    }

    /// Appends a known allergy.
    pub fn add_allergy(&mut self, entry: impl Into<String>) {
        self.allergies.push(entry.into());
    }

    /// Recorded diagnoses, oldest first.
    #[must_use]
    pub fn diagnoses(&self) -> &[String] {
        &self.diagnoses
    }

    /// Recorded treatments, oldest first.
    #[must_use]
    pub fn treatments(&self) -> &[String] {
        &self.treatments
    }

    /// Recorded allergies, oldest first.
    #[must_use]
    pub fn allergies(&self) -> &[String] {
        &self.allergies
    }

    /// Returns true when nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnoses.is_empty() && self.treatments.is_empty() && self.allergies.is_empty()
    }
}

/// A registered patient.
///
/// Constructed through [`Patient::builder`]; the identity slot stays empty
/// until a store assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    ident: Option<RecordId>,
    first_name: String,
    last_name: String,
    dni: String,
    birth_date: NaiveDate,
    blood_type: BloodType,
    phone: Option<String>,
    address: Option<String>,
    history: MedicalHistory,
}

impl Patient {
    /// Starts building a patient.
    #[must_use]
    pub fn builder() -> PatientBuilder {
        PatientBuilder::default()
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

    /// Contact phone, if registered.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Street address, if registered.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// The patient's medical history.
    #[must_use]
    pub fn history(&self) -> &MedicalHistory {
        &self.history
    }

    /// Mutable access to the medical history.
    pub fn history_mut(&mut self) -> &mut MedicalHistory {
        &mut self.history
    }
}

impl Record for Patient {
    const KIND: &'static str = "Patient";

    fn ident(&self) -> Option<RecordId> {
        self.ident
    }

    fn assign_ident(&mut self, id: RecordId) {
        self.ident = Some(id);
    }

    fn attributes() -> &'static [AttributeDef<Self>] {
        const ATTRS: &[AttributeDef<Patient>] = &[
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
                name: "blood_type",
                get: |p| AttributeValue::from(p.blood_type.label()),
            },
            AttributeDef {
                name: "phone",
                get: |p| AttributeValue::from(p.phone.clone()),
            },
            AttributeDef {
                name: "birth_date",
                get: |p| AttributeValue::from(p.birth_date),
            },
        ];
        ATTRS
    }
}

/// Builder for [`Patient`].
#[derive(Debug, Default)]
pub struct PatientBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    dni: Option<String>,
    birth_date: Option<NaiveDate>,
    blood_type: Option<BloodType>,
    phone: Option<String>,
    address: Option<String>,
}

impl PatientBuilder {
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

    /// Sets the contact phone.
    #[must_use]
    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// Sets the street address.
    #[must_use]
    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    /// Validates required fields and builds the patient.
    ///
    /// # Errors
    /// [`ValidationError::MissingField`] for an unset required field;
    /// [`ValidationError::BlankField`] for a provided-but-blank one.
    pub fn build(self) -> Result<Patient, ValidationError> {
        let first_name = require_text("first_name", self.first_name)?;
        let last_name = require_text("last_name", self.last_name)?;
        let dni = require_text("dni", self.dni)?;
        let birth_date = self
            .birth_date
            .ok_or(ValidationError::MissingField { field: "birth_date" })?;
        let blood_type = self
            .blood_type
            .ok_or(ValidationError::MissingField { field: "blood_type" })?;

        Ok(Patient {
            ident: None,
            first_name,
            last_name,
            dni,
            birth_date,
            blood_type,
            phone: self.phone,
            address: self.address,
            history: MedicalHistory::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maria() -> Patient {
        Patient::builder()
            .first_name("María")
            .last_name("López")
            .dni("11111111")
            .birth_date(NaiveDate::from_ymd_opt(1985, 12, 5).unwrap())
            .blood_type(BloodType::APositive)
            .phone("011-1111-1111")
            .build()
            .unwrap()
    }

    #[test]
    fn builder_produces_unidentified_patient() {
        let p = maria();
        assert_eq!(Record::ident(&p), None);
        assert_eq!(p.full_name(), "María López");
        assert_eq!(p.dni(), "11111111");
        assert!(p.history().is_empty());
    }

    #[test]
    fn builder_rejects_missing_required_field() {
        let err = Patient::builder()
            .first_name("María")
            .last_name("López")
            .birth_date(NaiveDate::from_ymd_opt(1985, 12, 5).unwrap())
            .blood_type(BloodType::APositive)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "dni" });
    }

    #[test]
    fn builder_rejects_blank_required_field() {
        let err = Patient::builder()
            .first_name("   ")
            .last_name("López")
            .dni("11111111")
            .birth_date(NaiveDate::from_ymd_opt(1985, 12, 5).unwrap())
            .blood_type(BloodType::APositive)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::BlankField { field: "first_name" });
    }

    #[test]
    fn history_accumulates_entries() {
        let mut p = maria();
        p.history_mut().add_diagnosis("arterial hypertension");
        p.history_mut().add_treatment("enalapril 10mg");
        p.history_mut().add_allergy("penicillin");

        assert_eq!(p.history().diagnoses(), ["arterial hypertension"]);
        assert_eq!(p.history().treatments(), ["enalapril 10mg"]);
        assert_eq!(p.history().allergies(), ["penicillin"]);
        assert!(!p.history().is_empty());
    }

    #[test]
    fn declared_attributes_resolve() {
        let p = maria();
        assert_eq!(p.attribute("dni"), Some(AttributeValue::from("11111111")));
        assert_eq!(
            p.attribute("blood_type"),
            Some(AttributeValue::from("A+"))
        );
        assert_eq!(
            p.attribute("phone"),
            Some(AttributeValue::from("011-1111-1111"))
        );
        assert_eq!(p.attribute("shoe_size"), None);
    }

    #[test]
    fn unset_optional_attribute_resolves_to_null() {
        let p = Patient::builder()
            .first_name("Pedro")
            .last_name("García")
            .dni("22222222")
            .birth_date(NaiveDate::from_ymd_opt(2010, 6, 15).unwrap())
            .blood_type(BloodType::OPositive)
            .build()
            .unwrap();
        assert_eq!(p.attribute("phone"), Some(AttributeValue::Null));
    }
}
