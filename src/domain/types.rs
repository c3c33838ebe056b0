//! Shared clinical vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// ABO/Rh blood type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodType {
    /// A, Rh positive.
    APositive,
    /// A, Rh negative.
    ANegative,
    /// B, Rh positive.
    BPositive,
    /// B, Rh negative.
    BNegative,
    /// AB, Rh positive.
    AbPositive,
    /// AB, Rh negative.
    AbNegative,
    /// O, Rh positive.
    OPositive,
    /// O, Rh negative.
    ONegative,
}

impl BloodType {
    /// Conventional short label, e.g. `A+`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Medical specialty a department or physician practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalSpecialty {
    /// Heart and circulatory system.
    Cardiology,
    /// Care of children.
    Pediatrics,
    /// Musculoskeletal injuries.
    Traumatology,
    /// Nervous system.
    Neurology,
    /// General practice.
    GeneralMedicine,
}

impl MedicalSpecialty {
    /// Human-readable specialty name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardiology => "cardiology",
            Self::Pediatrics => "pediatrics",
            Self::Traumatology => "traumatology",
            Self::Neurology => "neurology",
            Self::GeneralMedicine => "general medicine",
        }
    }
}

impl fmt::Display for MedicalSpecialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
