use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;

use entity_cell::{Entity, ForeignKey};

use crate::seed;

pub const MAX_REFILLS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    #[serde(rename = "Id")]
    pub id: i64,
    pub patient_id: i64,
    pub medication: String,
    pub dosage: String,
    pub instructions: String,
    pub refills: u32,
    pub prescribed_date: DateTime<Utc>,
    pub status: PrescriptionStatus,
}

impl Prescription {
    pub fn matches_medication(&self, term: &str) -> bool {
        self.medication.to_lowercase().contains(&term.trim().to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrescriptionStatus {
    Active,
    Expired,
    Pending,
}

impl fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrescriptionStatus::Active => write!(f, "active"),
            PrescriptionStatus::Expired => write!(f, "expired"),
            PrescriptionStatus::Pending => write!(f, "pending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrescription {
    pub patient_id: i64,
    pub medication: String,
    pub dosage: String,
    pub instructions: String,
    pub refills: u32,
    pub prescribed_date: DateTime<Utc>,
    pub status: PrescriptionStatus,
}

impl NewPrescription {
    /// A prescription written now, active immediately.
    pub fn issue(
        patient_id: i64,
        medication: impl Into<String>,
        dosage: impl Into<String>,
        instructions: impl Into<String>,
        refills: u32,
    ) -> Self {
        Self {
            patient_id,
            medication: medication.into(),
            dosage: dosage.into(),
            instructions: instructions.into(),
            refills,
            prescribed_date: Utc::now(),
            status: PrescriptionStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refills: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescribed_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PrescriptionStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionStats {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrescriptionQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub status: Option<PrescriptionStatus>,
}

fn check_refills(refills: u32) -> Result<(), String> {
    if refills > MAX_REFILLS {
        return Err(format!("Refills must be between 0 and {}, got {}", MAX_REFILLS, refills));
    }
    Ok(())
}

impl Entity for Prescription {
    type Draft = NewPrescription;
    type Patch = PrescriptionPatch;

    const STORE_NAME: &'static str = "prescriptions";
    const LABEL: &'static str = "Prescription";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[ForeignKey {
        field: "patientId",
        column: "patient_id",
        embed: "patient",
        table: "patients",
    }];

    fn id(&self) -> i64 {
        self.id
    }

    fn seed() -> Vec<Self> {
        seed::prescriptions()
    }

    fn validate_draft(draft: &NewPrescription) -> Result<(), String> {
        if draft.medication.trim().is_empty() {
            return Err("Medication is required".to_string());
        }
        check_refills(draft.refills)
    }

    fn validate_patch(patch: &PrescriptionPatch) -> Result<(), String> {
        patch.refills.map_or(Ok(()), check_refills)
    }
}
