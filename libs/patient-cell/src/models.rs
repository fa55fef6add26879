use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::fmt;

use entity_cell::Entity;

use crate::seed;

// ==============================================================================
// CORE PATIENT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(rename = "Id")]
    pub id: i64,
    pub name: String,
    pub date_of_birth: NaiveDate,
    /// Absent when the patient has no coverage on file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Insurance>,
    /// Appointment ids.
    #[serde(default)]
    pub upcoming_appointments: Vec<i64>,
    #[serde(default)]
    pub medical_history: Vec<MedicalHistoryEntry>,
}

impl Patient {
    pub fn insurance_status(&self) -> InsuranceStatus {
        match &self.insurance {
            None => InsuranceStatus::NotVerified,
            Some(insurance) if insurance.verified => InsuranceStatus::Verified,
            Some(_) => InsuranceStatus::Pending,
        }
    }

    /// Age in whole years on `today`. Never negative.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.date_of_birth).unwrap_or(0)
    }

    /// Case-insensitive match on name or insurance provider. An empty term
    /// matches everyone.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self
                .insurance
                .as_ref()
                .is_some_and(|i| i.provider.to_lowercase().contains(&term))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    pub provider: String,
    pub policy_number: String,
    pub group_number: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistoryEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub notes: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsuranceStatus {
    Verified,
    Pending,
    NotVerified,
}

impl fmt::Display for InsuranceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsuranceStatus::Verified => write!(f, "verified"),
            InsuranceStatus::Pending => write!(f, "pending"),
            InsuranceStatus::NotVerified => write!(f, "not-verified"),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Medical history is read-only, so it is absent from both payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub insurance: Option<Insurance>,
    #[serde(default)]
    pub upcoming_appointments: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// `null` removes the coverage on file.
    #[serde(
        default,
        deserialize_with = "entity_cell::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub insurance: Option<Option<Insurance>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming_appointments: Option<Vec<i64>>,
}

/// Insurance filter offered on the patient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceFilter {
    #[default]
    All,
    Verified,
    Unverified,
}

impl InsuranceFilter {
    pub fn accepts(&self, patient: &Patient) -> bool {
        match self {
            InsuranceFilter::All => true,
            InsuranceFilter::Verified => patient.insurance_status() == InsuranceStatus::Verified,
            InsuranceFilter::Unverified => patient.insurance_status() != InsuranceStatus::Verified,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub insurance: InsuranceFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub total: usize,
    pub verified: usize,
    pub pending: usize,
    pub not_verified: usize,
}

impl Entity for Patient {
    type Draft = NewPatient;
    type Patch = PatientPatch;

    const STORE_NAME: &'static str = "patients";
    const LABEL: &'static str = "Patient";

    fn id(&self) -> i64 {
        self.id
    }

    fn seed() -> Vec<Self> {
        seed::patients()
    }

    fn validate_draft(draft: &NewPatient) -> Result<(), String> {
        if draft.name.trim().is_empty() {
            return Err("Patient name is required".to_string());
        }
        Ok(())
    }

    fn validate_patch(patch: &PatientPatch) -> Result<(), String> {
        if patch.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err("Patient name cannot be blank".to_string());
        }
        Ok(())
    }
}
