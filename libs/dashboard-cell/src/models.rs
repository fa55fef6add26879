use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use appointment_cell::Appointment;
use patient_cell::Patient;
use prescription_cell::Prescription;

// ==============================================================================
// DASHBOARD VIEWS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub date: NaiveDate,
    pub todays_appointments: usize,
    pub total_patients: usize,
    pub active_prescriptions: usize,
    pub completed_consultations: usize,
}

/// One row of the day's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledVisit {
    pub appointment: Appointment,
    pub patient: Patient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub patient: Patient,
    pub appointments: Vec<Appointment>,
    pub prescriptions: Vec<Prescription>,
}

/// A prescription row as listed, with its patient's name resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionListing {
    #[serde(flatten)]
    pub prescription: Prescription,
    pub patient_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentListing {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub patient_name: String,
}

// ==============================================================================
// QUERY MODELS
// ==============================================================================

/// Defaults to the current UTC day when `date` is omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}
