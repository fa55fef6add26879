// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::fmt;

use entity_cell::{Entity, ForeignKey};

use crate::seed;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "Id")]
    pub id: i64,
    pub patient_id: i64,
    pub provider_id: String,
    pub scheduled_time: DateTime<Utc>,
    /// Minutes.
    pub duration: u32,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_room_url: Option<String>,
}

impl Appointment {
    /// Calculate the scheduled end time based on scheduled_time and duration
    pub fn end_time(&self) -> DateTime<Utc> {
        self.scheduled_time + Duration::minutes(i64::from(self.duration))
    }

    /// True when the appointment starts on `date` (UTC calendar day).
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.scheduled_time.date_naive() == date
    }

    /// Consultations and anything with a video room are held over video.
    pub fn is_video_consultation(&self) -> bool {
        self.appointment_type == AppointmentType::Consultation || self.video_room_url.is_some()
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty() || self.appointment_type.to_string().contains(&term)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    Consultation,
    FollowUp,
    Emergency,
    Other,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::Consultation => write!(f, "consultation"),
            AppointmentType::FollowUp => write!(f, "follow-up"),
            AppointmentType::Emergency => write!(f, "emergency"),
            AppointmentType::Other => write!(f, "other"),
        }
    }
}

/// Advanced only by caller-supplied updates; no transition rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::InProgress => write!(f, "in-progress"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: i64,
    pub provider_id: String,
    pub scheduled_time: DateTime<Utc>,
    pub duration: u32,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_room_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<AppointmentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    /// `null` detaches the video room.
    #[serde(
        default,
        deserialize_with = "entity_cell::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_room_url: Option<Option<String>>,
}

impl AppointmentPatch {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsultationQuery {
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
}

impl Entity for Appointment {
    type Draft = NewAppointment;
    type Patch = AppointmentPatch;

    const STORE_NAME: &'static str = "appointments";
    const LABEL: &'static str = "Appointment";
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
        seed::appointments()
    }

    fn validate_draft(draft: &NewAppointment) -> Result<(), String> {
        if draft.duration == 0 {
            return Err("Appointment duration must be at least one minute".to_string());
        }
        Ok(())
    }

    fn validate_patch(patch: &AppointmentPatch) -> Result<(), String> {
        if patch.duration == Some(0) {
            return Err("Appointment duration must be at least one minute".to_string());
        }
        Ok(())
    }
}
