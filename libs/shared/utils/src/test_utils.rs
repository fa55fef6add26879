use serde_json::{json, Value};

use shared_config::{AppConfig, DataBackend};

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_supabase_url(url: impl Into<String>) -> Self {
        Self {
            supabase_url: url.into(),
            ..Self::default()
        }
    }

    /// Config for the local backend with no simulated latency.
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            ..AppConfig::default()
        }
    }

    pub fn to_supabase_config(&self) -> AppConfig {
        AppConfig {
            data_backend: DataBackend::Supabase,
            ..self.to_app_config()
        }
    }
}

/// Rows shaped the way the hosted backend returns them: snake_case columns
/// and foreign keys embedded as nested objects.
pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn patient_row(id: i64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "date_of_birth": "1985-03-14",
            "insurance": {
                "provider": "Blue Cross",
                "policy_number": "BC-1029384",
                "group_number": "GRP-77",
                "verified": true
            },
            "upcoming_appointments": [],
            "medical_history": [
                {
                    "type": "Annual Physical",
                    "notes": "Routine checkup, no concerns.",
                    "date": "2024-01-10",
                    "attachment_count": 1
                }
            ]
        })
    }

    pub fn uninsured_patient_row(id: i64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "date_of_birth": "2001-07-02",
            "insurance": null,
            "upcoming_appointments": [],
            "medical_history": []
        })
    }

    pub fn appointment_row(id: i64, patient_id: i64) -> Value {
        json!({
            "id": id,
            "patient": { "id": patient_id, "name": "Test Patient" },
            "provider_id": "dr-chen",
            "scheduled_time": "2024-12-25T10:00:00Z",
            "duration": 30,
            "type": "consultation",
            "status": "scheduled",
            "video_room_url": "https://meet.example.com/room-42"
        })
    }

    pub fn prescription_row(id: i64, patient_id: i64) -> Value {
        json!({
            "id": id,
            "patient": { "id": patient_id },
            "medication": "Lisinopril",
            "dosage": "10mg",
            "instructions": "Take once daily in the morning",
            "refills": 3,
            "prescribed_date": "2024-11-01T09:30:00Z",
            "status": "active"
        })
    }

    pub fn error_response(message: &str) -> Value {
        json!({
            "code": "PGRST301",
            "message": message,
            "details": null,
            "hint": null
        })
    }
}
