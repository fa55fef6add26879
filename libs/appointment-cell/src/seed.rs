use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Appointment, AppointmentStatus, AppointmentType};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn room(slug: &str) -> Option<String> {
    Some(format!("https://meet.clinic.example/{}", slug))
}

/// Default schedule shown before anything has been saved.
pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            patient_id: 1,
            provider_id: "dr-smith".to_string(),
            scheduled_time: at(2024, 12, 16, 9, 0),
            duration: 30,
            appointment_type: AppointmentType::Consultation,
            status: AppointmentStatus::Scheduled,
            video_room_url: room("sj-0916"),
        },
        Appointment {
            id: 2,
            patient_id: 2,
            provider_id: "dr-smith".to_string(),
            scheduled_time: at(2024, 12, 16, 10, 30),
            duration: 45,
            appointment_type: AppointmentType::FollowUp,
            status: AppointmentStatus::Scheduled,
            video_room_url: None,
        },
        Appointment {
            id: 3,
            patient_id: 3,
            provider_id: "dr-smith".to_string(),
            scheduled_time: at(2024, 12, 16, 14, 0),
            duration: 30,
            appointment_type: AppointmentType::Consultation,
            status: AppointmentStatus::InProgress,
            video_room_url: room("er-1614"),
        },
        Appointment {
            id: 4,
            patient_id: 1,
            provider_id: "dr-smith".to_string(),
            scheduled_time: at(2024, 12, 13, 11, 0),
            duration: 30,
            appointment_type: AppointmentType::FollowUp,
            status: AppointmentStatus::Completed,
            video_room_url: room("sj-1311"),
        },
        Appointment {
            id: 5,
            patient_id: 4,
            provider_id: "dr-smith".to_string(),
            scheduled_time: at(2024, 12, 17, 8, 15),
            duration: 60,
            appointment_type: AppointmentType::Emergency,
            status: AppointmentStatus::Scheduled,
            video_room_url: None,
        },
        Appointment {
            id: 6,
            patient_id: 5,
            provider_id: "dr-smith".to_string(),
            scheduled_time: at(2024, 12, 12, 15, 45),
            duration: 20,
            appointment_type: AppointmentType::Other,
            status: AppointmentStatus::Cancelled,
            video_room_url: None,
        },
    ]
}
