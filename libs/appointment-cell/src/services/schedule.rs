use chrono::NaiveDate;

use crate::models::{Appointment, AppointmentStatus};

/// Appointments starting on `date`, ordered by start time.
pub fn on_day(appointments: Vec<Appointment>, date: NaiveDate) -> Vec<Appointment> {
    let mut day: Vec<Appointment> = appointments.into_iter().filter(|a| a.is_on(date)).collect();
    day.sort_by_key(|a| a.scheduled_time);
    day
}

/// Video consultations, optionally narrowed to one status. Collection order
/// is kept.
pub fn consultations(
    appointments: Vec<Appointment>,
    status: Option<AppointmentStatus>,
) -> Vec<Appointment> {
    appointments
        .into_iter()
        .filter(|a| a.is_video_consultation())
        .filter(|a| status.map_or(true, |s| a.status == s))
        .collect()
}
