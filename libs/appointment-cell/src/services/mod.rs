pub mod schedule;

pub use schedule::{consultations, on_day};

use entity_cell::SharedService;

use crate::models::Appointment;

pub type AppointmentService = SharedService<Appointment>;
