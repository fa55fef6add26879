pub mod catalog;

pub use catalog::{filter_prescriptions, stats};

use entity_cell::SharedService;

use crate::models::Prescription;

pub type PrescriptionService = SharedService<Prescription>;
