pub mod directory;

pub use directory::{search_patients, summarize};

use entity_cell::SharedService;

use crate::models::Patient;

pub type PatientService = SharedService<Patient>;
