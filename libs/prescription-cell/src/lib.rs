pub mod models;
pub mod handlers;
pub mod router;
pub mod seed;
pub mod services;

pub use models::*;
pub use router::*;
pub use services::PrescriptionService;
