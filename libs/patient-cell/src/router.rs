use axum::{routing::get, Router};

use entity_cell::entity_routes;

use crate::handlers::*;
use crate::services::PatientService;

pub fn patient_routes(service: PatientService) -> Router {
    let extras = Router::new()
        .route("/search", get(search_patients))
        .route("/summary", get(patient_summary))
        .with_state(service.clone());

    entity_routes(service).merge(extras)
}
