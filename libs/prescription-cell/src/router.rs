use axum::{routing::get, Router};

use entity_cell::entity_routes;

use crate::handlers::*;
use crate::services::PrescriptionService;

pub fn prescription_routes(service: PrescriptionService) -> Router {
    let extras = Router::new()
        .route("/stats", get(prescription_stats))
        .with_state(service.clone());

    entity_routes(service).merge(extras)
}
