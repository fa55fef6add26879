use axum::{routing::get, Router};

use entity_cell::entity_routes;

use crate::handlers::*;
use crate::services::AppointmentService;

pub fn appointment_routes(service: AppointmentService) -> Router {
    let extras = Router::new()
        .route("/on/{date}", get(appointments_on_day))
        .route("/consultations", get(list_consultations))
        .with_state(service.clone());

    entity_routes(service).merge(extras)
}
