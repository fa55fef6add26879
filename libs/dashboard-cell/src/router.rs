use axum::{routing::get, Router};

use crate::handlers::*;
use crate::services::DashboardService;

/// Mounted at `/dashboard`.
pub fn dashboard_routes(service: DashboardService) -> Router {
    Router::new()
        .route("/stats", get(dashboard_stats))
        .route("/today", get(todays_schedule))
        .with_state(service)
}

/// Joined views that live under the collection paths. Each router is meant to
/// be merged into the matching entity router before nesting.
pub fn patient_profile_routes(service: DashboardService) -> Router {
    Router::new()
        .route("/{id}/profile", get(patient_profile))
        .with_state(service)
}

pub fn prescription_search_routes(service: DashboardService) -> Router {
    Router::new()
        .route("/search", get(search_prescriptions))
        .with_state(service)
}

pub fn appointment_search_routes(service: DashboardService) -> Router {
    Router::new()
        .route("/search", get(search_appointments))
        .with_state(service)
}
