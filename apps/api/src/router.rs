use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::{appointment_routes, Appointment};
use dashboard_cell::{
    appointment_search_routes, dashboard_routes, patient_profile_routes,
    prescription_search_routes, DashboardService,
};
use entity_cell::build_service;
use patient_cell::{patient_routes, Patient};
use prescription_cell::{prescription_routes, Prescription};
use shared_config::AppConfig;
use shared_database::KeyValueStorage;

pub fn create_router(config: &AppConfig, storage: Arc<dyn KeyValueStorage>) -> Router {
    let patients = build_service::<Patient>(config, storage.clone());
    let appointments = build_service::<Appointment>(config, storage.clone());
    let prescriptions = build_service::<Prescription>(config, storage);

    let dashboard = DashboardService::new(
        patients.clone(),
        appointments.clone(),
        prescriptions.clone(),
    );

    Router::new()
        .route("/", get(|| async { "Clinic dashboard API is running!" }))
        .nest(
            "/patients",
            patient_routes(patients).merge(patient_profile_routes(dashboard.clone())),
        )
        .nest(
            "/appointments",
            appointment_routes(appointments).merge(appointment_search_routes(dashboard.clone())),
        )
        .nest(
            "/prescriptions",
            prescription_routes(prescriptions).merge(prescription_search_routes(dashboard.clone())),
        )
        .nest("/dashboard", dashboard_routes(dashboard))
}
