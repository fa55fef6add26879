use axum::{
    extract::{Query, State},
    Json,
};

use shared_models::error::AppError;

use crate::models::{Patient, PatientSearchQuery, PatientSummary};
use crate::services::{self, PatientService};

#[axum::debug_handler]
pub async fn search_patients(
    State(service): State<PatientService>,
    Query(query): Query<PatientSearchQuery>,
) -> Result<Json<Vec<Patient>>, AppError> {
    let patients = service.get_all().await?;
    Ok(Json(services::search_patients(patients, &query)))
}

#[axum::debug_handler]
pub async fn patient_summary(
    State(service): State<PatientService>,
) -> Result<Json<PatientSummary>, AppError> {
    let patients = service.get_all().await?;
    Ok(Json(services::summarize(&patients)))
}
