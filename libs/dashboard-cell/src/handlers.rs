use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

use prescription_cell::PrescriptionQuery;
use shared_models::error::AppError;

use crate::models::{
    AppointmentListing, DashboardStats, DayQuery, PatientProfile, PrescriptionListing,
    ScheduledVisit, SearchQuery,
};
use crate::services::DashboardService;

#[axum::debug_handler]
pub async fn dashboard_stats(
    State(service): State<DashboardService>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DashboardStats>, AppError> {
    let today = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(service.stats(today).await?))
}

#[axum::debug_handler]
pub async fn todays_schedule(
    State(service): State<DashboardService>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<ScheduledVisit>>, AppError> {
    let today = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(service.todays_schedule(today).await?))
}

#[axum::debug_handler]
pub async fn patient_profile(
    State(service): State<DashboardService>,
    Path(patient_id): Path<i64>,
) -> Result<Json<PatientProfile>, AppError> {
    Ok(Json(service.patient_profile(patient_id).await?))
}

#[axum::debug_handler]
pub async fn search_prescriptions(
    State(service): State<DashboardService>,
    Query(query): Query<PrescriptionQuery>,
) -> Result<Json<Vec<PrescriptionListing>>, AppError> {
    Ok(Json(service.search_prescriptions(&query).await?))
}

#[axum::debug_handler]
pub async fn search_appointments(
    State(service): State<DashboardService>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<AppointmentListing>>, AppError> {
    let term = query.q.unwrap_or_default();
    Ok(Json(service.search_appointments(&term).await?))
}
