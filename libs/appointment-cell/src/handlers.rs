use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;

use shared_models::error::AppError;

use crate::models::{Appointment, ConsultationQuery};
use crate::services::{self, AppointmentService};

#[axum::debug_handler]
pub async fn appointments_on_day(
    State(service): State<AppointmentService>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = service.get_all().await?;
    Ok(Json(services::on_day(appointments, date)))
}

#[axum::debug_handler]
pub async fn list_consultations(
    State(service): State<AppointmentService>,
    Query(query): Query<ConsultationQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = service.get_all().await?;
    Ok(Json(services::consultations(appointments, query.status)))
}
