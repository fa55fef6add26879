use axum::{extract::State, Json};

use shared_models::error::AppError;

use crate::models::PrescriptionStats;
use crate::services::{self, PrescriptionService};

#[axum::debug_handler]
pub async fn prescription_stats(
    State(service): State<PrescriptionService>,
) -> Result<Json<PrescriptionStats>, AppError> {
    let prescriptions = service.get_all().await?;
    Ok(Json(services::stats(&prescriptions)))
}
