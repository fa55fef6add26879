use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use shared_models::error::AppError;

use crate::models::Entity;
use crate::services::SharedService;

/// Well-formed JSON of the wrong shape is a validation failure; anything
/// else (syntax, content type) is a bad request.
fn rejected_body(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(_) => AppError::ValidationError(rejection.body_text()),
        _ => AppError::BadRequest(rejection.body_text()),
    }
}

pub async fn list_records<E: Entity>(
    State(service): State<SharedService<E>>,
) -> Result<Json<Vec<E>>, AppError> {
    let records = service.get_all().await?;
    Ok(Json(records))
}

pub async fn get_record<E: Entity>(
    State(service): State<SharedService<E>>,
    Path(id): Path<i64>,
) -> Result<Json<E>, AppError> {
    service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("{} not found", E::LABEL)))
}

pub async fn create_record<E: Entity>(
    State(service): State<SharedService<E>>,
    payload: Result<Json<E::Draft>, JsonRejection>,
) -> Result<(StatusCode, Json<E>), AppError> {
    let Json(draft) = payload.map_err(rejected_body)?;
    E::validate_draft(&draft).map_err(AppError::ValidationError)?;

    let record = service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_record<E: Entity>(
    State(service): State<SharedService<E>>,
    Path(id): Path<i64>,
    payload: Result<Json<E::Patch>, JsonRejection>,
) -> Result<Json<E>, AppError> {
    let Json(patch) = payload.map_err(rejected_body)?;
    E::validate_patch(&patch).map_err(AppError::ValidationError)?;

    let record = service.update(id, patch).await?;
    Ok(Json(record))
}

pub async fn delete_record<E: Entity>(
    State(service): State<SharedService<E>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
