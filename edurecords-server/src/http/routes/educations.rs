//! Education record endpoints - list, get, create, update, delete

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidRecordId};
use crate::models::{EducationPayload, EducationRecord};
use crate::state::AppState;

/// Confirmation sent after a delete
pub const DELETE_CONFIRMATION: &str = "Education data deleted successfully";

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /educations - list all records
async fn list_educations(
    State(state): State<AppState>,
) -> Result<Json<Vec<EducationRecord>>, ApiError> {
    let records = state.queries().list_all().await?;
    Ok(Json(records))
}

/// GET /educations/{id} - get a single record
async fn get_education(
    State(state): State<AppState>,
    ValidRecordId(id): ValidRecordId,
) -> Result<Json<EducationRecord>, ApiError> {
    let record = state.queries().get(id).await?;
    Ok(Json(record))
}

/// POST /educations - create a record
async fn create_education(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<EducationPayload>,
) -> Result<(StatusCode, Json<EducationRecord>), ApiError> {
    let record = state.mutations().create(payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /editEducation/{id} - replace every field of a record
///
/// Body is `null` when the id is unknown and the policy is lenient.
async fn update_education(
    State(state): State<AppState>,
    ValidRecordId(id): ValidRecordId,
    ValidJson(payload): ValidJson<EducationPayload>,
) -> Result<Json<Option<EducationRecord>>, ApiError> {
    let record = state.mutations().update(id, payload).await?;
    Ok(Json(record))
}

/// DELETE /educations/{id} - delete a record
async fn delete_education(
    State(state): State<AppState>,
    ValidRecordId(id): ValidRecordId,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.mutations().delete(id).await?;
    Ok(Json(DeleteResponse {
        message: DELETE_CONFIRMATION,
    }))
}

/// Education routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/educations", get(list_educations).post(create_education))
        .route(
            "/educations/{id}",
            get(get_education).delete(delete_education),
        )
        .route("/editEducation/{id}", put(update_education))
}
