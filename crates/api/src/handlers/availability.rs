//! Handlers for the `/availability` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use deadlinedash_core::error::CoreError;
use deadlinedash_core::types::DbId;
use deadlinedash_db::models::availability::{Availability, UpsertAvailability};
use deadlinedash_db::repositories::{AvailabilityRepo, ProjectRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/availability
pub async fn upsert(
    State(state): State<AppState>,
    Json(input): Json<UpsertAvailability>,
) -> AppResult<(StatusCode, Json<Availability>)> {
    input.validate()?;
    if ProjectRepo::find_by_id(&state.db, input.project_id)
        .await
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id,
        }));
    }
    let availability = AvailabilityRepo::upsert(&state.db, &input).await;
    Ok((StatusCode::CREATED, Json(availability)))
}

/// GET /api/projects/{id}/availability
///
/// Falls back to the weekday default when no record has been stored yet.
pub async fn get_for_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Availability>> {
    if ProjectRepo::find_by_id(&state.db, id).await.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }
    let availability = AvailabilityRepo::find_by_project(&state.db, id)
        .await
        .unwrap_or_else(|| Availability::default_for_project(id));
    Ok(Json(availability))
}
