//! Handlers for the `/deliverables` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use deadlinedash_core::error::CoreError;
use deadlinedash_core::types::DbId;
use deadlinedash_db::models::deliverable::{CreateDeliverable, Deliverable};
use deadlinedash_db::repositories::{DeliverableRepo, ProjectRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/deliverables
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDeliverable>,
) -> AppResult<(StatusCode, Json<Deliverable>)> {
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
    let deliverable = DeliverableRepo::create(&state.db, &input).await;
    Ok((StatusCode::CREATED, Json(deliverable)))
}

/// GET /api/projects/{id}/deliverables
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Deliverable>>> {
    if ProjectRepo::find_by_id(&state.db, id).await.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }
    let deliverables = DeliverableRepo::list_by_project(&state.db, id).await;
    Ok(Json(deliverables))
}
