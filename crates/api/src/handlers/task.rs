//! Handlers for the `/tasks` resource and the project-scoped progress and
//! schedule views.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use deadlinedash_core::error::CoreError;
use deadlinedash_core::progress::{self, DayGroup, DeliverableTasks, Progress, TaskStatus};
use deadlinedash_core::types::DbId;
use deadlinedash_db::models::task::{CreateTask, Task};
use deadlinedash_db::repositories::{DeliverableRepo, ProjectRepo, TaskRepo};
use deadlinedash_db::Db;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    input.validate()?;
    if DeliverableRepo::find_by_id(&state.db, input.deliverable_id)
        .await
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Deliverable",
            id: input.deliverable_id,
        }));
    }
    let task = TaskRepo::create(&state.db, &input).await;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /api/tasks/{id}/toggle
pub async fn toggle_completion(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::toggle_completion(&state.db, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// GET /api/deliverables/{id}/tasks
pub async fn list_by_deliverable(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    if DeliverableRepo::find_by_id(&state.db, id).await.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Deliverable",
            id,
        }));
    }
    let tasks = TaskRepo::list_by_deliverable(&state.db, id).await;
    Ok(Json(tasks))
}

/// GET /api/projects/{id}/progress
pub async fn progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Progress>> {
    let snapshot = project_snapshot(&state.db, id).await?;
    Ok(Json(progress::aggregate(&snapshot)))
}

/// GET /api/projects/{id}/schedule
pub async fn schedule(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<DayGroup>>> {
    let snapshot = project_snapshot(&state.db, id).await?;
    let today = Utc::now().date_naive();
    Ok(Json(progress::group_by_due_date(&snapshot, today)))
}

/// Load a project's deliverables and tasks in the shape the aggregator
/// consumes, or 404 if the project does not exist.
async fn project_snapshot(db: &Db, id: DbId) -> AppResult<Vec<DeliverableTasks>> {
    let details = ProjectRepo::with_details(db, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(details
        .deliverables
        .into_iter()
        .map(|entry| DeliverableTasks {
            deliverable_name: entry.deliverable.name,
            tasks: entry
                .tasks
                .into_iter()
                .map(|task| TaskStatus {
                    name: task.name,
                    due_date: task.due_date,
                    completed: task.completed,
                    priority: task.priority,
                })
                .collect(),
        })
        .collect())
}
