//! Handler for timeline generation.
//!
//! Expands every deliverable that has no tasks yet into a task list,
//! distributes the combined set across the project's available days, and
//! returns the refreshed project details view.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use deadlinedash_core::error::CoreError;
use deadlinedash_core::template;
use deadlinedash_core::timeline::{self, TaskDraft, WeekMask};
use deadlinedash_core::types::DbId;
use deadlinedash_db::models::details::ProjectWithDetails;
use deadlinedash_db::models::task::CreateTask;
use deadlinedash_db::repositories::{AvailabilityRepo, ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/projects/{id}/generate-timeline
pub async fn generate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithDetails>> {
    let project = ProjectRepo::with_deliverables(&state.db, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    // A stored schedule with no available day is an explicit user choice,
    // rejected here rather than silently replaced with the weekday default.
    let mask = match AvailabilityRepo::find_by_project(&state.db, id).await {
        Some(availability) if availability.available_day_count() == 0 => {
            return Err(AppError::Core(CoreError::InvalidSchedule(
                "No available days in weekly schedule".to_string(),
            )));
        }
        Some(availability) => availability.week_mask(),
        None => WeekMask::WEEKDAYS,
    };

    let mut drafts: Vec<TaskDraft> = Vec::new();
    for deliverable in &project.deliverables {
        let existing = TaskRepo::list_by_deliverable(&state.db, deliverable.id).await;
        if !existing.is_empty() {
            continue;
        }
        let templates =
            template::expand_deliverable(&deliverable.name, deliverable.description.as_deref());
        drafts.extend(templates.into_iter().map(|t| TaskDraft {
            deliverable_id: deliverable.id,
            name: t.name,
            description: None,
            priority: t.priority,
            estimated_minutes: t.estimated_minutes,
        }));
    }

    let today = Utc::now().date_naive();
    let scheduled = timeline::distribute(drafts, today, project.project.due_date, mask)?;

    let task_count = scheduled.len();
    for task in scheduled {
        let input = CreateTask {
            deliverable_id: task.deliverable_id,
            name: task.name,
            description: task.description,
            due_date: task.due_date,
            priority: task.priority,
            estimated_minutes: Some(task.estimated_minutes),
        };
        TaskRepo::create(&state.db, &input).await;
    }

    tracing::info!(project_id = id, task_count, "Generated timeline");

    let details = ProjectRepo::with_details(&state.db, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(details))
}
