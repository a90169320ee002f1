//! Route definitions for the `/projects` resource.
//!
//! Also mounts the project-scoped views (details, progress, schedule,
//! deliverables, availability) and timeline generation.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{availability, deliverable, project, task, timeline};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                      -> list (?userId=N)
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// PATCH  /{id}                  -> update
/// DELETE /{id}                  -> delete
/// GET    /{id}/details          -> details
/// GET    /{id}/progress         -> progress
/// GET    /{id}/schedule         -> schedule
/// GET    /{id}/deliverables     -> list_by_project
/// GET    /{id}/availability     -> get_for_project
/// POST   /{id}/generate-timeline -> generate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .patch(project::update)
                .delete(project::delete),
        )
        .route("/{id}/details", get(project::details))
        .route("/{id}/progress", get(task::progress))
        .route("/{id}/schedule", get(task::schedule))
        .route("/{id}/deliverables", get(deliverable::list_by_project))
        .route("/{id}/availability", get(availability::get_for_project))
        .route("/{id}/generate-timeline", post(timeline::generate))
}
