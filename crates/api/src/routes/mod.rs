pub mod availability;
pub mod deliverable;
pub mod health;
pub mod project;
pub mod rubric;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                              service health (GET)
///
/// /analyze-rubric                      parse rubric text (POST)
///
/// /projects                            list (GET ?userId=N), create (POST)
/// /projects/{id}                       get, patch, delete
/// /projects/{id}/details               full nested view (GET)
/// /projects/{id}/progress              aggregated progress (GET)
/// /projects/{id}/schedule              tasks grouped by due date (GET)
/// /projects/{id}/deliverables          deliverables for project (GET)
/// /projects/{id}/availability          stored or default availability (GET)
/// /projects/{id}/generate-timeline     expand and schedule tasks (POST)
///
/// /deliverables                        create (POST)
/// /deliverables/{id}/tasks             tasks for deliverable (GET)
///
/// /tasks                               create (POST)
/// /tasks/{id}/toggle                   flip completion (PATCH)
///
/// /availability                        upsert by projectId (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(rubric::router())
        .nest("/projects", project::router())
        .nest("/deliverables", deliverable::router())
        .nest("/tasks", task::router())
        .nest("/availability", availability::router())
}
