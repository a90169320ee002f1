//! Route definitions for the `/deliverables` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{deliverable, task};
use crate::state::AppState;

/// Routes mounted at `/deliverables`.
///
/// ```text
/// POST /             -> create
/// GET  /{id}/tasks   -> list_by_deliverable
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(deliverable::create))
        .route("/{id}/tasks", get(task::list_by_deliverable))
}
