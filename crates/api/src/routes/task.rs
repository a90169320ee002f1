//! Route definitions for the `/tasks` resource.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// POST  /              -> create
/// PATCH /{id}/toggle   -> toggle_completion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(task::create))
        .route("/{id}/toggle", patch(task::toggle_completion))
}
