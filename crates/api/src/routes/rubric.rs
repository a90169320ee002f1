//! Route definitions for rubric analysis.

use axum::routing::post;
use axum::Router;

use crate::handlers::rubric;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// POST /analyze-rubric  -> analyze
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/analyze-rubric", post(rubric::analyze))
}
