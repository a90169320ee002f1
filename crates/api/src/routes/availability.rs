//! Route definitions for the `/availability` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::availability;
use crate::state::AppState;

/// Routes mounted at `/availability`.
///
/// ```text
/// POST /  -> upsert (keyed by projectId in the body)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(availability::upsert))
}
