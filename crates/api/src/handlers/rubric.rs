//! Handler for rubric analysis.

use axum::Json;
use deadlinedash_core::rubric::{self, DeliverableDraft};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRubricRequest {
    #[validate(length(min = 1, message = "Rubric text must not be empty"))]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeRubricResponse {
    pub deliverables: Vec<DeliverableDraft>,
}

/// POST /api/analyze-rubric
pub async fn analyze(
    Json(input): Json<AnalyzeRubricRequest>,
) -> AppResult<Json<AnalyzeRubricResponse>> {
    input.validate()?;
    let deliverables = rubric::parse_rubric(&input.text)?;
    Ok(Json(AnalyzeRubricResponse { deliverables }))
}
