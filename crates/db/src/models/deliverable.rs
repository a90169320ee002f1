//! Deliverable entity model and DTOs.

use deadlinedash_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Rubric point value, informational only; never used by the scheduler.
    pub points: Option<i32>,
    /// Set once every task under the deliverable has been completed.
    pub completed: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new deliverable.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeliverable {
    pub project_id: DbId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "points must not be negative"))]
    pub points: Option<i32>,
}
