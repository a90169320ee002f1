//! Task entity model and DTOs.

use chrono::NaiveDate;
use deadlinedash_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub deliverable_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Assigned once at generation time; never rebalanced afterwards.
    pub due_date: NaiveDate,
    pub completed: bool,
    /// 1 = low, 2 = medium, 3 = high.
    pub priority: i32,
    pub estimated_minutes: Option<i32>,
    pub created_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub deliverable_id: DbId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    /// Defaults to 1 (low) if omitted.
    #[serde(default = "default_priority")]
    #[validate(range(min = 1, max = 3, message = "priority must be between 1 and 3"))]
    pub priority: i32,
    #[validate(range(min = 1, message = "estimatedMinutes must be positive"))]
    pub estimated_minutes: Option<i32>,
}

fn default_priority() -> i32 {
    1
}
