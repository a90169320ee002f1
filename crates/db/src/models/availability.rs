//! Availability entity model and DTOs.
//!
//! One record per project describing which weekdays the user intends to
//! work. A missing record is never an error; callers substitute
//! [`Availability::default_for_project`].

use deadlinedash_core::timeline::WeekMask;
use deadlinedash_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub id: DbId,
    pub project_id: DbId,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    /// Stored for display; the scheduler does not consume it.
    pub hours_per_day: i32,
}

impl Availability {
    /// The mask substituted when a project has no stored record: Mon-Fri
    /// available, 2 hours per day. `id` 0 marks the record as synthetic.
    pub fn default_for_project(project_id: DbId) -> Self {
        Self {
            id: 0,
            project_id,
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: false,
            sunday: false,
            hours_per_day: 2,
        }
    }

    pub fn week_mask(&self) -> WeekMask {
        WeekMask::new([
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ])
    }

    pub fn available_day_count(&self) -> usize {
        self.week_mask().available_days_per_week()
    }
}

/// DTO for creating or replacing a project's availability record.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAvailability {
    pub project_id: DbId,
    #[serde(default = "default_true")]
    pub monday: bool,
    #[serde(default = "default_true")]
    pub tuesday: bool,
    #[serde(default = "default_true")]
    pub wednesday: bool,
    #[serde(default = "default_true")]
    pub thursday: bool,
    #[serde(default = "default_true")]
    pub friday: bool,
    #[serde(default)]
    pub saturday: bool,
    #[serde(default)]
    pub sunday: bool,
    #[serde(default = "default_hours_per_day")]
    #[validate(range(min = 1, max = 24, message = "hoursPerDay must be between 1 and 24"))]
    pub hours_per_day: i32,
}

fn default_true() -> bool {
    true
}

fn default_hours_per_day() -> i32 {
    2
}
