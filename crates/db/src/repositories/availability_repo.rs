//! Repository for per-project availability records.

use deadlinedash_core::types::DbId;

use crate::models::availability::{Availability, UpsertAvailability};
use crate::store::Db;

/// Provides upsert and lookup for availability records.
pub struct AvailabilityRepo;

impl AvailabilityRepo {
    /// Create the availability record for a project, or replace the stored
    /// one. At most one record exists per project.
    pub async fn upsert(db: &Db, input: &UpsertAvailability) -> Availability {
        let mut tables = db.write().await;

        if let Some(existing) = tables
            .availability
            .values_mut()
            .find(|availability| availability.project_id == input.project_id)
        {
            existing.monday = input.monday;
            existing.tuesday = input.tuesday;
            existing.wednesday = input.wednesday;
            existing.thursday = input.thursday;
            existing.friday = input.friday;
            existing.saturday = input.saturday;
            existing.sunday = input.sunday;
            existing.hours_per_day = input.hours_per_day;
            return existing.clone();
        }

        tables.availability.insert(|id| Availability {
            id,
            project_id: input.project_id,
            monday: input.monday,
            tuesday: input.tuesday,
            wednesday: input.wednesday,
            thursday: input.thursday,
            friday: input.friday,
            saturday: input.saturday,
            sunday: input.sunday,
            hours_per_day: input.hours_per_day,
        })
    }

    pub async fn find_by_project(db: &Db, project_id: DbId) -> Option<Availability> {
        db.read()
            .await
            .availability
            .values()
            .find(|availability| availability.project_id == project_id)
            .cloned()
    }
}
