//! Repository for deliverables.

use chrono::Utc;
use deadlinedash_core::types::DbId;

use crate::models::deliverable::{CreateDeliverable, Deliverable};
use crate::store::Db;

/// Provides CRUD operations for deliverables.
pub struct DeliverableRepo;

impl DeliverableRepo {
    pub async fn create(db: &Db, input: &CreateDeliverable) -> Deliverable {
        let now = Utc::now();
        db.write().await.deliverables.insert(|id| Deliverable {
            id,
            project_id: input.project_id,
            name: input.name.clone(),
            description: input.description.clone(),
            points: input.points,
            completed: false,
            created_at: now,
        })
    }

    pub async fn find_by_id(db: &Db, id: DbId) -> Option<Deliverable> {
        db.read().await.deliverables.get(id).cloned()
    }

    pub async fn list_by_project(db: &Db, project_id: DbId) -> Vec<Deliverable> {
        db.read()
            .await
            .deliverables
            .values()
            .filter(|deliverable| deliverable.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Delete a deliverable and its tasks. Returns `true` if it existed.
    pub async fn delete(db: &Db, id: DbId) -> bool {
        let mut tables = db.write().await;
        if !tables.deliverables.remove(id) {
            return false;
        }
        let task_ids: Vec<DbId> = tables
            .tasks
            .values()
            .filter(|task| task.deliverable_id == id)
            .map(|task| task.id)
            .collect();
        for task_id in task_ids {
            tables.tasks.remove(task_id);
        }
        true
    }
}
