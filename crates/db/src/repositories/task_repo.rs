//! Repository for tasks.

use chrono::Utc;
use deadlinedash_core::types::DbId;

use crate::models::task::{CreateTask, Task};
use crate::store::Db;

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    pub async fn create(db: &Db, input: &CreateTask) -> Task {
        db.write().await.tasks.insert(|id| Task {
            id,
            deliverable_id: input.deliverable_id,
            name: input.name.clone(),
            description: input.description.clone(),
            due_date: input.due_date,
            completed: false,
            priority: input.priority,
            estimated_minutes: input.estimated_minutes,
            created_at: Utc::now(),
        })
    }

    pub async fn find_by_id(db: &Db, id: DbId) -> Option<Task> {
        db.read().await.tasks.get(id).cloned()
    }

    pub async fn list_by_deliverable(db: &Db, deliverable_id: DbId) -> Vec<Task> {
        db.read()
            .await
            .tasks
            .values()
            .filter(|task| task.deliverable_id == deliverable_id)
            .cloned()
            .collect()
    }

    pub async fn list_by_project(db: &Db, project_id: DbId) -> Vec<Task> {
        let tables = db.read().await;
        let deliverable_ids: Vec<DbId> = tables
            .deliverables
            .values()
            .filter(|deliverable| deliverable.project_id == project_id)
            .map(|deliverable| deliverable.id)
            .collect();
        tables
            .tasks
            .values()
            .filter(|task| deliverable_ids.contains(&task.deliverable_id))
            .cloned()
            .collect()
    }

    /// Flip a task's completed flag.
    ///
    /// When the flip leaves every task under the parent deliverable
    /// completed, the deliverable is marked completed as well.
    /// Un-completing a task never clears the deliverable flag.
    pub async fn toggle_completion(db: &Db, id: DbId) -> Option<Task> {
        let mut tables = db.write().await;
        let task = tables.tasks.get_mut(id)?;
        task.completed = !task.completed;
        let task = task.clone();

        if task.completed {
            let all_done = tables
                .tasks
                .values()
                .filter(|sibling| sibling.deliverable_id == task.deliverable_id)
                .all(|sibling| sibling.completed);
            if all_done {
                if let Some(deliverable) = tables.deliverables.get_mut(task.deliverable_id) {
                    deliverable.completed = true;
                }
            }
        }

        Some(task)
    }

    /// Delete a task by id. Returns `true` if a row was removed.
    pub async fn delete(db: &Db, id: DbId) -> bool {
        db.write().await.tasks.remove(id)
    }
}
