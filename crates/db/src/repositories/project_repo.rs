//! Repository for projects, including the composite read models used by
//! the details and timeline endpoints.

use chrono::Utc;
use deadlinedash_core::types::DbId;

use crate::models::availability::Availability;
use crate::models::details::{DeliverableWithTasks, ProjectWithDeliverables, ProjectWithDetails};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::store::Db;

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(db: &Db, input: &CreateProject) -> Project {
        let now = Utc::now();
        db.write().await.projects.insert(|id| Project {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            user_id: input.user_id,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn find_by_id(db: &Db, id: DbId) -> Option<Project> {
        db.read().await.projects.get(id).cloned()
    }

    /// List all projects owned by a user, in creation order.
    pub async fn list_by_user(db: &Db, user_id: DbId) -> Vec<Project> {
        db.read()
            .await
            .projects
            .values()
            .filter(|project| project.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Apply the non-`None` fields of `input`, bumping `updated_at`.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn update(db: &Db, id: DbId, input: &UpdateProject) -> Option<Project> {
        let mut tables = db.write().await;
        let project = tables.projects.get_mut(id)?;
        if let Some(name) = &input.name {
            project.name = name.clone();
        }
        if let Some(description) = &input.description {
            project.description = Some(description.clone());
        }
        if let Some(due_date) = input.due_date {
            project.due_date = due_date;
        }
        project.updated_at = Utc::now();
        Some(project.clone())
    }

    /// Delete a project, cascading to its deliverables, their tasks, and
    /// the availability record. Returns `true` if the project existed.
    pub async fn delete(db: &Db, id: DbId) -> bool {
        let mut tables = db.write().await;
        if !tables.projects.remove(id) {
            return false;
        }

        let deliverable_ids: Vec<DbId> = tables
            .deliverables
            .values()
            .filter(|deliverable| deliverable.project_id == id)
            .map(|deliverable| deliverable.id)
            .collect();
        for deliverable_id in deliverable_ids {
            tables.deliverables.remove(deliverable_id);
            let task_ids: Vec<DbId> = tables
                .tasks
                .values()
                .filter(|task| task.deliverable_id == deliverable_id)
                .map(|task| task.id)
                .collect();
            for task_id in task_ids {
                tables.tasks.remove(task_id);
            }
        }

        let availability_id = tables
            .availability
            .values()
            .find(|availability| availability.project_id == id)
            .map(|availability| availability.id);
        if let Some(availability_id) = availability_id {
            tables.availability.remove(availability_id);
        }

        true
    }

    pub async fn with_deliverables(db: &Db, id: DbId) -> Option<ProjectWithDeliverables> {
        let tables = db.read().await;
        let project = tables.projects.get(id)?.clone();
        let deliverables = tables
            .deliverables
            .values()
            .filter(|deliverable| deliverable.project_id == id)
            .cloned()
            .collect();
        Some(ProjectWithDeliverables {
            project,
            deliverables,
        })
    }

    /// Full nested read model: deliverables with tasks plus the stored
    /// availability or the synthesized default.
    pub async fn with_details(db: &Db, id: DbId) -> Option<ProjectWithDetails> {
        let tables = db.read().await;
        let project = tables.projects.get(id)?.clone();

        let deliverables = tables
            .deliverables
            .values()
            .filter(|deliverable| deliverable.project_id == id)
            .map(|deliverable| DeliverableWithTasks {
                deliverable: deliverable.clone(),
                tasks: tables
                    .tasks
                    .values()
                    .filter(|task| task.deliverable_id == deliverable.id)
                    .cloned()
                    .collect(),
            })
            .collect();

        let availability = tables
            .availability
            .values()
            .find(|availability| availability.project_id == id)
            .cloned()
            .unwrap_or_else(|| Availability::default_for_project(id));

        Some(ProjectWithDetails {
            project,
            deliverables,
            availability,
        })
    }
}
