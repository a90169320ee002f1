//! Composite read models for nested API responses.

use serde::Serialize;

use crate::models::availability::Availability;
use crate::models::deliverable::Deliverable;
use crate::models::project::Project;
use crate::models::task::Task;

/// A deliverable with its tasks attached.
#[derive(Debug, Clone, Serialize)]
pub struct DeliverableWithTasks {
    #[serde(flatten)]
    pub deliverable: Deliverable,
    pub tasks: Vec<Task>,
}

/// A project with its deliverables attached.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithDeliverables {
    #[serde(flatten)]
    pub project: Project,
    pub deliverables: Vec<Deliverable>,
}

/// A project with deliverables, their tasks, and the availability record
/// (or the synthesized default when none is stored).
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithDetails {
    #[serde(flatten)]
    pub project: Project,
    pub deliverables: Vec<DeliverableWithTasks>,
    pub availability: Availability,
}
