//! Completion roll-ups and due-date grouping for dashboard views.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Per-deliverable task snapshot consumed by the aggregator.
#[derive(Debug, Clone)]
pub struct DeliverableTasks {
    pub deliverable_name: String,
    pub tasks: Vec<TaskStatus>,
}

/// The slice of a task the aggregator cares about.
#[derive(Debug, Clone)]
pub struct TaskStatus {
    pub name: String,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub priority: i32,
}

/// Completion counts for a deliverable or a whole project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Roll up completion counts across deliverables.
///
/// `percentage` is rounded to the nearest integer; zero tasks yield zero
/// percent rather than a division by zero.
pub fn aggregate(deliverables: &[DeliverableTasks]) -> Progress {
    let total: usize = deliverables.iter().map(|d| d.tasks.len()).sum();
    let completed = deliverables
        .iter()
        .flat_map(|d| d.tasks.iter())
        .filter(|t| t.completed)
        .count();

    let percentage = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    };

    Progress {
        completed,
        total,
        percentage,
    }
}

/// One calendar day's worth of tasks, for schedule views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGroup {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_tomorrow: bool,
    pub tasks: Vec<GroupedTask>,
}

/// A task tagged with its parent deliverable's name for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedTask {
    pub name: String,
    pub deliverable_name: String,
    pub completed: bool,
    pub priority: i32,
}

/// Bucket tasks by due date, one group per distinct date in ascending
/// order, each tagged for today/tomorrow display.
pub fn group_by_due_date(deliverables: &[DeliverableTasks], today: NaiveDate) -> Vec<DayGroup> {
    let mut groups: BTreeMap<NaiveDate, Vec<GroupedTask>> = BTreeMap::new();

    for deliverable in deliverables {
        for task in &deliverable.tasks {
            groups.entry(task.due_date).or_default().push(GroupedTask {
                name: task.name.clone(),
                deliverable_name: deliverable.deliverable_name.clone(),
                completed: task.completed,
                priority: task.priority,
            });
        }
    }

    let tomorrow = today + Duration::days(1);
    groups
        .into_iter()
        .map(|(date, tasks)| DayGroup {
            date,
            is_today: date == today,
            is_tomorrow: date == tomorrow,
            tasks,
        })
        .collect()
}
