//! Task template expansion: turns one deliverable into an ordered list of
//! templated subtasks with priorities and duration estimates.

use rand::Rng;

// ---------------------------------------------------------------------------
// Priority constants
// ---------------------------------------------------------------------------

/// Priority value for low-priority tasks (documentation, testing).
pub const PRIORITY_LOW: i32 = 1;

/// Priority value for medium-priority tasks. Default.
pub const PRIORITY_MEDIUM: i32 = 2;

/// Priority value for high-priority tasks (implementation, first task).
pub const PRIORITY_HIGH: i32 = 3;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum number of tasks generated per deliverable. Base tasks win over
/// category extras when truncating.
pub const MAX_TASKS_PER_DELIVERABLE: usize = 7;

/// Number of base tasks every deliverable receives.
pub const BASE_TASK_COUNT: usize = 5;

/// Floor for any duration estimate, in minutes.
pub const MIN_ESTIMATED_MINUTES: i32 = 15;

/// Half-width of the random jitter applied to duration estimates.
const JITTER_MINUTES: i32 = 15;

/// Deliverable names longer than this are shortened for task names.
const SHORT_NAME_MAX_CHARS: usize = 40;

/// Word count kept when shortening a long deliverable name.
const SHORT_NAME_WORDS: usize = 5;

// ---------------------------------------------------------------------------
// Category keyword sets
// ---------------------------------------------------------------------------

const UI_KEYWORDS: &[&str] = &["ui", "interface", "design", "frontend", "layout", "component"];
const BACKEND_KEYWORDS: &[&str] = &["api", "server", "database", "backend", "storage", "data"];
const ALGORITHM_KEYWORDS: &[&str] = &["algorithm", "calculate", "compute", "analysis", "logic"];
const RESEARCH_KEYWORDS: &[&str] = &["research", "analyze", "investigate", "study", "explore"];

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

/// A generated subtask for a deliverable, before scheduling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTemplate {
    pub name: String,
    pub priority: i32,
    pub estimated_minutes: i32,
}

/// Expand a deliverable into 5-7 ordered subtasks.
///
/// Every deliverable gets the base research/design/implement/test/document
/// sequence. Category keywords found in the name or description append
/// specialized extras, and the combined list is truncated to
/// [`MAX_TASKS_PER_DELIVERABLE`].
pub fn expand_deliverable(name: &str, description: Option<&str>) -> Vec<TaskTemplate> {
    let short = short_name(name);

    let mut names = vec![
        format!("Research requirements for {short}"),
        format!("Create initial design for {short}"),
        format!("Implement core functionality for {short}"),
        format!("Test and debug {short}"),
        format!("Document {short}"),
    ];

    let mut words: Vec<String> = name
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if let Some(description) = description {
        words.extend(
            description
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string),
        );
    }

    if contains_any(&words, UI_KEYWORDS) {
        names.push(format!("Create wireframes for {short}"));
        names.push(format!("Implement responsive design for {short}"));
        names.push(format!("Add styles and animations to {short}"));
    }
    if contains_any(&words, BACKEND_KEYWORDS) {
        names.push(format!("Design data model for {short}"));
        names.push(format!("Implement API endpoints for {short}"));
        names.push(format!("Add data validation to {short}"));
    }
    if contains_any(&words, ALGORITHM_KEYWORDS) {
        names.push(format!("Research algorithm options for {short}"));
        names.push(format!("Create algorithm pseudocode for {short}"));
        names.push(format!("Optimize algorithm performance for {short}"));
    }
    if contains_any(&words, RESEARCH_KEYWORDS) {
        names.push(format!("Collect research materials for {short}"));
        names.push(format!("Analyze findings for {short}"));
        names.push(format!("Prepare presentation of {short} research"));
    }

    names.truncate(MAX_TASKS_PER_DELIVERABLE);

    names
        .into_iter()
        .enumerate()
        .map(|(position, task_name)| {
            let priority = task_priority(&task_name, position);
            let estimated_minutes = estimate_minutes(&task_name);
            TaskTemplate {
                name: task_name,
                priority,
                estimated_minutes,
            }
        })
        .collect()
}

/// Determine a task's priority from its name and position in the sequence.
///
/// Implementation tasks and the first task are high priority; research,
/// design, and creation are medium; testing and documentation are low.
pub fn task_priority(task_name: &str, position: usize) -> i32 {
    let lower = task_name.to_lowercase();
    if lower.contains("implement") || position == 0 {
        return PRIORITY_HIGH;
    }
    if lower.contains("research") || lower.contains("design") || lower.contains("create") {
        return PRIORITY_MEDIUM;
    }
    if lower.contains("document") || lower.contains("test") {
        return PRIORITY_LOW;
    }
    PRIORITY_MEDIUM
}

/// Estimate a task's duration in minutes: a keyword-based base plus a
/// bounded random jitter, floored at [`MIN_ESTIMATED_MINUTES`].
pub fn estimate_minutes(task_name: &str) -> i32 {
    let lower = task_name.to_lowercase();
    let base = if lower.contains("research") {
        90
    } else if lower.contains("design") {
        75
    } else if lower.contains("test") {
        45
    } else if lower.contains("document") {
        30
    } else if lower.contains("implement") {
        120
    } else {
        60
    };

    let jitter = rand::rng().random_range(-JITTER_MINUTES..JITTER_MINUTES);
    (base + jitter).max(MIN_ESTIMATED_MINUTES)
}

fn contains_any(words: &[String], terms: &[&str]) -> bool {
    terms
        .iter()
        .any(|term| words.iter().any(|word| word.contains(term)))
}

/// Shorten a long deliverable name for readability in generated task names.
fn short_name(name: &str) -> String {
    if name.chars().count() <= SHORT_NAME_MAX_CHARS {
        return name.to_string();
    }
    let words: Vec<&str> = name.split(' ').collect();
    let keep = SHORT_NAME_WORDS.min(words.len());
    format!("{}...", words[..keep].join(" "))
}
