//! Calendar distribution of generated tasks across available days.
//!
//! One scheduling policy exists: proportional day-buckets walked forward
//! from tomorrow through the due date, with a wrap-around second pass for
//! the remainder left by integer rounding.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::CoreError;
use crate::types::DbId;

/// Weekly availability mask, Monday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekMask([bool; 7]);

impl WeekMask {
    /// Monday through Friday available, weekend off.
    pub const WEEKDAYS: WeekMask = WeekMask([true, true, true, true, true, false, false]);

    pub fn new(days: [bool; 7]) -> Self {
        Self(days)
    }

    pub fn is_available(&self, weekday: Weekday) -> bool {
        self.0[weekday.num_days_from_monday() as usize]
    }

    pub fn available_days_per_week(&self) -> usize {
        self.0.iter().filter(|available| **available).count()
    }

    /// Replace an all-false mask with the Mon-Fri fallback so distribution
    /// can always make progress.
    pub fn or_weekday_fallback(self) -> Self {
        if self.available_days_per_week() == 0 {
            Self::WEEKDAYS
        } else {
            self
        }
    }
}

/// A generated task awaiting a concrete due date.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub deliverable_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub priority: i32,
    pub estimated_minutes: i32,
}

/// A task with its assigned calendar day.
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    pub deliverable_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub priority: i32,
    pub estimated_minutes: i32,
    pub due_date: NaiveDate,
}

/// Assign every task a due date between tomorrow and `due_date` inclusive.
///
/// Tasks are stable-sorted by descending priority so higher-priority work
/// lands on earlier available days. Each available day in the window takes
/// a proportional share of the tasks; rounding leftovers are cycled over
/// the available days again, one per day per cycle. No task is ever
/// dropped: a window with zero available days clamps the remainder onto
/// the due date itself.
pub fn distribute(
    mut tasks: Vec<TaskDraft>,
    today: NaiveDate,
    due_date: NaiveDate,
    mask: WeekMask,
) -> Result<Vec<ScheduledTask>, CoreError> {
    if due_date <= today {
        return Err(CoreError::InvalidSchedule(
            "Project due date must be in the future".to_string(),
        ));
    }
    if tasks.is_empty() {
        return Ok(Vec::new());
    }

    let mask = mask.or_weekday_fallback();
    let days_until_due = (due_date - today).num_days().max(1);

    // Stable sort keeps generation order within each priority band.
    tasks.sort_by(|a, b| b.priority.cmp(&a.priority));

    // Today is already underway and is never assigned work.
    let available: Vec<NaiveDate> = (1..=days_until_due)
        .map(|offset| today + Duration::days(offset))
        .filter(|day| mask.is_available(day.weekday()))
        .collect();

    let total = tasks.len();
    let per_week = mask.available_days_per_week();
    let quota = ((total as f64) / (days_until_due as f64 * (per_week as f64 / 7.0))).ceil() as usize;

    let mut scheduled = Vec::with_capacity(total);
    let mut drafts = tasks.into_iter();

    // First pass: proportional buckets over the available days.
    for day in &available {
        for _ in 0..quota {
            match drafts.next() {
                Some(draft) => scheduled.push(schedule(draft, *day)),
                None => break,
            }
        }
    }

    // Second pass: cycle the available days for the rounding remainder.
    if available.is_empty() {
        for draft in drafts {
            scheduled.push(schedule(draft, due_date));
        }
    } else {
        for (i, draft) in drafts.enumerate() {
            scheduled.push(schedule(draft, available[i % available.len()]));
        }
    }

    Ok(scheduled)
}

fn schedule(draft: TaskDraft, due_date: NaiveDate) -> ScheduledTask {
    ScheduledTask {
        deliverable_id: draft.deliverable_id,
        name: draft.name,
        description: draft.description,
        priority: draft.priority,
        estimated_minutes: draft.estimated_minutes,
        due_date,
    }
}
