//! Rubric analysis: extracts deliverable candidates from free-form
//! assignment rubric text with line-based keyword and pattern heuristics.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;

/// Keywords that mark a line as a deliverable candidate (case-insensitive).
const DELIVERABLE_KEYWORDS: &[&str] = &[
    "deliverable",
    "feature",
    "requirement",
    "task",
    "implement",
    "create",
    "develop",
    "submit",
    "design",
    "write",
    "analyze",
    "prepare",
];

/// Name of the synthetic deliverable emitted when no line qualifies, so
/// downstream expansion always has at least one deliverable to work with.
pub const FALLBACK_DELIVERABLE_NAME: &str = "Complete the main assignment";

/// Point value assigned to the synthetic fallback deliverable.
pub const FALLBACK_DELIVERABLE_POINTS: i32 = 100;

static NUMBERED_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.:]\s*").expect("valid regex"));

static BULLET_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*\u{2022}]+\s*").expect("valid regex"));

static POINTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(?\s*(\d+)\s*(?:points?|pts|marks|%)\s*\)?").expect("valid regex")
});

/// A deliverable candidate extracted from rubric text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliverableDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
}

/// Parse rubric text into an ordered list of deliverable candidates.
///
/// A line qualifies as a deliverable when it starts with a numbered prefix
/// (`1.` / `2:`), starts with a bullet character, or contains one of
/// [`DELIVERABLE_KEYWORDS`]. The prefix and any points fragment
/// (`(20 points)`, `15 pts`, `10%`) are stripped from the retained name.
/// The immediately following line becomes the description unless it is
/// itself a dashed list item.
///
/// Guarantees at least one deliverable for any non-empty input: if nothing
/// qualifies, a single fallback deliverable covering the whole assignment
/// is returned.
pub fn parse_rubric(text: &str) -> Result<Vec<DeliverableDraft>, CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Rubric text must not be empty".to_string(),
        ));
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut deliverables = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !is_deliverable_line(line) {
            continue;
        }

        let points = POINTS_RE
            .captures(line)
            .and_then(|caps| caps[1].parse::<i32>().ok());

        let name = NUMBERED_PREFIX_RE.replace(line, "");
        let name = BULLET_PREFIX_RE.replace(&name, "");
        let name = POINTS_RE.replace(&name, "").trim().to_string();
        if name.is_empty() {
            continue;
        }

        // The next line doubles as a description unless it is an unrelated
        // dashed list item.
        let description = lines.get(i + 1).and_then(|next| {
            if next.starts_with("- ") {
                None
            } else {
                Some((*next).to_string())
            }
        });

        deliverables.push(DeliverableDraft {
            name,
            description,
            points,
        });
    }

    if deliverables.is_empty() {
        deliverables.push(DeliverableDraft {
            name: FALLBACK_DELIVERABLE_NAME.to_string(),
            description: None,
            points: Some(FALLBACK_DELIVERABLE_POINTS),
        });
    }

    Ok(deliverables)
}

fn is_deliverable_line(line: &str) -> bool {
    if NUMBERED_PREFIX_RE.is_match(line) || BULLET_PREFIX_RE.is_match(line) {
        return true;
    }
    let lower = line.to_lowercase();
    DELIVERABLE_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}
