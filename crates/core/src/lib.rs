//! DeadlineDash domain core: rubric parsing, task template expansion,
//! timeline distribution, and progress aggregation.
//!
//! This crate has zero internal deps so it can be used by the API layer
//! and any future CLI tooling.

pub mod error;
pub mod progress;
pub mod rubric;
pub mod template;
pub mod timeline;
pub mod types;
