pub mod availability;
pub mod deliverable;
pub mod project;
pub mod rubric;
pub mod task;
pub mod timeline;
