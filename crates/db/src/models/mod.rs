pub mod availability;
pub mod deliverable;
pub mod details;
pub mod project;
pub mod task;
pub mod user;
