mod availability_repo;
mod deliverable_repo;
mod project_repo;
mod task_repo;
mod user_repo;

pub use availability_repo::AvailabilityRepo;
pub use deliverable_repo::DeliverableRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
