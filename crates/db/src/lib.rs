//! In-memory store and repositories for DeadlineDash entities.
//!
//! The store is process-memory only by design; the repository layer is the
//! seam where a real database could later be swapped in without touching
//! callers.

pub mod models;
pub mod repositories;
mod store;

pub use store::Db;
