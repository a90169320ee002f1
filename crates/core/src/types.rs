/// All entity ids are assigned by the store's monotonically incrementing
/// per-entity counters, starting at 1.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
