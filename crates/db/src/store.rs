//! Process-memory keyed store behind a single async RwLock.

use std::collections::BTreeMap;
use std::sync::Arc;

use deadlinedash_core::types::DbId;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::availability::Availability;
use crate::models::deliverable::Deliverable;
use crate::models::project::Project;
use crate::models::task::Task;
use crate::models::user::User;

/// One entity table: rows keyed by id plus the next-id counter.
///
/// `BTreeMap` keeps iteration in id order, which doubles as creation order
/// because ids are handed out monotonically.
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: BTreeMap<DbId, T>,
    next_id: DbId,
}

impl<T: Clone> Table<T> {
    /// Insert a new row built from the freshly assigned id.
    pub fn insert(&mut self, build: impl FnOnce(DbId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: DbId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: DbId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    /// Remove a row by id. Returns `true` if a row was removed.
    pub fn remove(&mut self, id: DbId) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.values_mut()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub users: Table<User>,
    pub projects: Table<Project>,
    pub deliverables: Table<Deliverable>,
    pub tasks: Table<Task>,
    pub availability: Table<Availability>,
}

/// Cloneable handle to the in-memory store, shared through axum state.
///
/// Every mutation holds the write lock for its whole read-modify-write, so
/// concurrent toggles of the same task cannot lose updates.
#[derive(Clone)]
pub struct Db {
    inner: Arc<RwLock<Tables>>,
}

impl Db {
    /// Create an empty store seeded with the demo user.
    pub fn new() -> Self {
        let mut tables = Tables::default();
        let demo = tables.users.insert(|id| User {
            id,
            username: "demo".to_string(),
            password: "password".to_string(),
        });
        tracing::debug!(user_id = demo.id, "Seeded demo user");
        Self {
            inner: Arc::new(RwLock::new(tables)),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().await
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}
