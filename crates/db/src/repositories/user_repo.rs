//! Repository for users.

use crate::models::user::User;
use crate::store::Db;

/// Lookup operations for the seeded user table.
pub struct UserRepo;

impl UserRepo {
    pub async fn find_by_username(db: &Db, username: &str) -> Option<User> {
        db.read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }
}
