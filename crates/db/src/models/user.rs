//! User entity model.
//!
//! Users exist only as nominal project owners; the password is stored as an
//! opaque string and authentication is out of scope.

use deadlinedash_core::types::DbId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password: String,
}
