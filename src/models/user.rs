//! User model

use serde::{Deserialize, Serialize};

/// A registered user and their password hash
///
/// Users are created at signup and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login name
    pub username: String,

    /// Argon2 PHC string; the plaintext password is never stored
    pub password_hash: String,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}
