//! Credential service
//!
//! Signup and login against the user table. Passwords arrive as
//! [`SecureString`] and only their Argon2id hash is ever written.

use tracing::{info, warn};

use crate::crypto::{hash_password_with, verify_password, PasswordHashParams, SecureString};
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::User;
use crate::storage::Storage;

/// Service for user signup and login
pub struct CredentialService<'a> {
    storage: &'a Storage,
    params: PasswordHashParams,
}

impl<'a> CredentialService<'a> {
    /// Create a new credential service with default hashing cost
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_params(storage, PasswordHashParams::default())
    }

    /// Create a credential service with explicit hashing cost
    pub fn with_params(storage: &'a Storage, params: PasswordHashParams) -> Self {
        Self { storage, params }
    }

    /// Register a new user
    ///
    /// Fails when the username (trimmed) or the password is empty, or when
    /// the username is already taken.
    pub fn create(&self, username: &str, password: &SecureString) -> FinTrackResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(FinTrackError::Validation("Username cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(FinTrackError::Validation("Password cannot be empty".into()));
        }

        if self.storage.users.exists(username)? {
            warn!(username, "signup rejected: username taken");
            return Err(FinTrackError::duplicate_user(username));
        }

        let hash = hash_password_with(password.as_str(), &self.params)?;
        let user = User::new(username, hash);
        self.storage.users.insert(user.clone())?;

        info!(username, "user created");
        Ok(user)
    }

    /// Check a username/password pair
    ///
    /// Unknown users and wrong passwords both yield `false`.
    pub fn verify(&self, username: &str, password: &SecureString) -> FinTrackResult<bool> {
        let verified = match self.storage.users.get(username.trim())? {
            Some(user) => verify_password(password.as_str(), &user.password_hash),
            None => false,
        };
        Ok(verified)
    }

    /// Verify credentials and return the user, or an authentication error
    pub fn login(&self, username: &str, password: &SecureString) -> FinTrackResult<User> {
        let username = username.trim();
        match self.storage.users.get(username)? {
            Some(user) if verify_password(password.as_str(), &user.password_hash) => {
                info!(username, "login succeeded");
                Ok(user)
            }
            _ => {
                warn!(username, "login failed");
                Err(FinTrackError::Authentication("Invalid credentials".into()))
            }
        }
    }
}
