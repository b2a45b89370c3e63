//! Signup and login commands

use tracing::debug;

use crate::error::FinTrackResult;
use crate::services::CredentialService;
use crate::storage::Storage;

use super::session::{authenticate, read_new_password};

/// Create an account
pub fn handle_signup(storage: &Storage, username: &str) -> FinTrackResult<()> {
    let password = read_new_password()?;
    let user = CredentialService::new(storage).create(username, &password)?;
    println!("Account created for '{}'. Please login.", user.username);
    Ok(())
}

/// Check credentials without running a command
pub fn handle_login(storage: &Storage, username: &str) -> FinTrackResult<()> {
    let user = authenticate(storage, username)?;
    debug!(username = %user.username, "credentials checked");
    println!("Welcome {}", user.username);
    Ok(())
}
