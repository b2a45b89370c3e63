//! Password hashing using Argon2id
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`) that carry their
//! own salt and cost parameters, so verification needs nothing but the
//! stored string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};

use crate::error::{FinTrackError, FinTrackResult};

/// Cost parameters for new password hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHashParams {
    /// Memory cost in KiB (default: 19456 = 19 MiB)
    pub memory_cost: u32,
    /// Time cost (iterations, default: 2)
    pub time_cost: u32,
    /// Parallelism degree (default: 1)
    pub parallelism: u32,
}

impl Default for PasswordHashParams {
    fn default() -> Self {
        Self {
            memory_cost: Params::DEFAULT_M_COST,
            time_cost: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordHashParams {
    fn hasher(&self) -> FinTrackResult<Argon2<'static>> {
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| FinTrackError::Config(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }
}

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> FinTrackResult<String> {
    hash_password_with(password, &PasswordHashParams::default())
}

/// Hash a password with explicit cost parameters
pub fn hash_password_with(password: &str, params: &PasswordHashParams) -> FinTrackResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = params
        .hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| FinTrackError::Authentication(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC string
///
/// A malformed stored hash never verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    // Cost parameters come from the PHC string, not from the hasher.
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
