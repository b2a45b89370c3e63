//! Credential handling for FinTrack
//!
//! Passwords are hashed with Argon2id and kept in zeroizing buffers while
//! they are in memory.

pub mod password;
pub mod secure_memory;

pub use password::{hash_password, hash_password_with, verify_password, PasswordHashParams};
pub use secure_memory::SecureString;
