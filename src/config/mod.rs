//! Configuration module for FinTrack
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinTrackPaths;
pub use settings::Settings;
