//! Configuration module for the budget tracker
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings loading and saving

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
