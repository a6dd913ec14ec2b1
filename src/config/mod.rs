//! Configuration module for FinFlow
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinflowPaths;
pub use settings::Settings;
