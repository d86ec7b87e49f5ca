//! Configuration module for family-expense
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Report preferences

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
