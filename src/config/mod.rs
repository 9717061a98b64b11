//! Configuration module for the roster
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RosterPaths;
pub use settings::{ListStyle, Settings};
