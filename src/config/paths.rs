//! Path management for the roster
//!
//! Only user preferences live on disk; records are never persisted.
//!
//! ## Path Resolution Order
//!
//! 1. `ROSTER_CLI_CONFIG_DIR` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/roster-cli` (if set)
//! 3. The platform config directory (`~/.config/roster-cli`, `%APPDATA%\roster-cli`, ...)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::RosterError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "ROSTER_CLI_CONFIG_DIR";

const APP_DIR_NAME: &str = "roster-cli";

/// Manages all paths used by the roster
#[derive(Debug, Clone)]
pub struct RosterPaths {
    base_dir: PathBuf,
}

impl RosterPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, RosterError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join(APP_DIR_NAME)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RosterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), RosterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RosterError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, RosterError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| RosterError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
