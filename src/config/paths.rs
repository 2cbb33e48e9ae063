//! Path management for passvault
//!
//! ## Path Resolution Order
//!
//! 1. `PASSVAULT_DIR` environment variable (if set)
//! 2. The platform config directory for `passvault`
//!    (`~/.config/passvault` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::VaultError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "PASSVAULT_DIR";

/// Manages all paths used by passvault
#[derive(Debug, Clone)]
pub struct VaultPaths {
    /// Base directory for settings and the default key and password files
    base_dir: PathBuf,
}

impl VaultPaths {
    /// Create a new VaultPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, VaultError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create VaultPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/passvault or `PASSVAULT_DIR`)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Key file used when neither a flag nor the settings name one
    pub fn default_key_file(&self) -> PathBuf {
        self.base_dir.join("vault.key")
    }

    /// Password file used when neither a flag nor the settings name one
    pub fn default_store_file(&self) -> PathBuf {
        self.base_dir.join("passwords.txt")
    }

    /// Create the base directory if it doesn't exist
    pub fn ensure_directories(&self) -> Result<(), VaultError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| VaultError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if passvault has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, VaultError> {
    ProjectDirs::from("", "", "passvault")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| VaultError::Config("Could not determine home directory".into()))
}
