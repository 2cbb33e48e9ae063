//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the key manager and credential store.

pub mod entry;
pub mod key;
pub mod store;

pub use entry::{handle_add, handle_get, handle_list};
pub use key::{handle_key_command, KeyCommands};
pub use store::{handle_store_command, StoreCommands};

use std::path::{Path, PathBuf};

use crate::config::{Settings, VaultPaths};
use crate::error::VaultResult;

/// Paths, settings and command-line overrides shared by every handler
#[derive(Debug, Clone)]
pub struct CliContext {
    pub paths: VaultPaths,
    pub settings: Settings,
    key_override: Option<PathBuf>,
    store_override: Option<PathBuf>,
}

impl CliContext {
    pub fn new(
        paths: VaultPaths,
        settings: Settings,
        key_override: Option<PathBuf>,
        store_override: Option<PathBuf>,
    ) -> Self {
        Self {
            paths,
            settings,
            key_override,
            store_override,
        }
    }

    /// Key file for this invocation: `--key`, then settings, then the default
    pub fn key_file(&self) -> PathBuf {
        self.key_override
            .clone()
            .unwrap_or_else(|| self.settings.resolve_key_file(&self.paths))
    }

    /// Password file for this invocation: `--store`, then settings, then the default
    pub fn store_file(&self) -> PathBuf {
        self.store_override
            .clone()
            .unwrap_or_else(|| self.settings.resolve_store_file(&self.paths))
    }

    /// Make `path` the key file for later invocations
    pub fn remember_key_file(&mut self, path: &Path) -> VaultResult<()> {
        self.settings.key_file = Some(absolutize(path)?);
        self.settings.save(&self.paths)
    }

    /// Make `path` the password file for later invocations
    pub fn remember_store_file(&mut self, path: &Path) -> VaultResult<()> {
        self.settings.store_file = Some(absolutize(path)?);
        self.settings.save(&self.paths)
    }
}

fn absolutize(path: &Path) -> VaultResult<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
