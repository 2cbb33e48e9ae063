//! Password file CLI commands
//!
//! Create a new password file (optionally seeded) or load an existing one.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::VaultResult;
use crate::storage::{CredentialStore, KeyManager};

use super::CliContext;

/// Password file subcommands
#[derive(Subcommand)]
pub enum StoreCommands {
    /// Start a new password file
    New {
        /// Where the password file lives (defaults to the configured file)
        path: Option<PathBuf>,

        /// Initial entry as SITE=PASSWORD (repeatable)
        #[arg(long = "seed", value_name = "SITE=PASSWORD", value_parser = parse_seed)]
        seeds: Vec<(String, String)>,
    },

    /// Load a password file and report how many entries decrypted
    Load {
        /// Password file to load (defaults to the configured file)
        path: Option<PathBuf>,
    },
}

/// Handle a password file command
pub fn handle_store_command(ctx: &mut CliContext, cmd: StoreCommands) -> VaultResult<()> {
    match cmd {
        StoreCommands::New { path, seeds } => {
            let target = path.clone().unwrap_or_else(|| ctx.store_file());
            let mut keys = KeyManager::new();

            let mut store = if seeds.is_empty() {
                CredentialStore::new()
            } else {
                CredentialStore::with_key(keys.load_key(ctx.key_file())?)
            };

            // Later seeds for the same site win
            let seed: HashMap<String, String> = seeds.into_iter().collect();
            store.create_file(&target, (!seed.is_empty()).then_some(&seed))?;

            if path.is_some() {
                ctx.remember_store_file(&target)?;
            }

            println!("Password file created.");
            if !seed.is_empty() {
                println!("Added {} initial entries.", store.len());
            }
        }
        StoreCommands::Load { path } => {
            let target = path.clone().unwrap_or_else(|| ctx.store_file());
            let mut keys = KeyManager::new();
            let key = keys.load_key(ctx.key_file())?;

            let mut store = CredentialStore::with_key(key);
            let report = store.load_file(&target)?;

            if path.is_some() {
                ctx.remember_store_file(&target)?;
            }

            println!("Password file loaded.");
            println!("{} entries decrypted.", store.len());
            if report.skipped > 0 {
                println!("{} records could not be read with this key.", report.skipped);
            }
        }
    }

    Ok(())
}

fn parse_seed(s: &str) -> Result<(String, String), String> {
    let (site, password) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SITE=PASSWORD, got '{}'", s))?;
    Ok((site.to_string(), password.to_string()))
}
