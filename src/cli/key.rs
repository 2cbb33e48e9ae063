//! Key CLI commands
//!
//! Create a new key file or check that an existing one can be loaded.

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{VaultError, VaultResult};
use crate::storage::KeyManager;

use super::CliContext;

/// Key subcommands
#[derive(Subcommand)]
pub enum KeyCommands {
    /// Generate a new key and save it
    New {
        /// Where to write the key (defaults to the configured key file)
        path: Option<PathBuf>,

        /// Replace an existing key file
        #[arg(short, long)]
        force: bool,
    },

    /// Load an existing key and make it the one used by later commands
    Load {
        /// Key file to load (defaults to the configured key file)
        path: Option<PathBuf>,
    },
}

/// Handle a key command
pub fn handle_key_command(ctx: &mut CliContext, cmd: KeyCommands) -> VaultResult<()> {
    match cmd {
        KeyCommands::New { path, force } => {
            let target = path.clone().unwrap_or_else(|| ctx.key_file());

            if target.exists() && !force {
                return Err(VaultError::Validation(format!(
                    "Key file already exists: {} (use --force to replace it; \
                     passwords saved under the old key will no longer decrypt)",
                    target.display()
                )));
            }

            KeyManager::new().create_key(&target)?;
            if path.is_some() {
                ctx.remember_key_file(&target)?;
            }

            println!("Key created and saved to {}.", target.display());
        }
        KeyCommands::Load { path } => {
            let target = path.clone().unwrap_or_else(|| ctx.key_file());

            KeyManager::new().load_key(&target)?;
            if path.is_some() {
                ctx.remember_key_file(&target)?;
            }

            println!("Key loaded.");
        }
    }

    Ok(())
}
