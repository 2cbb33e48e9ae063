//! Entry CLI commands
//!
//! Add, look up and list per-site passwords.

use std::path::Path;

use crate::crypto::SecretKey;
use crate::error::{VaultError, VaultResult};
use crate::storage::{CredentialStore, KeyManager};

use super::CliContext;

/// Open the password file for writing, starting a new one if it doesn't exist
fn open_for_append<'k>(key: &'k SecretKey, store_file: &Path) -> VaultResult<CredentialStore<'k>> {
    let mut store = CredentialStore::with_key(key);
    if store_file.exists() {
        store.load_file(store_file)?;
    } else {
        store.create_file(store_file, None)?;
    }
    Ok(store)
}

/// Handle `add`
pub fn handle_add(ctx: &CliContext, site: &str, password: Option<String>) -> VaultResult<()> {
    let mut keys = KeyManager::new();
    let key = keys.load_key(ctx.key_file())?;
    let mut store = open_for_append(key, &ctx.store_file())?;

    let password = match password {
        Some(password) => password,
        None => prompt_password(site)?,
    };

    store.add_entry(site, &password)?;
    println!("Password for {} added.", site);
    Ok(())
}

/// Handle `get`
pub fn handle_get(ctx: &CliContext, site: &str) -> VaultResult<()> {
    let mut keys = KeyManager::new();
    let key = keys.load_key(ctx.key_file())?;

    let mut store = CredentialStore::with_key(key);
    store.load_file(ctx.store_file())?;

    println!("Password for {} is: {}", site, store.get_entry_or_message(site));
    Ok(())
}

/// Handle `list`
pub fn handle_list(ctx: &CliContext) -> VaultResult<()> {
    let mut keys = KeyManager::new();
    let key = keys.load_key(ctx.key_file())?;

    let mut store = CredentialStore::with_key(key);
    store.load_file(ctx.store_file())?;

    if store.is_empty() {
        println!("No passwords stored.");
        return Ok(());
    }

    for site in store.sites() {
        println!("{}", site);
    }
    Ok(())
}

fn prompt_password(site: &str) -> VaultResult<String> {
    rpassword::prompt_password(format!("Password for {}: ", site))
        .map_err(|e| VaultError::Io(format!("Failed to read password: {}", e)))
}
