//! passvault - Local encrypted per-site password store
//!
//! Keeps one password per site in a plain text file where every line is
//! `<site>:<token>` and the token is the AES-256-GCM encryption of the
//! password under a single random key.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: Key material and token encryption
//! - `storage`: Key lifecycle and the encrypted password file
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `cli`: Command handlers for the `passvault` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use passvault::storage::{CredentialStore, KeyManager};
//!
//! # fn main() -> passvault::VaultResult<()> {
//! let mut keys = KeyManager::new();
//! let key = keys.create_key("k1.key")?;
//!
//! let mut store = CredentialStore::with_key(key);
//! store.create_file("s1.txt", None)?;
//! store.add_entry("example.com", "p@ss1")?;
//! assert_eq!(store.get_entry("example.com"), Some("p@ss1"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod storage;

pub use error::{VaultError, VaultResult};
