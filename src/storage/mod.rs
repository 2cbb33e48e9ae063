//! Storage layer for passvault
//!
//! Holds the key lifecycle and the encrypted password file, plus the
//! line format and file helpers they share.

pub mod credential_store;
pub mod file_io;
pub mod key_manager;
pub mod record;

pub use credential_store::{CredentialStore, LoadReport, NOT_FOUND_MESSAGE};
pub use key_manager::KeyManager;
pub use record::Record;
