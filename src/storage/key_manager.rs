//! Key lifecycle
//!
//! The KeyManager owns the one active key. A CredentialStore borrows it for
//! every encrypt and decrypt call.

use std::path::Path;

use tracing::debug;

use crate::crypto::SecretKey;
use crate::error::VaultResult;

use super::file_io;

/// Creates, persists and loads the active encryption key
#[derive(Debug, Default)]
pub struct KeyManager {
    active: Option<SecretKey>,
}

impl KeyManager {
    /// Create a KeyManager with no active key
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new key, write it to `path` and make it the active key
    ///
    /// An existing file at `path` is overwritten. If the write fails the
    /// previously active key (if any) stays active.
    pub fn create_key<P: AsRef<Path>>(&mut self, path: P) -> VaultResult<&SecretKey> {
        let path = path.as_ref();
        let key = SecretKey::generate();
        file_io::write_key_file(path, key.as_bytes())?;

        debug!(path = %path.display(), "created key");
        Ok(self.active.insert(key))
    }

    /// Read the key stored at `path` and make it the active key
    ///
    /// The bytes are taken as-is. A malformed key only shows up once it is
    /// used to encrypt or decrypt.
    pub fn load_key<P: AsRef<Path>>(&mut self, path: P) -> VaultResult<&SecretKey> {
        let path = path.as_ref();
        let bytes = file_io::read_key_file(path)?;

        debug!(path = %path.display(), "loaded key");
        Ok(self.active.insert(SecretKey::from_bytes(bytes)))
    }

    /// The active key, if one has been created or loaded
    pub fn key(&self) -> Option<&SecretKey> {
        self.active.as_ref()
    }

    /// Whether a key has been created or loaded
    pub fn has_key(&self) -> bool {
        self.active.is_some()
    }
}
