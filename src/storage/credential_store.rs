//! Encrypted credential store
//!
//! The password file is append-only: one `<site>:<token>` record per line.
//! Loading decrypts every record into memory; a record that cannot be decoded
//! or decrypted is skipped without stopping the load. Adding an entry
//! encrypts it, appends it to the file and then records it in memory.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::crypto::{decrypt_string, encrypt_string, SecretKey};
use crate::error::{VaultError, VaultResult};

use super::file_io;
use super::record::{self, Record};

/// Message shown in place of a password when a site has no entry
pub const NOT_FOUND_MESSAGE: &str = "Password not found.";

/// Outcome of loading a password file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records decrypted into memory
    pub loaded: usize,
    /// Non-empty lines that could not be decoded or decrypted
    pub skipped: usize,
}

/// Per-site passwords backed by an encrypted, append-only file
#[derive(Default)]
pub struct CredentialStore<'k> {
    file_path: Option<PathBuf>,
    entries: HashMap<String, Zeroizing<String>>,
    key: Option<&'k SecretKey>,
}

impl<'k> CredentialStore<'k> {
    /// Create a store with no key and no backing file
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that encrypts with `key`
    pub fn with_key(key: &'k SecretKey) -> Self {
        Self {
            key: Some(key),
            ..Self::default()
        }
    }

    /// Use `key` for all further encryption and decryption
    ///
    /// Entries already in memory are kept; call [`Self::load_file`] again to
    /// view the file through the new key.
    pub fn set_key(&mut self, key: &'k SecretKey) {
        self.key = Some(key);
    }

    /// Whether a key is available for encryption
    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    /// The file new entries are appended to, if any
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Point the store at a new password file, optionally seeding it
    ///
    /// Entries already in memory are kept. Nothing is written until the
    /// first entry is added, so the file does not need to exist. Seed entries
    /// go through [`Self::add_entry`] one by one; the first failure is
    /// returned and the remaining seeds are not added.
    pub fn create_file<P: Into<PathBuf>>(
        &mut self,
        path: P,
        initial_entries: Option<&HashMap<String, String>>,
    ) -> VaultResult<()> {
        let path = path.into();
        debug!(path = %path.display(), "created password file");

        self.file_path = Some(path);

        if let Some(seed) = initial_entries {
            for (site, password) in seed {
                self.add_entry(site, password)?;
            }
        }

        Ok(())
    }

    /// Load and decrypt an existing password file
    ///
    /// Records that are malformed, not UTF-8, or fail to decrypt under the
    /// current key are skipped. A read error aborts the load and leaves the
    /// store as it was.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> VaultResult<LoadReport> {
        let key = self.key.ok_or(VaultError::NoKeyLoaded)?;
        let path = path.as_ref();

        if !path.exists() {
            return Err(VaultError::store_file_not_found(path.display().to_string()));
        }

        let mut entries = HashMap::new();
        let mut report = LoadReport::default();

        for line in file_io::read_byte_lines(path)? {
            let line = line.map_err(|e| {
                VaultError::Io(format!("Failed to read {}: {}", path.display(), e))
            })?;

            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            match decode_record(&line, key) {
                Ok((site, password)) => {
                    entries.insert(site, password);
                    report.loaded += 1;
                }
                Err(err) => {
                    trace!(error = %err, "skipping unreadable record");
                    report.skipped += 1;
                }
            }
        }

        debug!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "loaded password file"
        );

        self.file_path = Some(path.to_path_buf());
        self.entries = entries;
        Ok(report)
    }

    /// Store a password for `site`
    ///
    /// With a backing file the encrypted record is appended and synced before
    /// the in-memory entry changes, so a failed write leaves the store as it
    /// was. Without one the entry lives in memory only.
    pub fn add_entry(&mut self, site: &str, password: &str) -> VaultResult<()> {
        let key = self.key.ok_or(VaultError::NoKeyLoaded)?;
        record::validate_site(site)?;

        if let Some(path) = &self.file_path {
            let token = encrypt_string(password, key)?;
            file_io::append_line(path, &Record::new(site, &token).to_line())?;
            debug!(path = %path.display(), "appended entry");
        }

        self.entries
            .insert(site.to_string(), Zeroizing::new(password.to_string()));
        Ok(())
    }

    /// The password stored for `site`
    pub fn get_entry(&self, site: &str) -> Option<&str> {
        self.entries.get(site).map(|password| password.as_str())
    }

    /// The password for `site`, or [`NOT_FOUND_MESSAGE`]
    pub fn get_entry_or_message(&self, site: &str) -> &str {
        self.get_entry(site).unwrap_or(NOT_FOUND_MESSAGE)
    }

    /// Site names currently in memory, sorted
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        sites.sort_unstable();
        sites
    }

    /// Number of sites in memory
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sites are in memory
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for CredentialStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("file_path", &self.file_path)
            .field("entries", &self.entries.len())
            .field("has_key", &self.has_key())
            .finish()
    }
}

fn decode_record(line: &[u8], key: &SecretKey) -> VaultResult<(String, Zeroizing<String>)> {
    let text = std::str::from_utf8(line)
        .map_err(|e| VaultError::Validation(format!("Record is not UTF-8: {}", e)))?;
    let record = Record::parse(text)?;
    let password = Zeroizing::new(decrypt_string(record.token, key)?);
    Ok((record.site.to_string(), password))
}
