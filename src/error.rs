//! Custom error types for passvault
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for passvault operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// An operation needed an active key and none has been created or loaded
    #[error("No key loaded: create or load a key first")]
    NoKeyLoaded,

    /// A referenced file does not exist
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The cipher could not be built or could not seal a value
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// A token could not be decoded or failed authentication
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// Input rejected before touching the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl VaultError {
    /// Create a "not found" error for a key file
    pub fn key_file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Key file",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a password store file
    pub fn store_file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Password file",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error means no key was active
    pub fn is_no_key_loaded(&self) -> bool {
        matches!(self, Self::NoKeyLoaded)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for passvault operations
pub type VaultResult<T> = Result<T, VaultError>;
