//! Symmetric key material
//!
//! A key is 32 bytes from the OS random source, kept in its base64url text
//! form. That text is exactly what gets written to the key file, so a loaded
//! key is never checked for shape until a cipher is built from it.

use std::fmt;

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use base64::{engine::general_purpose::URL_SAFE, Engine};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{VaultError, VaultResult};

/// Size of the decoded AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// An encryption key, zeroed on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    /// Key bytes exactly as stored on disk (base64url text for generated keys)
    encoded: Vec<u8>,
}

impl SecretKey {
    /// Generate a fresh random key
    pub fn generate() -> Self {
        let mut raw = Zeroizing::new([0u8; KEY_SIZE]);
        OsRng.fill_bytes(&mut *raw);
        Self {
            encoded: URL_SAFE.encode(&*raw).into_bytes(),
        }
    }

    /// Wrap bytes read from a key file without validating them
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { encoded: bytes }
    }

    /// The stored form of the key
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }

    /// Decode the stored form into raw AES key bytes
    ///
    /// Surrounding ASCII whitespace is ignored so a key file that picked up a
    /// trailing newline in an editor still works.
    pub(crate) fn cipher_key(&self) -> VaultResult<Zeroizing<[u8; KEY_SIZE]>> {
        let text = String::from_utf8_lossy(&self.encoded);
        let decoded = Zeroizing::new(
            URL_SAFE
                .decode(text.trim())
                .map_err(|e| VaultError::Encryption(format!("Invalid key encoding: {}", e)))?,
        );

        if decoded.len() != KEY_SIZE {
            return Err(VaultError::Encryption(format!(
                "Invalid key size: expected {} bytes, got {}",
                KEY_SIZE,
                decoded.len()
            )));
        }

        let mut key = Zeroizing::new([0u8; KEY_SIZE]);
        key.copy_from_slice(&decoded);
        Ok(key)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.encoded.len())
            .finish_non_exhaustive()
    }
}
