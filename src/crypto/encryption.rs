//! AES-256-GCM encryption/decryption
//!
//! Provides authenticated encryption for stored passwords using AES-256-GCM.
//! Each encryption operation generates a unique nonce, so the same password
//! stored twice produces two unrelated tokens.
//!
//! A token is `base64url(version || nonce || ciphertext+tag)`. The base64url
//! alphabet has no `:` or line breaks, so a token can sit on one line of the
//! password file next to its site name.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::URL_SAFE, Engine};

use crate::error::{VaultError, VaultResult};

use super::SecretKey;

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes
const TAG_SIZE: usize = 16;

/// Leading byte of every token, for future algorithm upgrades
pub const TOKEN_VERSION: u8 = 1;

fn cipher_for(key: &SecretKey) -> VaultResult<Aes256Gcm> {
    let raw = key.cipher_key()?;
    Aes256Gcm::new_from_slice(&raw[..])
        .map_err(|e| VaultError::Encryption(format!("Failed to create cipher: {}", e)))
}

/// Encrypt plaintext data into a printable token
pub fn encrypt(plaintext: &[u8], key: &SecretKey) -> VaultResult<String> {
    let cipher = cipher_for(key)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| VaultError::Encryption(format!("Encryption failed: {}", e)))?;

    let mut token = Vec::with_capacity(1 + NONCE_SIZE + ciphertext.len());
    token.push(TOKEN_VERSION);
    token.extend_from_slice(&nonce_bytes);
    token.extend_from_slice(&ciphertext);

    Ok(URL_SAFE.encode(token))
}

/// Decrypt a token produced by [`encrypt`]
pub fn decrypt(token: &str, key: &SecretKey) -> VaultResult<Vec<u8>> {
    let cipher = cipher_for(key).map_err(|e| VaultError::Decryption(e.to_string()))?;

    let bytes = URL_SAFE
        .decode(token)
        .map_err(|e| VaultError::Decryption(format!("Invalid token encoding: {}", e)))?;

    if bytes.len() < 1 + NONCE_SIZE + TAG_SIZE {
        return Err(VaultError::Decryption(format!(
            "Token too short: {} bytes",
            bytes.len()
        )));
    }

    let (version, rest) = bytes.split_at(1);
    if version[0] != TOKEN_VERSION {
        return Err(VaultError::Decryption(format!(
            "Unsupported token version: {}",
            version[0]
        )));
    }

    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher.decrypt(nonce, ciphertext).map_err(|_| {
        VaultError::Decryption("Decryption failed: invalid key or corrupted data".to_string())
    })
}

/// Encrypt a string
pub fn encrypt_string(plaintext: &str, key: &SecretKey) -> VaultResult<String> {
    encrypt(plaintext.as_bytes(), key)
}

/// Decrypt to a string
pub fn decrypt_string(token: &str, key: &SecretKey) -> VaultResult<String> {
    let plaintext = decrypt(token, key)?;
    String::from_utf8(plaintext)
        .map_err(|e| VaultError::Decryption(format!("Invalid UTF-8 in decrypted data: {}", e)))
}
