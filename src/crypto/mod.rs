//! Cryptographic functions for passvault
//!
//! Provides the random symmetric key and AES-256-GCM token encryption
//! used for every stored password.

pub mod encryption;
pub mod key;

pub use encryption::{decrypt, decrypt_string, encrypt, encrypt_string, TOKEN_VERSION};
pub use key::{SecretKey, KEY_SIZE};
