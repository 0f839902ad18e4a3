//! Payload confidentiality layer.
//!
//! AES-256-GCM with a fresh random nonce prepended to every sealed payload.
//! The rest of the crate treats the output as an opaque byte sequence; any
//! scheme that round-trips through the codec would satisfy the embedding
//! protocol.

use crate::constants::{KEY_LEN, NONCE_LEN};
use crate::error::{Result, StegoError};
use aes_gcm::aead::{Aead, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Key, KeyInit, Nonce};
use std::fs;
use std::path::Path;

pub type KeyBytes = [u8; KEY_LEN];

/// Generates a fresh key from OS randomness.
pub fn generate_key() -> KeyBytes {
    Aes256Gcm::generate_key(&mut OsRng).into()
}

/// Writes a key to disk as lowercase hex.
pub fn save_key(key: &KeyBytes, path: &Path) -> Result<()> {
    fs::write(path, hex::encode(key))?;
    Ok(())
}

/// Reads a hex key file written by [`save_key`].
///
/// # Errors
///
/// Returns [`StegoError::InvalidKey`] if the contents are not exactly
/// [`KEY_LEN`] bytes of hex.
pub fn load_key(path: &Path) -> Result<KeyBytes> {
    let text = fs::read_to_string(path)?;
    let raw = hex::decode(text.trim()).map_err(|_| StegoError::InvalidKey { expected: KEY_LEN })?;
    raw.try_into()
        .map_err(|_| StegoError::InvalidKey { expected: KEY_LEN })
}

/// Encrypts a payload, returning `nonce || ciphertext || tag`.
pub fn encrypt(key: &KeyBytes, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| StegoError::Encrypt)?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(nonce.as_slice());
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Decrypts a sealed payload produced by [`encrypt`].
///
/// # Errors
///
/// Returns [`StegoError::Decrypt`] on a wrong key, a truncated input, or a
/// failed authentication tag.
pub fn decrypt(key: &KeyBytes, sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < NONCE_LEN {
        return Err(StegoError::Decrypt);
    }
    let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| StegoError::Decrypt)
}
