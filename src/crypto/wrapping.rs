//! Organization key wrapping
//!
//! Wraps organization master keys with the user's master key using
//! AES-256-GCM. The wrapped form (base64 of nonce || ciphertext) is what
//! travels to the server; the server never sees an unwrapped key.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{SpendwellError, SpendwellResult};

use super::key_derivation::{SecretKey, KEY_SIZE};

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// Wrap an organization key under the user's master key
///
/// Generates a unique nonce per wrap; the result is base64(nonce || ciphertext).
pub fn wrap_key(org_key: &SecretKey, master_key: &SecretKey) -> SpendwellResult<String> {
    let cipher = Aes256Gcm::new_from_slice(master_key.as_bytes())
        .map_err(|e| SpendwellError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, org_key.as_bytes().as_slice())
        .map_err(|e| SpendwellError::Encryption(format!("Key wrapping failed: {}", e)))?;

    let mut wrapped = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    wrapped.extend_from_slice(&nonce_bytes);
    wrapped.extend_from_slice(&ciphertext);

    Ok(STANDARD.encode(wrapped))
}

/// Unwrap an organization key with the user's master key
pub fn unwrap_key(wrapped: &str, master_key: &SecretKey) -> SpendwellResult<SecretKey> {
    let raw = STANDARD
        .decode(wrapped)
        .map_err(|e| SpendwellError::Encryption(format!("Invalid wrapped key encoding: {}", e)))?;

    if raw.len() <= NONCE_SIZE {
        return Err(SpendwellError::Encryption(
            "Wrapped key is too short".into(),
        ));
    }

    let (nonce_bytes, ciphertext) = raw.split_at(NONCE_SIZE);

    let cipher = Aes256Gcm::new_from_slice(master_key.as_bytes())
        .map_err(|e| SpendwellError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| {
            SpendwellError::Encryption(
                "Key unwrapping failed (wrong passphrase or corrupted key)".into(),
            )
        })?;

    if plaintext.len() != KEY_SIZE {
        return Err(SpendwellError::Encryption(format!(
            "Unwrapped key has unexpected length: {}",
            plaintext.len()
        )));
    }

    let mut bytes = [0u8; KEY_SIZE];
    bytes.copy_from_slice(&plaintext);
    Ok(SecretKey::from_bytes(bytes))
}
