//! Key derivation using Argon2id
//!
//! Derives the user's master key from their passphrase using Argon2id,
//! a memory-hard key derivation function resistant to GPU/ASIC attacks.
//! The derived key never leaves the client; it exists only to wrap and
//! unwrap organization keys.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use argon2::{Algorithm, Argon2, Params, Version};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{SpendwellError, SpendwellResult};

/// Size of derived keys in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// Size of the random salt in bytes
const SALT_SIZE: usize = 16;

/// Parameters for key derivation
///
/// Stored in the session context so the same master key can be re-derived
/// across invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyDerivationParams {
    /// Salt for key derivation (base64 encoded)
    pub salt: String,
    /// Memory cost in KiB (default: 65536 = 64 MiB)
    pub memory_cost: u32,
    /// Time cost (iterations, default: 3)
    pub time_cost: u32,
    /// Parallelism degree (default: 4)
    pub parallelism: u32,
}

impl Default for KeyDerivationParams {
    fn default() -> Self {
        Self {
            salt: String::new(), // Will be generated on first use
            memory_cost: 65536,  // 64 MiB
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl KeyDerivationParams {
    /// Create new params with a random salt
    pub fn new() -> Self {
        let mut salt = [0u8; SALT_SIZE];
        OsRng.fill_bytes(&mut salt);
        Self {
            salt: STANDARD.encode(salt),
            ..Default::default()
        }
    }
}

/// A 256-bit secret key, zeroed on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; KEY_SIZE],
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey").field("bytes", &"<redacted>").finish()
    }
}

impl SecretKey {
    /// Generate a fresh random key
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Wrap existing key bytes
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

/// Derive the user's master key from a passphrase
///
/// The same passphrase and params always produce the same key, which is
/// what allows wrapped organization keys to be unwrapped in later sessions.
pub fn derive_master_key(
    passphrase: &str,
    params: &KeyDerivationParams,
) -> SpendwellResult<SecretKey> {
    if passphrase.is_empty() {
        return Err(SpendwellError::Encryption(
            "Passphrase cannot be empty".into(),
        ));
    }

    let salt = STANDARD
        .decode(&params.salt)
        .map_err(|e| SpendwellError::Encryption(format!("Invalid salt encoding: {}", e)))?;

    let argon_params = Params::new(
        params.memory_cost,
        params.time_cost,
        params.parallelism,
        Some(KEY_SIZE),
    )
    .map_err(|e| SpendwellError::Encryption(format!("Invalid KDF parameters: {}", e)))?;

    let argon = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon_params);

    let mut key = [0u8; KEY_SIZE];
    argon
        .hash_password_into(passphrase.as_bytes(), &salt, &mut key)
        .map_err(|e| SpendwellError::Encryption(format!("Key derivation failed: {}", e)))?;

    Ok(SecretKey::from_bytes(key))
}
