//! Cryptographic functions for the Spendwell client
//!
//! Provides Argon2id master-key derivation and AES-256-GCM organization
//! key wrapping. This is the only place the client handles key material;
//! backup payloads stay encrypted end to end and are never opened here.

pub mod key_derivation;
pub mod wrapping;

pub use key_derivation::{derive_master_key, KeyDerivationParams, SecretKey, KEY_SIZE};
pub use wrapping::{unwrap_key, wrap_key};
