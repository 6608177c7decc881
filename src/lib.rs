//! Spendwell CLI - Terminal client for the Spendwell expense tracker
//!
//! This library provides the client-side functionality for the Spendwell
//! end-to-end encrypted, multi-tenant expense tracker. The server only ever
//! sees encrypted account data; this client handles the pieces that must
//! live on the user's machine: backup artifacts, organization key wrapping,
//! and the session context.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Typed IDs and wire shapes
//! - `api`: Blocking REST client for the server
//! - `backup`: Backup production, validation, and restore coordination
//! - `crypto`: Master-key derivation and organization key wrapping
//! - `session`: Explicit sign-in-scoped session context
//! - `services`: Business logic layer
//! - `audit`: Client-side audit logging
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwell::config::{paths::SpendwellPaths, settings::Settings};
//!
//! let paths = SpendwellPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod api;
pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

pub use error::SpendwellError;
