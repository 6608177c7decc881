//! REST API layer
//!
//! A blocking HTTP client plus per-area endpoint implementations. The
//! backup endpoints are expressed as traits so protocol logic can run
//! against fake backends in tests.

pub mod accounts;
pub mod admin;
pub mod client;
pub mod organizations;

pub use accounts::{BackupBackend, RestoreBackend};
pub use client::ApiClient;
