//! Configuration and path management
//!
//! Handles resolution of the data directory, persisted user settings,
//! and filesystem layout for the client.

pub mod paths;
pub mod settings;

pub use paths::SpendwellPaths;
pub use settings::Settings;
