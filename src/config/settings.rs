//! User settings for the Spendwell client
//!
//! Manages user preferences including the server address, request timeout,
//! and the download directory for backup artifacts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::SpendwellPaths;
use crate::error::SpendwellError;

/// User settings for the Spendwell client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the Spendwell server, including scheme
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Override for the backup download directory
    ///
    /// When unset, backups are written under the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_server_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            server_url: default_server_url(),
            timeout_secs: default_timeout_secs(),
            download_dir: None,
        }
    }
}

impl Settings {
    /// Resolve the directory backup downloads are written to
    pub fn download_dir(&self, paths: &SpendwellPaths) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(|| paths.downloads_dir())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpendwellPaths) -> Result<Self, SpendwellError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SpendwellError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendwellError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendwellPaths) -> Result<(), SpendwellError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpendwellError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SpendwellError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
