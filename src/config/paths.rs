//! Path management for the Spendwell client
//!
//! Provides XDG-compliant path resolution for configuration, session state,
//! downloads, and the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDWELL_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spendwell` or `~/.config/spendwell`
//! 3. Windows: `%APPDATA%\spendwell`

use std::path::PathBuf;

use crate::error::SpendwellError;

/// Manages all paths used by the Spendwell client
#[derive(Debug, Clone)]
pub struct SpendwellPaths {
    /// Base directory for all Spendwell data
    base_dir: PathBuf,
}

impl SpendwellPaths {
    /// Create a new SpendwellPaths instance
    ///
    /// Path resolution:
    /// 1. `SPENDWELL_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/spendwell` or `~/.config/spendwell`
    /// 3. Windows: `%APPDATA%\spendwell`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SpendwellError> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDWELL_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendwellPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/spendwell/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the downloads directory (~/.config/spendwell/downloads/)
    ///
    /// Backup artifacts retrieved from the server land here unless the
    /// settings override the download directory.
    pub fn downloads_dir(&self) -> PathBuf {
        self.base_dir.join("downloads")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the session context file
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/spendwell/)
    /// - Downloads directory (~/.config/spendwell/downloads/)
    pub fn ensure_directories(&self) -> Result<(), SpendwellError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendwellError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.downloads_dir()).map_err(|e| {
            SpendwellError::Io(format!("Failed to create downloads directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if the client has been configured (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpendwellError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("spendwell"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpendwellError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpendwellError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spendwell"))
}
