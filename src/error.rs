//! Custom error types for the Spendwell client
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Spendwell client operations
#[derive(Error, Debug)]
pub enum SpendwellError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Backup file does not carry the expected extension
    #[error("Backup file must have the .{expected} extension: {filename}")]
    BackupExtension {
        expected: &'static str,
        filename: String,
    },

    /// Backup file content could not be parsed
    #[error("Backup file is not a valid backup document: {0}")]
    BackupMalformed(String),

    /// Backup file was produced by a different platform
    #[error("Backup was not created by this platform (found platform marker '{0}')")]
    BackupPlatform(String),

    /// Backup format version is not supported by this client
    #[error("Unsupported backup format version: {0}")]
    BackupVersion(String),

    /// Invalid restore state machine transition
    #[error("Restore error: {0}")]
    Restore(String),

    /// Transport-level HTTP failures (connection refused, timeouts, bad TLS)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Structured error reported by the backend
    #[error("Server error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// The server rejected the request for lack of admin rights
    #[error("Administrator privileges required")]
    AdminRequired,

    /// No session token is available
    #[error("Not signed in. Run 'spendwell login' first")]
    NotSignedIn,

    /// Encryption and key-wrapping errors
    #[error("Encryption error: {0}")]
    Encryption(String),
}

impl SpendwellError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for organizations
    pub fn organization_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Organization",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a client-side backup validation error
    ///
    /// Validation errors are recovered locally and never reach the network.
    pub fn is_backup_validation(&self) -> bool {
        matches!(
            self,
            Self::BackupExtension { .. }
                | Self::BackupMalformed(_)
                | Self::BackupPlatform(_)
                | Self::BackupVersion(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendwellError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendwellError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for SpendwellError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for Spendwell client operations
pub type SpendwellResult<T> = Result<T, SpendwellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendwellError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = SpendwellError::account_not_found("acc-1");
        assert_eq!(err.to_string(), "Account not found: acc-1");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_backup_validation_errors() {
        let err = SpendwellError::BackupExtension {
            expected: "etbackup",
            filename: "backup.json".into(),
        };
        assert!(err.is_backup_validation());
        assert_eq!(
            err.to_string(),
            "Backup file must have the .etbackup extension: backup.json"
        );

        let err = SpendwellError::BackupPlatform("other_app".into());
        assert!(err.is_backup_validation());

        let err = SpendwellError::Http("connection refused".into());
        assert!(!err.is_backup_validation());
    }

    #[test]
    fn test_admin_required_message() {
        assert_eq!(
            SpendwellError::AdminRequired.to_string(),
            "Administrator privileges required"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendwellError = io_err.into();
        assert!(matches!(err, SpendwellError::Io(_)));
    }
}
