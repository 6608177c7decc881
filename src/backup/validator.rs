//! Backup file validation
//!
//! Inspects a user-supplied backup file before a restore is allowed:
//! the filename must carry the `.etbackup` extension, the content must
//! parse as a backup document, the platform marker must match, and the
//! format version must be supported. Every check runs locally; a file
//! that fails here never reaches the network.
//!
//! Validation is advisory only. It filters out obviously wrong files;
//! authenticity of the encrypted payload is the server's responsibility.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SpendwellError, SpendwellResult};
use crate::models::{BackupDocument, BACKUP_EXTENSION, PLATFORM_MARKER, SUPPORTED_FORMAT_VERSION};

/// A backup file that passed all local checks
#[derive(Debug, Clone)]
pub struct ValidatedBackup {
    /// Where the file was read from
    pub path: PathBuf,
    /// The document exactly as read, submitted verbatim on restore
    pub raw: String,
    /// Parsed envelope fields
    pub document: BackupDocument,
}

impl ValidatedBackup {
    /// Filename component of the source path
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Validate a backup file on disk
///
/// Checks run in order: extension, parse, platform marker, format version.
/// The first failure wins and is reported as its own error variant.
pub fn validate_backup_file(path: &Path) -> SpendwellResult<ValidatedBackup> {
    let filename = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    if path.extension().map_or(true, |ext| ext != BACKUP_EXTENSION) {
        return Err(SpendwellError::BackupExtension {
            expected: BACKUP_EXTENSION,
            filename,
        });
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| SpendwellError::Io(format!("Failed to read backup file: {}", e)))?;

    validate_backup_content(path, raw)
}

/// Validate backup content that has already been read
pub fn validate_backup_content(path: &Path, raw: String) -> SpendwellResult<ValidatedBackup> {
    let document: BackupDocument = serde_json::from_str(&raw)
        .map_err(|e| SpendwellError::BackupMalformed(e.to_string()))?;

    if document.platform != PLATFORM_MARKER {
        return Err(SpendwellError::BackupPlatform(document.platform));
    }

    if document.version != SUPPORTED_FORMAT_VERSION {
        return Err(SpendwellError::BackupVersion(document.version));
    }

    Ok(ValidatedBackup {
        path: path.to_path_buf(),
        raw,
        document,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn valid_backup_json() -> String {
        format!(
            r#"{{
                "version": "{}",
                "platform": "{}",
                "created_at": "2026-01-15T10:00:00",
                "account": {{"name": "Checking"}},
                "transactions": []
            }}"#,
            SUPPORTED_FORMAT_VERSION, PLATFORM_MARKER
        )
    }

    #[test]
    fn test_valid_file_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "backup.etbackup", &valid_backup_json());

        let validated = validate_backup_file(&path).unwrap();
        assert_eq!(validated.filename(), "backup.etbackup");
        assert_eq!(validated.document.platform, PLATFORM_MARKER);
        assert_eq!(validated.document.transaction_count(), Some(0));
    }

    #[test]
    fn test_wrong_extension_rejected_before_read() {
        let dir = TempDir::new().unwrap();
        // Content is valid; the name alone disqualifies it
        let path = write_file(&dir, "backup.json", &valid_backup_json());

        let err = validate_backup_file(&path).unwrap_err();
        assert!(matches!(err, SpendwellError::BackupExtension { .. }));
    }

    #[test]
    fn test_no_extension_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "backup", &valid_backup_json());

        let err = validate_backup_file(&path).unwrap_err();
        assert!(matches!(err, SpendwellError::BackupExtension { .. }));
    }

    #[test]
    fn test_malformed_content_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "broken.etbackup", "{not json");

        let err = validate_backup_file(&path).unwrap_err();
        assert!(matches!(err, SpendwellError::BackupMalformed(_)));
    }

    #[test]
    fn test_foreign_platform_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "foreign.etbackup",
            r#"{"version": "1.0.0", "platform": "other_budget_app"}"#,
        );

        let err = validate_backup_file(&path).unwrap_err();
        match err {
            SpendwellError::BackupPlatform(found) => assert_eq!(found, "other_budget_app"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "old.etbackup",
            &format!(r#"{{"version": "0.9.0", "platform": "{}"}}"#, PLATFORM_MARKER),
        );

        let err = validate_backup_file(&path).unwrap_err();
        assert!(matches!(err, SpendwellError::BackupVersion(_)));
    }

    #[test]
    fn test_missing_platform_field_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "anon.etbackup", r#"{"version": "1.0.0"}"#);

        let err = validate_backup_file(&path).unwrap_err();
        assert!(matches!(err, SpendwellError::BackupPlatform(_)));
    }
}
