//! Backup production
//!
//! Requests an encrypted backup from the server and persists the returned
//! document as a local download under the server-chosen filename. The file
//! is written atomically (temp file, then rename) so a failure never leaves
//! a partial download behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::api::BackupBackend;
use crate::display::format_size;
use crate::error::{SpendwellError, SpendwellResult};
use crate::models::{AccountId, BackupReceipt};

/// A backup that was created and written to disk
#[derive(Debug)]
pub struct BackupDownload {
    /// Server response metadata
    pub receipt: BackupReceipt,
    /// Where the artifact was written
    pub path: PathBuf,
}

impl BackupDownload {
    /// One-line human summary of the download
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {} transactions)",
            self.receipt.filename,
            format_size(self.receipt.size_bytes),
            self.receipt.transaction_count
        )
    }
}

/// Creates backups and stores them in the download directory
pub struct BackupProducer<'a> {
    backend: &'a dyn BackupBackend,
    download_dir: PathBuf,
}

impl<'a> BackupProducer<'a> {
    /// Create a producer writing into the given directory
    pub fn new(backend: &'a dyn BackupBackend, download_dir: PathBuf) -> Self {
        Self {
            backend,
            download_dir,
        }
    }

    /// Request a backup and persist it locally
    ///
    /// One request per invocation; on any failure nothing is written.
    pub fn create(
        &self,
        account_id: AccountId,
        notes: Option<&str>,
    ) -> SpendwellResult<BackupDownload> {
        let receipt = self.backend.create_backup(account_id, notes)?;

        fs::create_dir_all(&self.download_dir).map_err(|e| {
            SpendwellError::Io(format!("Failed to create download directory: {}", e))
        })?;

        let path = self.download_dir.join(&receipt.filename);
        write_atomic(&path, &receipt.backup_data)?;

        Ok(BackupDownload { receipt, path })
    }
}

/// Metadata about a locally stored backup artifact
#[derive(Debug, Clone)]
pub struct LocalBackup {
    /// Artifact filename
    pub filename: String,
    /// Full path to the artifact
    pub path: PathBuf,
    /// Size in bytes
    pub size_bytes: u64,
    /// When the file was written locally
    pub modified: chrono::DateTime<chrono::Utc>,
}

/// List backup artifacts in the download directory, newest first
pub fn list_local_backups(dir: &Path) -> SpendwellResult<Vec<LocalBackup>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut backups = Vec::new();

    for entry in fs::read_dir(dir)
        .map_err(|e| SpendwellError::Io(format!("Failed to read download directory: {}", e)))?
    {
        let entry = entry
            .map_err(|e| SpendwellError::Io(format!("Failed to read directory entry: {}", e)))?;

        let path = entry.path();
        if path
            .extension()
            .map_or(false, |ext| ext == crate::models::BACKUP_EXTENSION)
        {
            let metadata = fs::metadata(&path)
                .map_err(|e| SpendwellError::Io(format!("Failed to read file metadata: {}", e)))?;
            let modified = metadata
                .modified()
                .map(chrono::DateTime::<chrono::Utc>::from)
                .unwrap_or_else(|_| chrono::Utc::now());

            backups.push(LocalBackup {
                filename: entry.file_name().to_string_lossy().to_string(),
                path,
                size_bytes: metadata.len(),
                modified,
            });
        }
    }

    // Sort by date, newest first
    backups.sort_by(|a, b| b.modified.cmp(&a.modified));

    Ok(backups)
}

/// Write content fully or not at all
fn write_atomic(path: &Path, content: &str) -> SpendwellResult<()> {
    let tmp_path = path.with_extension("tmp");

    fs::write(&tmp_path, content)
        .map_err(|e| SpendwellError::Io(format!("Failed to write backup file: {}", e)))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Leave nothing behind on failure
        let _ = fs::remove_file(&tmp_path);
        SpendwellError::Io(format!("Failed to finalize backup file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct FakeBackend {
        calls: RefCell<Vec<(AccountId, Option<String>)>>,
        response: RefCell<Option<SpendwellResult<BackupReceipt>>>,
    }

    impl FakeBackend {
        fn returning(response: SpendwellResult<BackupReceipt>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response: RefCell::new(Some(response)),
            }
        }
    }

    impl BackupBackend for FakeBackend {
        fn create_backup(
            &self,
            account_id: AccountId,
            notes: Option<&str>,
        ) -> SpendwellResult<BackupReceipt> {
            self.calls
                .borrow_mut()
                .push((account_id, notes.map(str::to_string)));
            self.response.borrow_mut().take().unwrap()
        }
    }

    fn receipt(filename: &str, size: u64, count: u64, data: &str) -> BackupReceipt {
        BackupReceipt {
            filename: filename.to_string(),
            size_bytes: size,
            transaction_count: count,
            backup_data: data.to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 1, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_create_writes_download_and_summarizes() {
        let dir = TempDir::new().unwrap();
        let backend = FakeBackend::returning(Ok(receipt(
            "acc-1.etbackup",
            2048,
            5,
            r#"{"platform": "expense_tracker_e2ee"}"#,
        )));

        let producer = BackupProducer::new(&backend, dir.path().to_path_buf());
        let account = AccountId::new();
        let download = producer
            .create(account, Some("before cleanup"))
            .unwrap();

        assert_eq!(download.path, dir.path().join("acc-1.etbackup"));
        let written = fs::read_to_string(&download.path).unwrap();
        assert_eq!(written, r#"{"platform": "expense_tracker_e2ee"}"#);

        // Notes are forwarded to the server
        let calls = backend.calls.borrow();
        assert_eq!(calls[0].1.as_deref(), Some("before cleanup"));

        // 2048 bytes formats as "2 KB"
        assert_eq!(
            download.summary(),
            "acc-1.etbackup (2 KB, 5 transactions)"
        );
    }

    #[test]
    fn test_backend_failure_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let backend = FakeBackend::returning(Err(SpendwellError::Api {
            status: 404,
            detail: "Account not found or access denied".into(),
        }));

        let producer = BackupProducer::new(&backend, dir.path().to_path_buf());
        let err = producer.create(AccountId::new(), None).unwrap_err();
        assert!(err.to_string().contains("Account not found"));

        // Download directory holds nothing
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_list_local_backups_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("old.etbackup"), "{}").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(50));
        fs::write(dir.path().join("new.etbackup"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let backups = list_local_backups(dir.path()).unwrap();
        assert_eq!(backups.len(), 2);
        assert_eq!(backups[0].filename, "new.etbackup");
        assert_eq!(backups[1].filename, "old.etbackup");
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(list_local_backups(&missing).unwrap().is_empty());
    }

    #[test]
    fn test_no_temp_file_remains() {
        let dir = TempDir::new().unwrap();
        let backend =
            FakeBackend::returning(Ok(receipt("weekly.etbackup", 10, 0, "{}")));

        let producer = BackupProducer::new(&backend, dir.path().to_path_buf());
        producer.create(AccountId::new(), None).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["weekly.etbackup".to_string()]);
    }
}
