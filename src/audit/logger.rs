//! Audit logger for the append-only audit log
//!
//! Provides the AuditLogger struct that writes audit entries to a log file.
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{SpendwellError, SpendwellResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one audit entry.
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log an audit entry
    ///
    /// Appends the entry as a JSON line to the audit log file.
    /// Each write is flushed immediately to ensure durability.
    pub fn log(&self, entry: &AuditEntry) -> SpendwellResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| SpendwellError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| SpendwellError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| SpendwellError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| SpendwellError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries from the log file
    ///
    /// Returns entries in chronological order (oldest first). Lines that
    /// fail to parse are skipped rather than failing the whole read.
    pub fn read_all(&self) -> SpendwellResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| SpendwellError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line
                .map_err(|e| SpendwellError::Io(format!("Failed to read audit log: {}", e)))?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(entry) = serde_json::from_str::<AuditEntry>(&line) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Read the most recent entries, newest first
    pub fn recent(&self, count: usize) -> SpendwellResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        entries.reverse();
        entries.truncate(count);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::AuditAction;
    use tempfile::TempDir;

    fn test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = test_logger();

        logger
            .log(&AuditEntry::new(AuditAction::SignIn, None))
            .unwrap();
        logger
            .log(&AuditEntry::new(
                AuditAction::BackupCreated,
                Some("acc-1".into()),
            ))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, AuditAction::SignIn);
        assert_eq!(entries[1].action, AuditAction::BackupCreated);
    }

    #[test]
    fn test_read_missing_file() {
        let (logger, _temp) = test_logger();
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_recent_is_newest_first() {
        let (logger, _temp) = test_logger();

        for target in ["a", "b", "c"] {
            logger
                .log(&AuditEntry::new(
                    AuditAction::OrganizationSwitched,
                    Some(target.into()),
                ))
                .unwrap();
        }

        let recent = logger.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].target.as_deref(), Some("c"));
        assert_eq!(recent[1].target.as_deref(), Some("b"));
    }

    #[test]
    fn test_unparseable_lines_skipped() {
        let (logger, _temp) = test_logger();
        logger
            .log(&AuditEntry::new(AuditAction::SignOut, None))
            .unwrap();

        // Corrupt the file with a stray line
        let mut file = OpenOptions::new()
            .append(true)
            .open(&logger.log_path)
            .unwrap();
        writeln!(file, "not json").unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
    }
}
