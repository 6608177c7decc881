//! Backup exchange protocol
//!
//! Client side of the encrypted backup/restore exchange: producing backup
//! artifacts, validating user-supplied files, and coordinating restores
//! with confirmation gating for destructive modes.

pub mod coordinator;
pub mod producer;
pub mod validator;

pub use coordinator::{RestoreCoordinator, RestorePhase};
pub use producer::{list_local_backups, BackupDownload, BackupProducer, LocalBackup};
pub use validator::{validate_backup_file, ValidatedBackup};
