//! Backup exchange data model
//!
//! Defines the parsed view of a `.etbackup` artifact, the restore modes,
//! and the request/response shapes of the backup endpoints. The encrypted
//! payload inside a backup is opaque to this client and is never decrypted
//! locally.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpendwellError;
use crate::models::AccountId;

/// Platform marker embedded in every backup produced by this system
///
/// Files carrying any other marker are rejected before a restore is
/// attempted.
pub const PLATFORM_MARKER: &str = "expense_tracker_e2ee";

/// File extension for backup artifacts
pub const BACKUP_EXTENSION: &str = "etbackup";

/// The backup format generation this client understands
pub const SUPPORTED_FORMAT_VERSION: &str = "1.0.0";

/// Parsed view of a backup artifact
///
/// Only the envelope fields are interpreted. Account data and transaction
/// payloads remain encrypted and are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupDocument {
    /// Marker identifying the producing system
    #[serde(default)]
    pub platform: String,

    /// Backup format version
    #[serde(default)]
    pub version: String,

    /// When the backup was created (server clock)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Free-text notes supplied at creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Everything else in the document, passed through opaquely
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl BackupDocument {
    /// Number of transactions carried in the backup, when present
    pub fn transaction_count(&self) -> Option<usize> {
        self.rest
            .get("transactions")
            .and_then(|v| v.as_array())
            .map(|a| a.len())
    }

    /// Display name of the backed-up account, when present
    pub fn account_name(&self) -> Option<&str> {
        self.rest
            .get("account")
            .and_then(|v| v.get("name"))
            .and_then(|v| v.as_str())
    }
}

/// How backup contents are applied to existing account state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreMode {
    /// Delete existing transactions, then apply the backup
    Replace,
    /// Keep existing transactions, add backup contents (backend skips duplicates)
    Merge,
    /// Create a new account seeded from the backup; original untouched
    NewAccount,
}

impl RestoreMode {
    /// Whether this mode deletes existing data and must be confirmed
    pub fn is_destructive(&self) -> bool {
        matches!(self, RestoreMode::Replace)
    }
}

impl fmt::Display for RestoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreMode::Replace => write!(f, "replace"),
            RestoreMode::Merge => write!(f, "merge"),
            RestoreMode::NewAccount => write!(f, "new_account"),
        }
    }
}

impl FromStr for RestoreMode {
    type Err = SpendwellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "replace" => Ok(RestoreMode::Replace),
            "merge" => Ok(RestoreMode::Merge),
            "new_account" | "new-account" => Ok(RestoreMode::NewAccount),
            other => Err(SpendwellError::Validation(format!(
                "Unknown restore mode '{}' (expected replace, merge, or new_account)",
                other
            ))),
        }
    }
}

/// Request body for backup creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateBackupRequest {
    /// Optional free-text notes stored inside the backup
    pub notes: Option<String>,
}

/// Response returned by the server after creating a backup
#[derive(Debug, Clone, Deserialize)]
pub struct BackupReceipt {
    /// Server-chosen filename for the artifact
    pub filename: String,
    /// Size of the backup document in bytes
    pub size_bytes: u64,
    /// Number of transactions captured
    pub transaction_count: u64,
    /// The backup document itself, as a JSON string
    pub backup_data: String,
    /// Server-side creation timestamp (server clock, no offset)
    pub created_at: NaiveDateTime,
}

/// Request body for a restore call
#[derive(Debug, Clone, Serialize)]
pub struct RestoreRequest {
    /// How backup contents are applied
    pub mode: RestoreMode,
    /// The full backup document as read from disk
    pub backup_file: String,
}

/// Result of a restore reported by the server
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RestoreOutcome {
    /// Server status string ("success" on the happy path)
    #[serde(default)]
    pub status: String,
    /// Echo of the requested mode
    pub mode: RestoreMode,
    /// Number of transactions written
    pub restored_transactions: u64,
    /// Present iff mode was `new_account`
    #[serde(default)]
    pub new_account_id: Option<AccountId>,
    /// Envelope metadata about the backup that was applied
    #[serde(default)]
    pub backup_info: serde_json::Value,
}

impl RestoreOutcome {
    /// Whether the caller must reload account state from scratch
    ///
    /// Restoring into a new account leaves the original untouched, so no
    /// refresh is needed. Replace and merge both mutate in place.
    pub fn needs_refresh(&self) -> bool {
        self.mode != RestoreMode::NewAccount
    }
}
