//! Account backup endpoints
//!
//! The backup producer and restore coordinator talk to the server through
//! the two traits defined here, so the protocol logic can be exercised
//! against an in-memory backend in tests.

use crate::error::SpendwellResult;
use crate::models::{
    AccountId, BackupReceipt, CreateBackupRequest, RestoreMode, RestoreOutcome, RestoreRequest,
};

use super::client::ApiClient;

/// Server side of backup creation
pub trait BackupBackend {
    /// Request an encrypted backup of an account
    fn create_backup(
        &self,
        account_id: AccountId,
        notes: Option<&str>,
    ) -> SpendwellResult<BackupReceipt>;
}

/// Server side of backup restoration
pub trait RestoreBackend {
    /// Apply a validated backup document to an account
    fn restore_account(
        &self,
        account_id: AccountId,
        mode: RestoreMode,
        backup_json: &str,
    ) -> SpendwellResult<RestoreOutcome>;
}

impl BackupBackend for ApiClient {
    fn create_backup(
        &self,
        account_id: AccountId,
        notes: Option<&str>,
    ) -> SpendwellResult<BackupReceipt> {
        let body = CreateBackupRequest {
            notes: notes.map(str::to_string),
        };
        self.post(
            &format!("/api/accounts/{}/backup", account_id.as_uuid()),
            &body,
            "Failed to create backup",
        )
    }
}

impl RestoreBackend for ApiClient {
    fn restore_account(
        &self,
        account_id: AccountId,
        mode: RestoreMode,
        backup_json: &str,
    ) -> SpendwellResult<RestoreOutcome> {
        let body = RestoreRequest {
            mode,
            backup_file: backup_json.to_string(),
        };
        self.post(
            &format!("/api/accounts/{}/restore", account_id.as_uuid()),
            &body,
            "Failed to restore backup",
        )
    }
}
