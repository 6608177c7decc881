//! Restore coordination
//!
//! Drives a restore from file selection through submission as an explicit
//! state machine:
//!
//! ```text
//! Idle -> FileSelected -> (ConfirmationPending) -> Submitting -> Succeeded
//!                                   |                               |
//!                                decline                         Failed
//! ```
//!
//! Destructive modes must pass through `ConfirmationPending` before a
//! request is issued; declining returns to `FileSelected` with no side
//! effect. After a failed submission the staged file stays selected so
//! the user can retry.

use std::path::Path;

use crate::api::RestoreBackend;
use crate::error::{SpendwellError, SpendwellResult};
use crate::models::{AccountId, RestoreMode, RestoreOutcome};

use super::validator::{validate_backup_file, ValidatedBackup};

/// Where a restore currently stands
#[derive(Debug, Clone)]
pub enum RestorePhase {
    /// No file staged
    Idle,
    /// A validated file is staged and a mode can be chosen
    FileSelected,
    /// A destructive mode was requested and awaits explicit confirmation
    ConfirmationPending,
    /// The request is armed and ready to go out
    Submitting,
    /// The server applied the backup
    Succeeded(RestoreOutcome),
    /// The server rejected the restore; the file stays staged for retry
    Failed(String),
}

/// State machine for restoring one account from a backup file
pub struct RestoreCoordinator {
    account_id: AccountId,
    phase: RestorePhase,
    staged: Option<ValidatedBackup>,
    mode: Option<RestoreMode>,
}

impl RestoreCoordinator {
    /// Start a coordinator for the given account
    pub fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            phase: RestorePhase::Idle,
            staged: None,
            mode: None,
        }
    }

    /// Current phase
    pub fn phase(&self) -> &RestorePhase {
        &self.phase
    }

    /// The staged backup, if any
    pub fn staged(&self) -> Option<&ValidatedBackup> {
        self.staged.as_ref()
    }

    /// Stage a backup file after validating it
    ///
    /// On validation failure any previously staged file is cleared and the
    /// machine returns to `Idle`; the error is propagated to the caller.
    pub fn select_file(&mut self, path: &Path) -> SpendwellResult<&ValidatedBackup> {
        match validate_backup_file(path) {
            Ok(validated) => {
                self.mode = None;
                self.phase = RestorePhase::FileSelected;
                Ok(&*self.staged.insert(validated))
            }
            Err(err) => {
                self.staged = None;
                self.mode = None;
                self.phase = RestorePhase::Idle;
                Err(err)
            }
        }
    }

    /// Choose a restore mode and arm the submission
    ///
    /// Destructive modes stop at `ConfirmationPending`; others go straight
    /// to `Submitting`. Valid from `FileSelected` and from `Failed` (retry).
    pub fn begin_submit(&mut self, mode: RestoreMode) -> SpendwellResult<&RestorePhase> {
        match self.phase {
            RestorePhase::FileSelected | RestorePhase::Failed(_) => {}
            _ => {
                return Err(SpendwellError::Restore(
                    "No backup file is staged for restore".into(),
                ))
            }
        }

        self.mode = Some(mode);
        self.phase = if mode.is_destructive() {
            RestorePhase::ConfirmationPending
        } else {
            RestorePhase::Submitting
        };
        Ok(&self.phase)
    }

    /// Text shown to the user when confirmation is required
    pub fn confirmation_prompt(&self) -> String {
        format!(
            "Restoring in replace mode permanently deletes all existing \
             transactions on account {} before applying the backup. \
             This cannot be undone.",
            self.account_id
        )
    }

    /// Affirm the destructive-action prompt
    pub fn confirm(&mut self) -> SpendwellResult<()> {
        match self.phase {
            RestorePhase::ConfirmationPending => {
                self.phase = RestorePhase::Submitting;
                Ok(())
            }
            _ => Err(SpendwellError::Restore(
                "Nothing is awaiting confirmation".into(),
            )),
        }
    }

    /// Decline the destructive-action prompt
    ///
    /// Returns to `FileSelected` with the file still staged; no request is
    /// issued.
    pub fn decline(&mut self) -> SpendwellResult<()> {
        match self.phase {
            RestorePhase::ConfirmationPending => {
                self.phase = RestorePhase::FileSelected;
                self.mode = None;
                Ok(())
            }
            _ => Err(SpendwellError::Restore(
                "Nothing is awaiting confirmation".into(),
            )),
        }
    }

    /// Issue the restore request
    ///
    /// Only valid once the machine reached `Submitting`; a second submission
    /// while one is armed or after a terminal state is rejected. On backend
    /// failure the machine moves to `Failed` and keeps the file staged.
    pub fn submit(&mut self, backend: &dyn RestoreBackend) -> SpendwellResult<RestoreOutcome> {
        if !matches!(self.phase, RestorePhase::Submitting) {
            return Err(SpendwellError::Restore(
                "Restore is not ready to submit (stage a file and choose a mode first)".into(),
            ));
        }

        let staged = self.staged.as_ref().ok_or_else(|| {
            SpendwellError::Restore("No backup file is staged for restore".into())
        })?;
        let mode = self
            .mode
            .ok_or_else(|| SpendwellError::Restore("No restore mode chosen".into()))?;

        match backend.restore_account(self.account_id, mode, &staged.raw) {
            Ok(outcome) => {
                self.phase = RestorePhase::Succeeded(outcome.clone());
                Ok(outcome)
            }
            Err(err) => {
                self.phase = RestorePhase::Failed(err.to_string());
                Err(err)
            }
        }
    }
}
