//! Backup CLI commands
//!
//! Implements CLI commands for creating, checking, and restoring account
//! backups.

use clap::Subcommand;
use std::path::PathBuf;

use crate::audit::{AuditAction, AuditEntry};
use crate::backup::{
    list_local_backups, validate_backup_file, BackupProducer, RestoreCoordinator, RestorePhase,
};
use crate::display::{format_age, format_size};
use crate::error::SpendwellResult;
use crate::models::{AccountId, RestoreMode};

use super::AppContext;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create an encrypted backup of an account
    Create {
        /// Account ID
        account: String,

        /// Free-text notes stored inside the backup
        #[arg(short, long)]
        notes: Option<String>,

        /// Write the backup to this directory instead of the default
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Restore an account from a backup file
    Restore {
        /// Account ID to restore into
        account: String,

        /// Path to the .etbackup file
        file: PathBuf,

        /// Restore mode: replace, merge, or new_account
        #[arg(short, long, default_value = "merge")]
        mode: String,

        /// Affirm destructive restores without an extra run
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Validate a backup file without restoring it
    Check {
        /// Path to the .etbackup file
        file: PathBuf,
    },

    /// List downloaded backup artifacts
    List,
}

/// Handle a backup command
pub fn handle_backup_command(ctx: &mut AppContext, cmd: BackupCommands) -> SpendwellResult<()> {
    match cmd {
        BackupCommands::Create {
            account,
            notes,
            output,
        } => {
            let account_id: AccountId = account
                .parse()
                .map_err(|_| crate::error::SpendwellError::account_not_found(account.as_str()))?;

            let download_dir = output.unwrap_or_else(|| ctx.settings.download_dir(&ctx.paths));

            println!("Creating backup...");
            let producer = BackupProducer::new(&ctx.client, download_dir);
            let download = producer.create(account_id, notes.as_deref())?;

            println!("Backup created: {}", download.summary());
            println!("Location: {}", download.path.display());

            ctx.audit.log(
                &AuditEntry::new(
                    AuditAction::BackupCreated,
                    Some(account_id.as_uuid().to_string()),
                )
                .with_details(serde_json::json!({
                    "filename": download.receipt.filename,
                    "transaction_count": download.receipt.transaction_count,
                })),
            )?;
        }

        BackupCommands::Restore {
            account,
            file,
            mode,
            yes,
        } => {
            let account_id: AccountId = account
                .parse()
                .map_err(|_| crate::error::SpendwellError::account_not_found(account.as_str()))?;
            let mode: RestoreMode = mode.parse()?;

            let mut coordinator = RestoreCoordinator::new(account_id);

            let staged = coordinator.select_file(&file)?;
            println!("Backup file: {}", staged.filename());
            if let Some(name) = staged.document.account_name() {
                println!("Account:     {}", name);
            }
            if let Some(count) = staged.document.transaction_count() {
                println!("Transactions: {}", count);
            }
            println!();

            coordinator.begin_submit(mode)?;

            if matches!(coordinator.phase(), RestorePhase::ConfirmationPending) {
                println!("WARNING: {}", coordinator.confirmation_prompt());
                if !yes {
                    coordinator.decline()?;
                    println!("Nothing was restored. To proceed, run again with --yes:");
                    println!(
                        "  spendwell backup restore {} {} --mode {} --yes",
                        account,
                        file.display(),
                        mode
                    );
                    return Ok(());
                }
                coordinator.confirm()?;
            }

            println!("Restoring from backup...");
            let outcome = coordinator.submit(&ctx.client)?;

            println!("Restore complete!");
            println!(
                "Restored {} transaction(s) in {} mode.",
                outcome.restored_transactions, outcome.mode
            );
            if let Some(new_account) = outcome.new_account_id {
                println!("New account created: {}", new_account.as_uuid());
            }
            if outcome.needs_refresh() {
                println!();
                println!("Account data changed on the server; refresh any open sessions.");
            }

            ctx.audit.log(
                &AuditEntry::new(
                    AuditAction::BackupRestored,
                    Some(account_id.as_uuid().to_string()),
                )
                .with_details(serde_json::json!({
                    "mode": outcome.mode.to_string(),
                    "restored_transactions": outcome.restored_transactions,
                })),
            )?;
        }

        BackupCommands::Check { file } => {
            let validated = validate_backup_file(&file)?;

            println!("Backup Details");
            println!("==============");
            println!("File:    {}", validated.path.display());
            println!("Platform: {} (ok)", validated.document.platform);
            println!("Version:  {}", validated.document.version);
            if let Some(created) = &validated.document.created_at {
                println!("Created:  {}", created);
            }
            if let Some(name) = validated.document.account_name() {
                println!("Account:  {}", name);
            }
            if let Some(count) = validated.document.transaction_count() {
                println!("Transactions: {}", count);
            }
            if let Some(notes) = &validated.document.notes {
                println!("Notes:    {}", notes);
            }
            println!();
            println!("This file can be restored with: spendwell backup restore");
        }

        BackupCommands::List => {
            let dir = ctx.settings.download_dir(&ctx.paths);
            let backups = list_local_backups(&dir)?;

            if backups.is_empty() {
                println!("No downloaded backups in {}", dir.display());
                println!("Create one with: spendwell backup create <account>");
                return Ok(());
            }

            println!("Downloaded Backups");
            println!("==================");
            for (i, backup) in backups.iter().enumerate() {
                println!(
                    "  {}. {} ({}, {} ago)",
                    i + 1,
                    backup.filename,
                    format_size(backup.size_bytes),
                    format_age(backup.modified.naive_utc()),
                );
            }
            println!();
            println!("Total: {} backup(s)", backups.len());
        }
    }

    Ok(())
}
