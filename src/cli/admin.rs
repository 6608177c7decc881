//! Admin CLI commands
//!
//! System administration surface: statistics, the log viewer, log cleanup,
//! system settings, and organization oversight. Every command here requires
//! admin rights server-side.

use clap::Subcommand;

use crate::display::{format_log_page, format_org_oversight, format_settings, format_system_stats};
use crate::error::SpendwellResult;
use crate::services::AdminService;

use super::AppContext;

/// Admin subcommands
#[derive(Subcommand)]
pub enum AdminCommands {
    /// Show system-wide statistics
    Stats,

    /// View system logs
    Logs {
        /// Filter by log level (INFO, WARNING, ERROR, CRITICAL)
        #[arg(short, long)]
        level: Option<String>,

        /// Filter by category (auth, database, backup, system, admin)
        #[arg(short, long)]
        category: Option<String>,

        /// Page number (1-indexed)
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Entries per page (max 500)
        #[arg(long, default_value = "100")]
        page_size: u32,
    },

    /// Delete system logs older than a retention window
    LogsCleanup {
        /// Delete logs older than this many days (1-365)
        #[arg(short, long, default_value = "90")]
        days: u32,

        /// Skip the confirmation step
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List system settings
    Settings,

    /// Update a system setting
    Set {
        /// Setting key
        key: String,

        /// New value
        value: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List organizations across the whole system
    Orgs {
        /// Page number (1-indexed)
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Organizations per page (max 100)
        #[arg(long, default_value = "50")]
        page_size: u32,
    },
}

/// Handle an admin command
pub fn handle_admin_command(ctx: &AppContext, cmd: AdminCommands) -> SpendwellResult<()> {
    let service = AdminService::new(&ctx.client, &ctx.audit);

    match cmd {
        AdminCommands::Stats => {
            let stats = service.stats()?;
            print!("{}", format_system_stats(&stats));
        }

        AdminCommands::Logs {
            level,
            category,
            page,
            page_size,
        } => {
            let logs = service.logs(level.as_deref(), category.as_deref(), page, page_size)?;
            println!("{}", format_log_page(&logs));
        }

        AdminCommands::LogsCleanup { days, yes } => {
            if !yes {
                println!(
                    "This permanently deletes system log entries older than {} days.",
                    days
                );
                println!("To proceed, run again with --yes:");
                println!("  spendwell admin logs-cleanup --days {} --yes", days);
                return Ok(());
            }

            let result = service.cleanup_logs(days)?;
            println!("Deleted {} log entries.", result.deleted_count);
        }

        AdminCommands::Settings => {
            let settings = service.settings()?;
            print!("{}", format_settings(&settings));
        }

        AdminCommands::Set {
            key,
            value,
            description,
        } => {
            let setting = service.update_setting(&key, &value, description.as_deref())?;
            println!(
                "Setting updated: {} = {}",
                setting.key,
                setting.value.as_deref().unwrap_or("-")
            );
        }

        AdminCommands::Orgs { page, page_size } => {
            let orgs = service.organizations(page, page_size)?;
            print!("{}", format_org_oversight(&orgs));
        }
    }

    Ok(())
}
