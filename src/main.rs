use anyhow::Result;
use clap::{Parser, Subcommand};

use spendwell::api::ApiClient;
use spendwell::audit::AuditLogger;
use spendwell::cli::{
    handle_admin_command, handle_backup_command, handle_config, handle_login, handle_logout,
    handle_org_command, AdminCommands, AppContext, BackupCommands, OrgCommands,
};
use spendwell::config::{paths::SpendwellPaths, settings::Settings};
use spendwell::session::SessionStore;

#[derive(Parser)]
#[command(
    name = "spendwell",
    version,
    about = "Terminal client for the Spendwell expense tracker",
    long_about = "Spendwell CLI talks to a Spendwell server: create and restore \
                  encrypted account backups, manage organizations, and administer \
                  the system, all without the server ever seeing plaintext data."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with a server-issued token
    Login {
        /// Bearer token issued by the server
        #[arg(long)]
        token: String,

        /// Your user ID
        #[arg(long)]
        user: String,
    },

    /// Sign out and discard the session
    Logout,

    /// Backup and restore commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Organization management commands
    #[command(subcommand)]
    Org(OrgCommands),

    /// System administration commands (admin only)
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings, and the session context
    let paths = SpendwellPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let session_store = SessionStore::new(&paths);
    let session = session_store.load()?;

    let client = ApiClient::new(&settings, session.as_ref().map(|s| s.token.clone()))?;
    let audit = AuditLogger::new(paths.audit_log());

    let mut ctx = AppContext {
        paths,
        settings,
        client,
        session_store,
        session,
        audit,
    };

    match cli.command {
        Some(Commands::Login { token, user }) => {
            handle_login(&mut ctx, token, user)?;
        }
        Some(Commands::Logout) => {
            handle_logout(&mut ctx)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&mut ctx, cmd)?;
        }
        Some(Commands::Org(cmd)) => {
            handle_org_command(&mut ctx, cmd)?;
        }
        Some(Commands::Admin(cmd)) => {
            handle_admin_command(&ctx, cmd)?;
        }
        Some(Commands::Config) => {
            handle_config(&ctx)?;
        }
        None => {
            println!("Spendwell - terminal client for the Spendwell expense tracker");
            println!();
            println!("Run 'spendwell --help' for usage information.");
            println!("Run 'spendwell config' to see where data is stored.");
        }
    }

    Ok(())
}
