//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Handlers receive the
//! application context explicitly; there is no ambient state.

pub mod admin;
pub mod backup;
pub mod org;
pub mod session;

pub use admin::{handle_admin_command, AdminCommands};
pub use backup::{handle_backup_command, BackupCommands};
pub use org::{handle_org_command, OrgCommands};
pub use session::{handle_config, handle_login, handle_logout};

use crate::api::ApiClient;
use crate::audit::AuditLogger;
use crate::config::{Settings, SpendwellPaths};
use crate::session::{SessionContext, SessionStore};

/// Everything a command handler needs, passed explicitly
pub struct AppContext {
    pub paths: SpendwellPaths,
    pub settings: Settings,
    pub client: ApiClient,
    pub session_store: SessionStore,
    pub session: Option<SessionContext>,
    pub audit: AuditLogger,
}
