//! Core data models
//!
//! Strongly-typed IDs plus the wire shapes exchanged with the server for
//! backups, organizations, and administration.

pub mod admin;
pub mod backup;
pub mod ids;
pub mod org;

pub use admin::{
    LogCleanupResult, OrganizationStats, SystemLogEntry, SystemLogPage, SystemSetting,
    SystemStats, UpdateSettingRequest,
};
pub use backup::{
    BackupDocument, BackupReceipt, CreateBackupRequest, RestoreMode, RestoreOutcome,
    RestoreRequest, BACKUP_EXTENSION, PLATFORM_MARKER, SUPPORTED_FORMAT_VERSION,
};
pub use ids::{AccountId, OrganizationId, UserId};
pub use org::{
    CreateOrganizationRequest, OrgRole, OrganizationDetails, OrganizationItem,
};
