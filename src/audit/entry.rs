//! Audit entry data structures
//!
//! Defines the structure of client-side audit log entries: which action
//! ran, what it targeted, and a free-form details object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client actions recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    BackupCreated,
    BackupRestored,
    OrganizationCreated,
    OrganizationSwitched,
    SettingUpdated,
    LogsCleaned,
    SignIn,
    SignOut,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::BackupCreated => write!(f, "backup_created"),
            AuditAction::BackupRestored => write!(f, "backup_restored"),
            AuditAction::OrganizationCreated => write!(f, "organization_created"),
            AuditAction::OrganizationSwitched => write!(f, "organization_switched"),
            AuditAction::SettingUpdated => write!(f, "setting_updated"),
            AuditAction::LogsCleaned => write!(f, "logs_cleaned"),
            AuditAction::SignIn => write!(f, "sign_in"),
            AuditAction::SignOut => write!(f, "sign_out"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the action ran (client clock)
    pub timestamp: DateTime<Utc>,
    /// What happened
    pub action: AuditAction,
    /// Identifier of the affected entity, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Action-specific context
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl AuditEntry {
    /// Create an entry with no details
    pub fn new(action: AuditAction, target: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            target,
            details: serde_json::Value::Null,
        }
    }

    /// Attach action-specific details
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serde() {
        let json = serde_json::to_string(&AuditAction::BackupRestored).unwrap();
        assert_eq!(json, "\"backup_restored\"");
    }

    #[test]
    fn test_entry_round_trip() {
        let entry = AuditEntry::new(AuditAction::BackupCreated, Some("acc-1".into()))
            .with_details(serde_json::json!({"transaction_count": 5}));

        let json = serde_json::to_string(&entry).unwrap();
        let back: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(back.action, AuditAction::BackupCreated);
        assert_eq!(back.target.as_deref(), Some("acc-1"));
        assert_eq!(back.details["transaction_count"], 5);
    }

    #[test]
    fn test_null_details_omitted() {
        let entry = AuditEntry::new(AuditAction::SignOut, None);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("details"));
        assert!(!json.contains("target"));
    }
}
