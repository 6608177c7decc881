//! Administrative data model
//!
//! Wire shapes for the admin endpoints: system statistics, the system log
//! viewer, system settings, and organization oversight. These mirror what
//! the server reports; aggregate numbers never expose encrypted content.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::OrganizationId;

/// System-wide statistics for the admin dashboard
#[derive(Debug, Clone, Deserialize)]
pub struct SystemStats {
    pub total_users: u64,
    pub total_organizations: u64,
    pub total_accounts: u64,
    pub total_transactions: u64,
    pub active_users_today: u64,
    pub active_users_week: u64,
    pub active_users_month: u64,
    pub database_size_mb: f64,
    pub avg_transactions_per_user: f64,
    pub avg_accounts_per_org: f64,
}

/// A single system log entry
#[derive(Debug, Clone, Deserialize)]
pub struct SystemLogEntry {
    pub id: Uuid,
    /// Log level (INFO, WARNING, ERROR, CRITICAL)
    pub level: String,
    /// Source category (auth, database, backup, system, admin)
    pub category: String,
    pub message: String,
    #[serde(default)]
    pub details: serde_json::Value,
    pub created_at: NaiveDateTime,
}

/// One page of system logs
#[derive(Debug, Clone, Deserialize)]
pub struct SystemLogPage {
    pub logs: Vec<SystemLogEntry>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl SystemLogPage {
    /// Total number of pages for this query
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size as u64)
    }
}

/// Response from the log cleanup endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LogCleanupResult {
    pub deleted_count: u64,
}

/// A configurable system setting
#[derive(Debug, Clone, Deserialize)]
pub struct SystemSetting {
    pub id: Uuid,
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub updated_at: NaiveDateTime,
}

/// Request body for updating a system setting
#[derive(Debug, Clone, Serialize)]
pub struct UpdateSettingRequest {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Per-organization statistics for admin oversight
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationStats {
    pub id: OrganizationId,
    pub name: String,
    pub member_count: u64,
    pub account_count: u64,
    pub transaction_count: u64,
    pub storage_used_mb: f64,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub last_activity: Option<NaiveDateTime>,
}
