//! Admin service
//!
//! Business logic for the system administration surface: stats, the log
//! viewer, log cleanup, system settings, and organization oversight.
//! Parameter bounds mirror what the server enforces so obviously bad
//! requests fail locally.

use crate::api::ApiClient;
use crate::audit::{AuditAction, AuditEntry, AuditLogger};
use crate::error::{SpendwellError, SpendwellResult};
use crate::models::{
    LogCleanupResult, OrganizationStats, SystemLogPage, SystemSetting, SystemStats,
    UpdateSettingRequest,
};

/// Maximum log page size accepted by the server
const MAX_LOG_PAGE_SIZE: u32 = 500;

/// Maximum organization page size accepted by the server
const MAX_ORG_PAGE_SIZE: u32 = 100;

/// Log retention window bounds for cleanup, in days
const CLEANUP_DAYS_RANGE: (u32, u32) = (1, 365);

/// Service for system administration
pub struct AdminService<'a> {
    client: &'a ApiClient,
    audit: &'a AuditLogger,
}

impl<'a> AdminService<'a> {
    /// Create a new admin service
    pub fn new(client: &'a ApiClient, audit: &'a AuditLogger) -> Self {
        Self { client, audit }
    }

    /// Fetch system-wide statistics
    pub fn stats(&self) -> SpendwellResult<SystemStats> {
        self.client.system_stats()
    }

    /// Fetch a page of system logs
    pub fn logs(
        &self,
        level: Option<&str>,
        category: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> SpendwellResult<SystemLogPage> {
        if page == 0 {
            return Err(SpendwellError::Validation(
                "Page numbers start at 1".into(),
            ));
        }
        if page_size == 0 || page_size > MAX_LOG_PAGE_SIZE {
            return Err(SpendwellError::Validation(format!(
                "Page size must be between 1 and {}",
                MAX_LOG_PAGE_SIZE
            )));
        }

        self.client.system_logs(level, category, page, page_size)
    }

    /// Delete logs older than the given number of days
    pub fn cleanup_logs(&self, days_old: u32) -> SpendwellResult<LogCleanupResult> {
        let (min, max) = CLEANUP_DAYS_RANGE;
        if days_old < min || days_old > max {
            return Err(SpendwellError::Validation(format!(
                "Retention must be between {} and {} days",
                min, max
            )));
        }

        let result = self.client.cleanup_logs(days_old)?;

        self.audit.log(
            &AuditEntry::new(AuditAction::LogsCleaned, None).with_details(serde_json::json!({
                "days_old": days_old,
                "deleted_count": result.deleted_count,
            })),
        )?;

        Ok(result)
    }

    /// Fetch all system settings
    pub fn settings(&self) -> SpendwellResult<Vec<SystemSetting>> {
        self.client.system_settings()
    }

    /// Update one system setting
    pub fn update_setting(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
    ) -> SpendwellResult<SystemSetting> {
        let key = key.trim();
        if key.is_empty() {
            return Err(SpendwellError::Validation(
                "Setting key cannot be empty".into(),
            ));
        }

        let request = UpdateSettingRequest {
            value: value.to_string(),
            description: description.map(str::to_string),
        };

        let setting = self.client.update_setting(key, &request)?;

        self.audit.log(
            &AuditEntry::new(AuditAction::SettingUpdated, Some(key.to_string()))
                .with_details(serde_json::json!({"value": setting.value})),
        )?;

        Ok(setting)
    }

    /// Fetch a page of organization statistics
    pub fn organizations(&self, page: u32, page_size: u32) -> SpendwellResult<Vec<OrganizationStats>> {
        if page == 0 {
            return Err(SpendwellError::Validation(
                "Page numbers start at 1".into(),
            ));
        }
        if page_size == 0 || page_size > MAX_ORG_PAGE_SIZE {
            return Err(SpendwellError::Validation(format!(
                "Page size must be between 1 and {}",
                MAX_ORG_PAGE_SIZE
            )));
        }

        self.client.admin_organizations(page, page_size)
    }
}
