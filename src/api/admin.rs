//! Administrative endpoints
//!
//! All of these require system-admin rights server-side; a 403 is mapped
//! to the fixed "administrator privileges required" error.

use crate::error::SpendwellResult;
use crate::models::{
    LogCleanupResult, OrganizationStats, SystemLogPage, SystemSetting, SystemStats,
    UpdateSettingRequest,
};

use super::client::{require_admin, ApiClient};

impl ApiClient {
    /// Fetch system-wide statistics
    pub fn system_stats(&self) -> SpendwellResult<SystemStats> {
        require_admin(self.get("/api/admin/stats", &[], "Failed to fetch system stats"))
    }

    /// Fetch a page of system logs, optionally filtered by level and category
    pub fn system_logs(
        &self,
        level: Option<&str>,
        category: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> SpendwellResult<SystemLogPage> {
        let mut query: Vec<(&str, String)> = vec![
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        if let Some(level) = level {
            query.push(("level", level.to_string()));
        }
        if let Some(category) = category {
            query.push(("category", category.to_string()));
        }

        require_admin(self.get("/api/admin/logs", &query, "Failed to fetch system logs"))
    }

    /// Delete system logs older than the given number of days
    pub fn cleanup_logs(&self, days_old: u32) -> SpendwellResult<LogCleanupResult> {
        let query = [("days_old", days_old.to_string())];
        require_admin(self.delete(
            "/api/admin/logs/cleanup",
            &query,
            "Failed to clean up system logs",
        ))
    }

    /// Fetch all system settings
    pub fn system_settings(&self) -> SpendwellResult<Vec<SystemSetting>> {
        require_admin(self.get(
            "/api/admin/settings",
            &[],
            "Failed to fetch system settings",
        ))
    }

    /// Update one system setting by key
    pub fn update_setting(
        &self,
        key: &str,
        request: &UpdateSettingRequest,
    ) -> SpendwellResult<SystemSetting> {
        require_admin(self.put(
            &format!("/api/admin/settings/{}", key),
            request,
            "Failed to update system setting",
        ))
    }

    /// Fetch a page of organization statistics for oversight
    pub fn admin_organizations(
        &self,
        page: u32,
        page_size: u32,
    ) -> SpendwellResult<Vec<OrganizationStats>> {
        let query = [
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        require_admin(self.get(
            "/api/admin/organizations",
            &query,
            "Failed to fetch organizations",
        ))
    }
}
