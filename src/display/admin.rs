//! Admin display formatting
//!
//! Formats system statistics, logs, settings, and organization oversight
//! data for terminal output.

use crate::models::{OrganizationStats, SystemLogPage, SystemSetting, SystemStats};

use super::format::{format_age, format_percent, format_size};

/// Format the system stats dashboard
pub fn format_system_stats(stats: &SystemStats) -> String {
    let mut output = String::new();

    output.push_str("System Statistics\n");
    output.push_str("=================\n");
    output.push_str(&format!("Users:          {}\n", stats.total_users));
    output.push_str(&format!("Organizations:  {}\n", stats.total_organizations));
    output.push_str(&format!("Accounts:       {}\n", stats.total_accounts));
    output.push_str(&format!("Transactions:   {}\n", stats.total_transactions));
    output.push('\n');
    output.push_str(&format!(
        "Active today:   {} ({} of all users)\n",
        stats.active_users_today,
        format_percent(stats.active_users_today, stats.total_users)
    ));
    output.push_str(&format!(
        "Active 7 days:  {} ({})\n",
        stats.active_users_week,
        format_percent(stats.active_users_week, stats.total_users)
    ));
    output.push_str(&format!(
        "Active 30 days: {} ({})\n",
        stats.active_users_month,
        format_percent(stats.active_users_month, stats.total_users)
    ));
    output.push('\n');
    output.push_str(&format!(
        "Database size:  {}\n",
        format_size((stats.database_size_mb * 1024.0 * 1024.0) as u64)
    ));
    output.push_str(&format!(
        "Avg transactions/user: {:.2}\n",
        stats.avg_transactions_per_user
    ));
    output.push_str(&format!(
        "Avg accounts/org:      {:.2}\n",
        stats.avg_accounts_per_org
    ));

    output
}

/// Format one page of system logs as a table
pub fn format_log_page(page: &SystemLogPage) -> String {
    if page.logs.is_empty() {
        return "No log entries match the filters.".to_string();
    }

    let level_width = page
        .logs
        .iter()
        .map(|l| l.level.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let category_width = page
        .logs
        .iter()
        .map(|l| l.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<level_width$}  {:<category_width$}  {:>6}  {}\n",
        "Level",
        "Category",
        "Age",
        "Message",
        level_width = level_width,
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<level_width$}  {:-<category_width$}  {:->6}  {:-<40}\n",
        "",
        "",
        "",
        "",
        level_width = level_width,
        category_width = category_width,
    ));

    for entry in &page.logs {
        output.push_str(&format!(
            "{:<level_width$}  {:<category_width$}  {:>6}  {}\n",
            entry.level,
            entry.category,
            format_age(entry.created_at),
            entry.message,
            level_width = level_width,
            category_width = category_width,
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Page {} of {} ({} entries total)",
        page.page,
        page.page_count().max(1),
        page.total
    ));

    output
}

/// Format the system settings list
pub fn format_settings(settings: &[SystemSetting]) -> String {
    if settings.is_empty() {
        return "No system settings defined.".to_string();
    }

    let key_width = settings
        .iter()
        .map(|s| s.key.len())
        .max()
        .unwrap_or(3)
        .max(3);

    let mut output = String::new();
    output.push_str(&format!("{:<key_width$}  {:<20}  {}\n", "Key", "Value", "Description"));
    output.push_str(&format!("{:-<key_width$}  {:-<20}  {:-<30}\n", "", "", ""));

    for setting in settings {
        output.push_str(&format!(
            "{:<key_width$}  {:<20}  {}\n",
            setting.key,
            setting.value.as_deref().unwrap_or("-"),
            setting.description.as_deref().unwrap_or(""),
        ));
    }

    output
}

/// Format the organization oversight table
pub fn format_org_oversight(orgs: &[OrganizationStats]) -> String {
    if orgs.is_empty() {
        return "No organizations found.".to_string();
    }

    let name_width = orgs.iter().map(|o| o.name.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>7}  {:>8}  {:>12}  {:>10}  {}\n",
        "Name",
        "Members",
        "Accounts",
        "Transactions",
        "Storage",
        "Last activity",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->7}  {:->8}  {:->12}  {:->10}  {:-<13}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for org in orgs {
        let last_activity = org
            .last_activity
            .map(|t| format!("{} ago", format_age(t)))
            .unwrap_or_else(|| "never".to_string());

        output.push_str(&format!(
            "{:<name_width$}  {:>7}  {:>8}  {:>12}  {:>10}  {}\n",
            org.name,
            org.member_count,
            org.account_count,
            org.transaction_count,
            format_size((org.storage_used_mb * 1024.0 * 1024.0) as u64),
            last_activity,
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SystemLogEntry;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_stats() -> SystemStats {
        SystemStats {
            total_users: 40,
            total_organizations: 8,
            total_accounts: 20,
            total_transactions: 1000,
            active_users_today: 10,
            active_users_week: 20,
            active_users_month: 30,
            database_size_mb: 2.0,
            avg_transactions_per_user: 25.0,
            avg_accounts_per_org: 2.5,
        }
    }

    #[test]
    fn test_stats_include_percentages() {
        let output = format_system_stats(&sample_stats());
        assert!(output.contains("Users:          40"));
        assert!(output.contains("25%"));
        assert!(output.contains("2 MB"));
    }

    #[test]
    fn test_empty_log_page() {
        let page = SystemLogPage {
            logs: Vec::new(),
            total: 0,
            page: 1,
            page_size: 100,
        };
        assert!(format_log_page(&page).contains("No log entries"));
    }

    #[test]
    fn test_log_page_footer() {
        let page = SystemLogPage {
            logs: vec![SystemLogEntry {
                id: Uuid::new_v4(),
                level: "INFO".into(),
                category: "backup".into(),
                message: "Backup created".into(),
                details: serde_json::Value::Null,
                created_at: Utc::now().naive_utc(),
            }],
            total: 250,
            page: 2,
            page_size: 100,
        };
        let output = format_log_page(&page);
        assert!(output.contains("Backup created"));
        assert!(output.contains("Page 2 of 3 (250 entries total)"));
    }

    #[test]
    fn test_empty_settings() {
        assert!(format_settings(&[]).contains("No system settings"));
    }

    #[test]
    fn test_org_oversight_never_active() {
        let orgs = vec![OrganizationStats {
            id: crate::models::OrganizationId::new(),
            name: "Dormant".into(),
            member_count: 1,
            account_count: 0,
            transaction_count: 0,
            storage_used_mb: 0.0,
            created_at: Utc::now().naive_utc(),
            last_activity: None,
        }];
        let output = format_org_oversight(&orgs);
        assert!(output.contains("Dormant"));
        assert!(output.contains("never"));
    }
}
