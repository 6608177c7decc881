//! Organization display formatting

use crate::models::{OrganizationId, OrganizationItem};

use super::format::format_age;

/// Format the user's organizations as a table
///
/// The active organization (if any) is marked with an asterisk.
pub fn format_org_list(orgs: &[OrganizationItem], active: Option<OrganizationId>) -> String {
    if orgs.is_empty() {
        return "You are not a member of any organization.\nCreate one with: spendwell org create <name>".to_string();
    }

    let name_width = orgs.iter().map(|o| o.name.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "   {:<name_width$}  {:<8}  {:>7}  {:>8}  {}\n",
        "Name",
        "Role",
        "Members",
        "Accounts",
        "Age",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "   {:-<name_width$}  {:-<8}  {:->7}  {:->8}  {:-<6}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for org in orgs {
        let marker = if active == Some(org.id) { " * " } else { "   " };
        output.push_str(&format!(
            "{}{:<name_width$}  {:<8}  {:>7}  {:>8}  {}\n",
            marker,
            org.name,
            org.role.to_string(),
            org.member_count,
            org.account_count,
            format_age(org.created_at),
            name_width = name_width,
        ));
    }

    if active.is_some() {
        output.push_str("\n * active organization\n");
    }

    output
}
