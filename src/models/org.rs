//! Organization data model
//!
//! Wire shapes for the organization endpoints. The wrapped organization key
//! is an opaque base64 string from the client's perspective once produced;
//! only the crypto module knows how to unwrap it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::OrganizationId;

/// Role of a user within an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgRole {
    Owner,
    Admin,
    Member,
    Viewer,
}

impl fmt::Display for OrgRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrgRole::Owner => write!(f, "owner"),
            OrgRole::Admin => write!(f, "admin"),
            OrgRole::Member => write!(f, "member"),
            OrgRole::Viewer => write!(f, "viewer"),
        }
    }
}

/// Lightweight organization entry from the list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationItem {
    pub id: OrganizationId,
    pub name: String,
    /// The caller's role in this organization
    pub role: OrgRole,
    pub member_count: u64,
    pub account_count: u64,
    pub created_at: NaiveDateTime,
    /// The caller's wrapped copy of the organization master key
    #[serde(default)]
    pub wrapped_org_key: Option<String>,
}

/// Request body for organization creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Organization master key wrapped with the creator's master key
    pub wrapped_org_key: String,
}

/// Full organization details returned after creation
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationDetails {
    pub id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub role: OrgRole,
    pub member_count: u64,
    pub account_count: u64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub wrapped_org_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_item_deserialize() {
        let raw = format!(
            r#"{{
                "id": "{}",
                "name": "Household",
                "role": "owner",
                "member_count": 2,
                "account_count": 3,
                "created_at": "2026-01-10T08:30:00",
                "wrapped_org_key": "b64key"
            }}"#,
            uuid::Uuid::new_v4()
        );

        let item: OrganizationItem = serde_json::from_str(&raw).unwrap();
        assert_eq!(item.name, "Household");
        assert_eq!(item.role, OrgRole::Owner);
        assert_eq!(item.wrapped_org_key.as_deref(), Some("b64key"));
    }

    #[test]
    fn test_missing_wrapped_key_is_none() {
        let raw = format!(
            r#"{{
                "id": "{}",
                "name": "Club",
                "role": "viewer",
                "member_count": 10,
                "account_count": 1,
                "created_at": "2026-02-01T12:00:00"
            }}"#,
            uuid::Uuid::new_v4()
        );

        let item: OrganizationItem = serde_json::from_str(&raw).unwrap();
        assert!(item.wrapped_org_key.is_none());
    }

    #[test]
    fn test_create_request_omits_empty_description() {
        let req = CreateOrganizationRequest {
            name: "Family".into(),
            description: None,
            wrapped_org_key: "wrapped".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("description"));
        assert!(json.contains("wrapped_org_key"));
    }
}
