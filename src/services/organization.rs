//! Organization service
//!
//! Business logic for listing, creating, and switching organizations.
//! Creation owns the client side of the E2EE handshake: it generates a
//! fresh organization master key, wraps it under the user's master key,
//! and submits the wrapped key with the create request. The wrapped key is
//! cached in the session context only under the organization id the server
//! assigns, so no temporary identifier is ever involved.

use crate::api::ApiClient;
use crate::audit::{AuditAction, AuditEntry, AuditLogger};
use crate::crypto::{derive_master_key, wrap_key, SecretKey};
use crate::error::{SpendwellError, SpendwellResult};
use crate::models::{
    CreateOrganizationRequest, OrganizationDetails, OrganizationId, OrganizationItem,
};
use crate::session::SessionContext;

/// Service for organization management
pub struct OrganizationService<'a> {
    client: &'a ApiClient,
    session: &'a mut SessionContext,
    audit: &'a AuditLogger,
}

impl<'a> OrganizationService<'a> {
    /// Create a new organization service
    pub fn new(
        client: &'a ApiClient,
        session: &'a mut SessionContext,
        audit: &'a AuditLogger,
    ) -> Self {
        Self {
            client,
            session,
            audit,
        }
    }

    /// List organizations the user belongs to
    pub fn list(&self) -> SpendwellResult<Vec<OrganizationItem>> {
        self.client.list_organizations()
    }

    /// Create a new organization
    ///
    /// The passphrase is needed to derive the master key that wraps the new
    /// organization key. The caller is responsible for prompting.
    pub fn create(
        &mut self,
        name: &str,
        description: Option<&str>,
        passphrase: &str,
    ) -> SpendwellResult<OrganizationDetails> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SpendwellError::Validation(
                "Organization name cannot be empty".into(),
            ));
        }

        let master = derive_master_key(passphrase, &self.session.key_params)?;
        let org_key = SecretKey::generate();
        let wrapped = wrap_key(&org_key, &master)?;

        let request = CreateOrganizationRequest {
            name: name.to_string(),
            description: description.map(str::to_string),
            wrapped_org_key: wrapped.clone(),
        };

        let org = self.client.create_organization(&request)?;

        // Cache under the server-assigned id; make the first org the active one
        self.session.remember_org_key(org.id, wrapped);
        if self.session.active_org.is_none() {
            self.session.active_org = Some(org.id);
        }

        self.audit.log(
            &AuditEntry::new(
                AuditAction::OrganizationCreated,
                Some(org.id.as_uuid().to_string()),
            )
            .with_details(serde_json::json!({"name": org.name})),
        )?;

        Ok(org)
    }

    /// Switch the active organization
    ///
    /// Verifies membership against the server before recording the switch.
    pub fn switch(&mut self, org_id: OrganizationId) -> SpendwellResult<OrganizationItem> {
        let orgs = self.client.list_organizations()?;

        let org = orgs
            .into_iter()
            .find(|o| o.id == org_id)
            .ok_or_else(|| SpendwellError::organization_not_found(org_id.to_string()))?;

        self.session.active_org = Some(org.id);

        // Keep the wrapped key cache warm when the server returned one
        if let Some(wrapped) = &org.wrapped_org_key {
            self.session.remember_org_key(org.id, wrapped.clone());
        }

        self.audit.log(&AuditEntry::new(
            AuditAction::OrganizationSwitched,
            Some(org.id.as_uuid().to_string()),
        ))?;

        Ok(org)
    }

    /// Find an organization by name or id string
    pub fn find(&self, identifier: &str) -> SpendwellResult<Option<OrganizationItem>> {
        let orgs = self.client.list_organizations()?;

        // Try by name first (case-insensitive)
        if let Some(org) = orgs
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(identifier))
        {
            return Ok(Some(org.clone()));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<OrganizationId>() {
            return Ok(orgs.into_iter().find(|o| o.id == id));
        }

        Ok(None)
    }
}
