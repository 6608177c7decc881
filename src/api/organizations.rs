//! Organization endpoints

use crate::error::SpendwellResult;
use crate::models::{CreateOrganizationRequest, OrganizationDetails, OrganizationItem};

use super::client::ApiClient;

impl ApiClient {
    /// List organizations the signed-in user belongs to
    pub fn list_organizations(&self) -> SpendwellResult<Vec<OrganizationItem>> {
        self.get("/api/organizations", &[], "Failed to list organizations")
    }

    /// Create an organization; the creator becomes its owner
    pub fn create_organization(
        &self,
        request: &CreateOrganizationRequest,
    ) -> SpendwellResult<OrganizationDetails> {
        self.post(
            "/api/organizations",
            request,
            "Failed to create organization",
        )
    }
}
