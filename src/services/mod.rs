//! Business logic layer
//!
//! Services sit between the CLI handlers and the API client: they validate
//! input, call the server, maintain the session context, and record audit
//! entries for mutations.

pub mod admin;
pub mod organization;

pub use admin::AdminService;
pub use organization::OrganizationService;
