//! Display formatting for terminal output
//!
//! Provides utilities for formatting server data for terminal display,
//! including tables and size/percentage/age helpers.

pub mod admin;
pub mod format;
pub mod org;

pub use admin::{format_log_page, format_org_oversight, format_settings, format_system_stats};
pub use format::{format_age, format_percent, format_size};
pub use org::format_org_list;
