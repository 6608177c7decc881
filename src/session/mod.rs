//! Session context
//!
//! An explicit, sign-in-scoped context object holding the auth token, the
//! user's key-derivation parameters, the active organization, and cached
//! wrapped organization keys. Persisted as JSON under the config directory;
//! its lifetime is tied to sign-in/sign-out. Nothing here is ambient: every
//! component that needs session state receives this object explicitly.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SpendwellPaths;
use crate::crypto::KeyDerivationParams;
use crate::error::{SpendwellError, SpendwellResult};
use crate::models::{OrganizationId, UserId};

/// Per-sign-in client state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Bearer token for API calls
    pub token: String,

    /// The signed-in user
    pub user_id: UserId,

    /// When this session was established
    pub signed_in_at: DateTime<Utc>,

    /// Parameters for deriving the user's master key
    ///
    /// Stable across sign-ins so previously wrapped organization keys stay
    /// unwrappable.
    pub key_params: KeyDerivationParams,

    /// The organization subsequent commands operate against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_org: Option<OrganizationId>,

    /// Wrapped organization keys, cached by server-assigned organization id
    #[serde(default)]
    pub wrapped_org_keys: HashMap<OrganizationId, String>,
}

impl SessionContext {
    /// Start a fresh session
    pub fn sign_in(token: impl Into<String>, user_id: UserId) -> Self {
        Self {
            token: token.into(),
            user_id,
            signed_in_at: Utc::now(),
            key_params: KeyDerivationParams::new(),
            active_org: None,
            wrapped_org_keys: HashMap::new(),
        }
    }

    /// Re-authenticate while keeping key material associations intact
    pub fn renew(&mut self, token: impl Into<String>, user_id: UserId) {
        self.token = token.into();
        self.user_id = user_id;
        self.signed_in_at = Utc::now();
    }

    /// Cache a wrapped organization key under its server-assigned id
    pub fn remember_org_key(&mut self, org_id: OrganizationId, wrapped: String) {
        self.wrapped_org_keys.insert(org_id, wrapped);
    }

    /// Look up the cached wrapped key for an organization
    pub fn wrapped_key_for(&self, org_id: OrganizationId) -> Option<&str> {
        self.wrapped_org_keys.get(&org_id).map(String::as_str)
    }
}

/// Loads and persists the session context file
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the configured session file
    pub fn new(paths: &SpendwellPaths) -> Self {
        Self {
            path: paths.session_file(),
        }
    }

    /// Load the current session, if one exists
    pub fn load(&self) -> SpendwellResult<Option<SessionContext>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| SpendwellError::Io(format!("Failed to read session file: {}", e)))?;

        let session: SessionContext = serde_json::from_str(&contents)
            .map_err(|e| SpendwellError::Config(format!("Failed to parse session file: {}", e)))?;

        Ok(Some(session))
    }

    /// Persist the session context
    pub fn save(&self, session: &SessionContext) -> SpendwellResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SpendwellError::Io(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(session)
            .map_err(|e| SpendwellError::Json(format!("Failed to serialize session: {}", e)))?;

        std::fs::write(&self.path, contents)
            .map_err(|e| SpendwellError::Io(format!("Failed to write session file: {}", e)))?;

        Ok(())
    }

    /// Sign out: remove the persisted session
    pub fn clear(&self) -> SpendwellResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .map_err(|e| SpendwellError::Io(format!("Failed to remove session file: {}", e)))?;
        }
        Ok(())
    }
}
