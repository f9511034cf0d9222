//! Authentication and Permission Checks
//!
//! Identity is externally owned; this module consumes only a permission
//! seam. Callers present an `x-api-key` header resolved against a
//! config-driven key table. A missing or unknown key yields the anonymous
//! context with no grants, never a rejection: read endpoints work without
//! identity, and the create endpoint checks permissions explicitly.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use typeahead_core::ModelTag;

/// Grant-everything wildcard permission.
pub const WILDCARD_PERMISSION: &str = "*";

// ============================================================================
// AUTH CONTEXT
// ============================================================================

/// Resolved caller identity with granted permission labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Key the caller authenticated as, `None` for anonymous.
    pub actor: Option<String>,

    /// Granted permission labels.
    pub permissions: HashSet<String>,
}

impl AuthContext {
    /// The context of a caller with no identity and no grants.
    pub fn anonymous() -> Self {
        Self {
            actor: None,
            permissions: HashSet::new(),
        }
    }

    /// A named context with the given permission labels.
    pub fn with_permissions(
        actor: impl Into<String>,
        permissions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            actor: Some(actor.into()),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the caller holds a permission label.
    ///
    /// Exact match against the granted labels, with `"*"` granting
    /// everything.
    pub fn has_perm(&self, label: &str) -> bool {
        self.permissions.contains(WILDCARD_PERMISSION) || self.permissions.contains(label)
    }

    /// Whether this is the anonymous context.
    pub fn is_anonymous(&self) -> bool {
        self.actor.is_none()
    }
}

/// The add-permission label for a record type.
///
/// Follows the platform convention `"<app>.add_<model>"` with the model
/// name lowercased.
pub fn add_permission_label(tag: &ModelTag) -> String {
    format!(
        "{}.add_{}",
        tag.app_label(),
        tag.model_name().to_lowercase()
    )
}

// ============================================================================
// AUTH CONFIGURATION
// ============================================================================

/// API key table mapping keys to granted permission labels.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    api_keys: HashMap<String, HashSet<String>>,
}

impl AuthConfig {
    /// Create AuthConfig from environment variables.
    ///
    /// `TYPEAHEAD_API_KEYS` holds comma-separated entries of the form
    /// `key=perm|perm` (e.g. `editor=blog.add_article,admin=*`). An unset
    /// variable leaves the table empty, which makes every caller anonymous.
    pub fn from_env() -> Self {
        std::env::var("TYPEAHEAD_API_KEYS")
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    /// Parse a key table from its env-var syntax.
    ///
    /// Entries without a `=` are skipped with a warning; empty permission
    /// segments are dropped.
    pub fn parse(raw: &str) -> Self {
        let mut api_keys = HashMap::new();
        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match entry.split_once('=') {
                Some((key, perms)) if !key.trim().is_empty() => {
                    let perms: HashSet<String> = perms
                        .split('|')
                        .map(|p| p.trim().to_string())
                        .filter(|p| !p.is_empty())
                        .collect();
                    api_keys.insert(key.trim().to_string(), perms);
                }
                _ => {
                    tracing::warn!(entry, "Skipping malformed API key entry");
                }
            }
        }
        Self { api_keys }
    }

    /// Add a key with permissions (builder style, used by tests and
    /// embedded setups).
    pub fn with_key(
        mut self,
        key: impl Into<String>,
        permissions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.api_keys.insert(
            key.into(),
            permissions.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Resolve a presented key to a caller context.
    ///
    /// Unknown and absent keys both resolve to the anonymous context.
    pub fn context_for(&self, api_key: Option<&str>) -> AuthContext {
        match api_key.and_then(|key| self.api_keys.get_key_value(key)) {
            Some((key, permissions)) => AuthContext {
                actor: Some(key.clone()),
                permissions: permissions.clone(),
            },
            None => AuthContext::anonymous(),
        }
    }

    /// Whether the key table is empty.
    pub fn is_empty(&self) -> bool {
        self.api_keys.is_empty()
    }
}

// ============================================================================
// EXTRACTOR
// ============================================================================

/// Axum extractor resolving the caller context from the `x-api-key`
/// header.
///
/// Extraction is infallible: a missing or unknown key yields the
/// anonymous context.
#[derive(Debug, Clone)]
pub struct AuthExtractor(pub AuthContext);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthExtractor
where
    S: Send + Sync,
    Arc<AuthConfig>: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<AuthConfig>::from_ref(state);
        let api_key = parts
            .headers
            .get("x-api-key")
            .and_then(|h| h.to_str().ok());
        Ok(AuthExtractor(config.context_for(api_key)))
    }
}
