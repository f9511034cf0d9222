//! Shared application state for Axum routers.

use std::sync::Arc;

use typeahead_store::ModelRegistry;

use crate::auth::AuthConfig;

/// Application-wide state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Registered record types.
    pub registry: Arc<ModelRegistry>,
    /// API key table for permission checks.
    pub auth: Arc<AuthConfig>,
    /// Record type used when a request carries no `type` parameter.
    pub default_type: String,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(
        registry: ModelRegistry,
        auth: AuthConfig,
        default_type: impl Into<String>,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            auth: Arc::new(auth),
            default_type: default_type.into(),
            start_time: std::time::Instant::now(),
        }
    }
}

// Use macro to reduce boilerplate for FromRef implementations
crate::impl_from_ref!(Arc<ModelRegistry>, registry);
crate::impl_from_ref!(Arc<AuthConfig>, auth);
