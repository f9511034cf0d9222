//! API Configuration Module
//!
//! Configuration for the HTTP server, CORS, and the default record type.
//! Loaded from environment variables with sensible defaults for
//! development.

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// API configuration loaded from `TYPEAHEAD_*` environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface to bind the server to.
    pub bind: String,

    /// Port to listen on.
    pub port: u16,

    /// Record type used when a request carries no `type` parameter.
    pub default_type: String,

    /// Fixture file loaded at startup; `None` uses the built-in sample data.
    pub fixture_path: Option<String>,

    // ========================================================================
    // CORS Configuration
    // ========================================================================
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Whether to allow credentials in CORS requests.
    pub cors_allow_credentials: bool,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3000,
            default_type: "cms.Page".to_string(),
            fixture_path: None,

            // CORS defaults: permissive for development
            cors_origins: Vec::new(), // Empty = allow all
            cors_allow_credentials: false,
            cors_max_age_secs: 86400, // 24 hours
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `TYPEAHEAD_BIND`: Interface to bind (default: 0.0.0.0)
    /// - `PORT` / `TYPEAHEAD_PORT`: Listen port (default: 3000)
    /// - `TYPEAHEAD_DEFAULT_TYPE`: Default record type (default: cms.Page)
    /// - `TYPEAHEAD_FIXTURE`: Fixture file path (default: built-in sample)
    /// - `TYPEAHEAD_CORS_ORIGINS`: Comma-separated origins (empty = allow all)
    /// - `TYPEAHEAD_CORS_ALLOW_CREDENTIALS`: "true" or "false" (default: false)
    /// - `TYPEAHEAD_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind = std::env::var("TYPEAHEAD_BIND").unwrap_or(defaults.bind);

        let port = std::env::var("PORT")
            .ok()
            .or_else(|| std::env::var("TYPEAHEAD_PORT").ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let default_type =
            std::env::var("TYPEAHEAD_DEFAULT_TYPE").unwrap_or(defaults.default_type);

        let fixture_path = std::env::var("TYPEAHEAD_FIXTURE").ok();

        let cors_origins = std::env::var("TYPEAHEAD_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let cors_allow_credentials = std::env::var("TYPEAHEAD_CORS_ALLOW_CREDENTIALS")
            .ok()
            .map(|s| s.to_lowercase() == "true")
            .unwrap_or(false);

        let cors_max_age_secs = std::env::var("TYPEAHEAD_CORS_MAX_AGE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.cors_max_age_secs);

        Self {
            bind,
            port,
            default_type,
            fixture_path,
            cors_origins,
            cors_allow_credentials,
            cors_max_age_secs,
        }
    }
}
