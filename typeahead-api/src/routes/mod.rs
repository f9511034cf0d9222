//! REST API Routes Module
//!
//! This module contains the route handlers for the typeahead endpoints.
//!
//! Includes:
//! - Search endpoint polled on every keystroke
//! - Object resolution for re-rendering stored selections
//! - Create-from-text for permission-gated record minting
//! - Health check endpoints (Kubernetes-compatible)
//! - CORS support for browser-based admin UIs

pub mod create;
pub mod health;
pub mod objects;
pub mod search;

use std::time::Duration;

use axum::{
    http::{header, header::HeaderName, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::openapi::ApiDoc;
use crate::state::AppState;

// Re-export route creation functions for convenience
pub use health::create_router as health_router;
pub use objects::create_router as objects_router;
pub use search::create_router as search_router;

// ============================================================================
// OPENAPI ENDPOINT
// ============================================================================

/// Handler for /openapi.json endpoint.
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// In development mode (empty origins), allows all origins.
/// In production mode, only allows configured origins.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-api-key"),
        ])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        // Development mode: allow all origins
        tracing::info!("CORS: Development mode - allowing all origins");
        cors.allow_origin(Any).allow_headers(Any)
    } else {
        // Production mode: only allow configured origins
        tracing::info!(
            "CORS: Production mode - allowing origins: {:?}",
            config.cors_origins
        );
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        if config.cors_allow_credentials {
            cors.allow_origin(origins).allow_credentials(true)
        } else {
            cors.allow_origin(origins)
        }
    }
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the complete API router.
///
/// Routes:
/// - /search - Substring search with field filters (public)
/// - /objects - Id-to-summary resolution (public)
/// - /create - Create-from-text (permission checked per request)
/// - /health/* - Liveness and readiness probes
/// - /openapi.json - OpenAPI spec
///
/// Requests carry an optional `x-api-key` header; unknown and absent keys
/// resolve to an anonymous caller rather than a 401, matching the lenient
/// read surface.
pub fn create_api_router(state: AppState, config: &ApiConfig) -> Router {
    let router = Router::new()
        .nest("/search", search::create_router(state.clone()))
        .nest("/objects", objects::create_router(state.clone()))
        .nest("/create", create::create_router(state.clone()))
        .nest("/health", health::create_router(state))
        .route("/openapi.json", get(openapi_json));

    let cors = build_cors_layer(config);

    router.layer(TraceLayer::new_for_http()).layer(cors)
}
