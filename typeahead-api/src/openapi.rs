//! OpenAPI Specification for the Typeahead API
//!
//! This module defines the OpenAPI document for the typeahead REST API.
//! It uses utoipa to generate the OpenAPI specification from Rust types
//! and route annotations.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::{ApiError, ErrorCode};
use crate::types::{CreateForm, ItemsResponse};

// Import route modules for path references
use crate::routes::{create, health, objects, search};

// Import domain types from typeahead-core
use typeahead_core::Summary;

/// OpenAPI document for the Typeahead API.
///
/// This struct generates the complete OpenAPI specification for the API,
/// including all schemas, paths, and security definitions.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Typeahead API",
        version = "0.2.0",
        description = "Search-and-select autocomplete backend for content-management admin UIs",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local Development")
    ),
    tags(
        (name = "Typeahead", description = "Search, id resolution, and create-from-text"),
        (name = "Health", description = "Liveness and readiness probes")
    ),
    paths(
        search::search,
        objects::objects,
        create::create,
        health::ping,
        health::liveness,
        health::readiness,
    ),
    components(
        schemas(
            // === Error Types ===
            ApiError, ErrorCode,

            // === Request/Response Types ===
            CreateForm, ItemsResponse,

            // === Core Domain Types (from typeahead-core) ===
            Summary,

            // === Health Types ===
            health::HealthResponse, health::HealthStatus,
            health::HealthDetails, health::ComponentHealth,
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security scheme modifier for OpenAPI document.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            // API Key authentication (header)
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-api-key"))),
            );
        }
    }
}

impl ApiDoc {
    /// Generate OpenAPI spec as JSON string.
    pub fn to_json() -> Result<String, serde_json::Error> {
        let openapi = Self::openapi();
        serde_json::to_string_pretty(&openapi)
    }
}
