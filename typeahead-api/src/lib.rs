//! Typeahead API - HTTP Layer
//!
//! This crate provides the REST surface for the typeahead backend. It
//! exposes three Axum endpoints an admin widget talks to: substring
//! search, id-to-summary resolution, and permission-gated creation of
//! records from typed text, plus health probes and an OpenAPI document.
//!
//! Record types are served through the `ModelSource` seam from
//! typeahead-store; the handlers never touch storage directly.

pub mod auth;
pub mod config;
pub mod error;
pub mod macros;
pub mod openapi;
pub mod params;
pub mod render;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use auth::{add_permission_label, AuthConfig, AuthContext, AuthExtractor};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use openapi::ApiDoc;
pub use render::{render_record, render_records};
pub use routes::create_api_router;
pub use state::AppState;
pub use types::*;
