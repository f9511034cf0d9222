//! Typeahead API Server Entry Point
//!
//! Bootstraps configuration, loads the record type registry from a fixture
//! file (or the built-in sample data), and starts the Axum HTTP server.

use std::net::SocketAddr;

use axum::Router;
use typeahead_api::{
    create_api_router, telemetry::init_tracing, ApiConfig, ApiError, ApiResult, AppState,
    AuthConfig,
};
use typeahead_store::{fixture, ModelRegistry};

#[tokio::main]
async fn main() -> ApiResult<()> {
    init_tracing()?;

    let config = ApiConfig::from_env();
    let auth = AuthConfig::from_env();
    if auth.is_empty() {
        tracing::warn!(
            "No API keys configured; every create request will be denied. \
             Set TYPEAHEAD_API_KEYS to grant add permissions."
        );
    }

    let registry = load_registry(&config)?;
    tracing::info!(
        models = registry.len(),
        default_type = %config.default_type,
        "Registry loaded"
    );

    let state = AppState::new(registry, auth, config.default_type.clone());
    let app: Router = create_api_router(state, &config);

    let addr = resolve_bind_addr(&config)?;
    tracing::info!(%addr, "Starting typeahead API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

/// Build the registry from `TYPEAHEAD_FIXTURE` when set, otherwise fall
/// back to the built-in sample data so a bare `cargo run` serves something.
fn load_registry(config: &ApiConfig) -> ApiResult<ModelRegistry> {
    match &config.fixture_path {
        Some(path) => {
            tracing::info!(%path, "Loading registry fixture");
            fixture::registry_from_path(path).map_err(|e| {
                ApiError::internal_error(format!("Failed to load fixture {}: {}", path, e))
            })
        }
        None => fixture::sample_registry()
            .map_err(|e| ApiError::internal_error(format!("Invalid sample fixture: {}", e))),
    }
}

fn resolve_bind_addr(config: &ApiConfig) -> ApiResult<SocketAddr> {
    let addr = format!("{}:{}", config.bind, config.port);
    addr.parse::<SocketAddr>()
        .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
}
