//! Tracing Subscriber Initialization
//!
//! Structured logging for the server binary. Log verbosity is driven by
//! `RUST_LOG`; without it, the typeahead crates log at info and tower-http
//! at debug so per-request lines show up in development.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ApiError, ApiResult};

/// Initialize the tracing subscriber.
///
/// This function should be called once at application startup before any
/// tracing occurs. Calling it a second time fails because the global
/// subscriber is already set.
pub fn init_tracing() -> ApiResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("typeahead_api=info,typeahead_store=info,tower_http=debug,info")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| ApiError::internal_error(format!("Failed to init subscriber: {}", e)))?;

    Ok(())
}
