//! Error Types for the Typeahead API
//!
//! This module defines error handling for the HTTP layer, including:
//! - ApiError struct for structured error responses
//! - ErrorCode enum for categorizing errors
//! - IntoResponse implementation for Axum HTTP responses
//!
//! All errors are serialized as JSON with appropriate HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use typeahead_core::{FilterError, RegistryError, StoreError, TagError};

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
///
/// Each error code maps to a specific HTTP status code and represents
/// a category of error that can occur while serving typeahead requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================================================
    // Validation Errors (400)
    // ========================================================================
    /// Request contains invalid input data
    InvalidInput,

    /// Required parameter is missing from request
    MissingField,

    /// The requested record type is not registered
    UnknownType,

    /// The record type has no create-from-text factory
    CreateUnsupported,

    // ========================================================================
    // Authorization Errors (403)
    // ========================================================================
    /// Caller lacks the permission the operation requires
    Forbidden,

    // ========================================================================
    // Server Errors (500, 503)
    // ========================================================================
    /// Internal server error
    InternalError,

    /// Data-access operation failed
    StoreFailed,

    /// Service is temporarily unavailable
    ServiceUnavailable,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Validation errors
            ErrorCode::InvalidInput
            | ErrorCode::MissingField
            | ErrorCode::UnknownType
            | ErrorCode::CreateUnsupported => StatusCode::BAD_REQUEST,

            // Authorization errors
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,

            // Server errors
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            ErrorCode::InternalError | ErrorCode::StoreFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            // Validation
            ErrorCode::InvalidInput => "Invalid input data",
            ErrorCode::MissingField => "Required parameter is missing",
            ErrorCode::UnknownType => "Unknown record type",
            ErrorCode::CreateUnsupported => "Record type does not support creation",

            // Authorization
            ErrorCode::Forbidden => "Access forbidden",

            // Server
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StoreFailed => "Data access failed",
            ErrorCode::ServiceUnavailable => "Service temporarily unavailable",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error response for API operations.
///
/// This type is returned by all API endpoints when an error occurs and
/// provides a consistent error format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiError {
    /// Error code categorizing the error
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details (offending parameter, value, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a new API error with the given code, using the default message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
            details: None,
        }
    }

    /// Add additional details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    // ========================================================================
    // Convenience constructors for common errors
    // ========================================================================

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a MissingField error.
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingField,
            format!("Required parameter '{}' is missing", field),
        )
    }

    /// Create an UnknownType error.
    pub fn unknown_type(tag: impl fmt::Display) -> Self {
        Self::new(ErrorCode::UnknownType, format!("Unknown record type: {}", tag))
    }

    /// Create a CreateUnsupported error.
    pub fn create_unsupported(tag: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::CreateUnsupported,
            format!("Record type {} does not support creation from text", tag),
        )
    }

    /// Create a Forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Create a StoreFailed error.
    pub fn store_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreFailed, message)
    }

    /// Create a ServiceUnavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// ============================================================================
// AXUM INTEGRATION
// ============================================================================

/// Implement IntoResponse for ApiError to enable automatic error handling in
/// Axum.
///
/// This allows ApiError to be returned directly from Axum handlers:
/// ```ignore
/// async fn handler() -> Result<Json<Response>, ApiError> {
///     Err(ApiError::missing_field("ids"))
/// }
/// ```
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self);
        (status, body).into_response()
    }
}

// ============================================================================
// CONVERSIONS FROM CORE ERRORS
// ============================================================================

/// Convert from TagError to ApiError. A malformed tag is client input.
impl From<TagError> for ApiError {
    fn from(err: TagError) -> Self {
        ApiError::invalid_input(err.to_string())
    }
}

/// Convert from RegistryError to ApiError.
impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownType { tag } => ApiError::unknown_type(tag),
            RegistryError::Tag(err) => err.into(),
        }
    }
}

/// Convert from FilterError to ApiError. Coercion failures are client input.
impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        ApiError::invalid_input(err.to_string())
    }
}

/// Convert from StoreError to ApiError.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CreateUnsupported => ApiError::new(
                ErrorCode::CreateUnsupported,
                "Record type does not support creation from text",
            ),
            other => {
                // Log the full error and return a generic message to avoid
                // leaking store internals.
                tracing::error!("Store error: {:?}", other);
                ApiError::store_failed("Data access failed")
            }
        }
    }
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result type alias for API operations.
///
/// This is the standard result type used throughout the API layer.
pub type ApiResult<T> = Result<T, ApiError>;
