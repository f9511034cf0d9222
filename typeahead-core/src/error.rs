//! Error types for typeahead operations

use thiserror::Error;

/// Record type tag errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("Malformed type tag '{tag}': expected '<app>.<Model>'")]
    MissingSeparator { tag: String },

    #[error("Malformed type tag '{tag}': empty app or model segment")]
    EmptySegment { tag: String },
}

/// Registry lookup errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown record type: {tag}")]
    UnknownType { tag: String },

    #[error(transparent)]
    Tag(#[from] TagError),
}

/// Ad-hoc field filter errors.
///
/// Unknown parameter names and unknown lookup suffixes are skipped, not
/// reported; the only failure is a value that cannot be coerced to the
/// declared field kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("'{value}' is not a valid value for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Data-access layer errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record type does not support creation from text")]
    CreateUnsupported,

    #[error("Create failed: {reason}")]
    CreateFailed { reason: String },

    #[error("Query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Master error type for all typeahead errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Tag error: {0}")]
    Tag(#[from] TagError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for typeahead operations.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// TESTS
// =============================================================================
