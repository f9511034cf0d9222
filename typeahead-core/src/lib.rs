//! Typeahead Core - Shared Types
//!
//! Pure data structures for the typeahead service: model tags, field
//! schemas, records, filters, and queries. All other crates depend on
//! this. This crate contains ONLY data types and their parsing - no
//! storage, no HTTP.

pub mod error;
pub mod filter;
pub mod query;
pub mod record;
pub mod schema;
pub mod tag;

// Re-export commonly used types
pub use error::{CoreError, CoreResult, FilterError, RegistryError, StoreError, TagError};
pub use filter::{compile_filters, parse_boolean, FieldFilter, Lookup};
pub use query::RecordQuery;
pub use record::{Record, RecordId, Summary};
pub use schema::{FieldDef, FieldKind, FieldSchema};
pub use tag::ModelTag;
