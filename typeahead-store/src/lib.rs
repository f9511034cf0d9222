//! Typeahead Store - Data Access Seam
//!
//! Defines the `ModelSource` capability trait the HTTP layer queries
//! through, the tag registry that resolves record types to sources, and
//! an in-memory implementation for development and tests. Backing a real
//! data platform means implementing `ModelSource` and registering it.

pub mod fixture;
pub mod memory;
pub mod registry;
pub mod source;

// Re-export commonly used types
pub use fixture::{
    registry_from_doc, registry_from_path, registry_from_str, sample_registry, FixtureDoc,
    FixtureError, FixtureModel,
};
pub use memory::MemoryModel;
pub use registry::ModelRegistry;
pub use source::ModelSource;
