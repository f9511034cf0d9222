//! The `ModelSource` capability trait.

use std::fmt;

use typeahead_core::{FieldSchema, Record, RecordQuery, StoreError};

/// A queryable record type exposed to the typeahead endpoints.
///
/// Implementations adapt one backing model (a page type, a snippet, a
/// tag table) to the query shape the handlers build. Everything beyond
/// `schema` and `search` is an optional capability with a conservative
/// default, so a minimal source is a two-method impl.
pub trait ModelSource: Send + Sync {
    // === Introspection ===

    /// Declared fields of this model, used to compile ad-hoc filters.
    fn schema(&self) -> &FieldSchema;

    /// Fields the search disjunction runs over.
    fn search_fields(&self) -> Vec<String> {
        vec!["title".to_string()]
    }

    /// Whether records of this model carry a meaningful live flag.
    /// Live-aware sources are queried with `live_only` set.
    fn has_live_state(&self) -> bool {
        false
    }

    // === Query Execution ===

    /// Execute a query. Result order is the source's store order.
    fn search(&self, query: &RecordQuery) -> Result<Vec<Record>, StoreError>;

    // === Rendering Hooks ===

    /// Swap a record for its most specialized representation before
    /// rendering. Identity by default.
    fn specific(&self, record: Record) -> Record {
        record
    }

    /// Display-label override. `None` falls back to the record title.
    fn label(&self, _record: &Record) -> Option<String> {
        None
    }

    // === Create-From-Text ===

    /// Whether this model supports creating records from free text.
    fn can_create(&self) -> bool {
        false
    }

    /// Create and persist a record titled with the given text.
    fn create(&self, _text: &str) -> Result<Record, StoreError> {
        Err(StoreError::CreateUnsupported)
    }
}

impl fmt::Debug for dyn ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSource").finish_non_exhaustive()
    }
}
