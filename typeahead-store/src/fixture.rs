//! Fixture documents: JSON model descriptions loaded into a registry.
//!
//! The dev server points `TYPEAHEAD_FIXTURE` at a fixture file; tests
//! build registries from inline documents. A built-in sample fixture
//! keeps the server usable with no configuration at all.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use typeahead_core::{FieldDef, ModelTag, Record, StoreError};

use crate::memory::MemoryModel;
use crate::registry::ModelRegistry;

/// Fixture loading errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed fixture document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Top-level fixture document.
#[derive(Debug, Deserialize)]
pub struct FixtureDoc {
    pub models: Vec<FixtureModel>,
}

/// One model description.
///
/// Omitted keys fall back to the `ModelSource` defaults: title-only
/// search, no live flag, no create factory, no records.
#[derive(Debug, Deserialize)]
pub struct FixtureModel {
    #[serde(rename = "type")]
    pub tag: ModelTag,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub search_fields: Vec<String>,
    #[serde(default)]
    pub live: bool,
    #[serde(default)]
    pub create: bool,
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Build a registry from a parsed fixture document.
pub fn registry_from_doc(doc: FixtureDoc) -> Result<ModelRegistry, FixtureError> {
    let mut registry = ModelRegistry::new();
    for model in doc.models {
        let mut source = MemoryModel::new();
        for field in model.fields {
            source = source.with_field(field.name, field.kind);
        }
        if !model.search_fields.is_empty() {
            source = source.with_search_fields(model.search_fields);
        }
        if model.live {
            source = source.with_live_state();
        }
        if model.create {
            source = source.with_create();
        }
        for record in model.records {
            source.insert(record)?;
        }
        registry.register(model.tag, Arc::new(source));
    }
    Ok(registry)
}

/// Parse a fixture document from JSON text.
pub fn registry_from_str(json: &str) -> Result<ModelRegistry, FixtureError> {
    let doc: FixtureDoc = serde_json::from_str(json)?;
    registry_from_doc(doc)
}

/// Load a fixture document from a file.
pub fn registry_from_path(path: impl AsRef<Path>) -> Result<ModelRegistry, FixtureError> {
    let json = fs::read_to_string(path)?;
    registry_from_str(&json)
}

/// The built-in development fixture.
pub fn sample_registry() -> Result<ModelRegistry, FixtureError> {
    registry_from_str(SAMPLE_FIXTURE)
}

const SAMPLE_FIXTURE: &str = r#"{
  "models": [
    {
      "type": "cms.Page",
      "live": true,
      "create": true,
      "records": [
        {"id": 1, "title": "Home"},
        {"id": 2, "title": "About us"},
        {"id": 3, "title": "Contact"},
        {"id": 4, "title": "Press kit", "live": false},
        {"id": 5, "title": "Careers"}
      ]
    },
    {
      "type": "cms.Tag",
      "fields": [{"name": "slug", "kind": "text"}],
      "search_fields": ["title", "slug"],
      "records": [
        {"id": 1, "title": "News", "fields": {"slug": "news"}},
        {"id": 2, "title": "Events", "fields": {"slug": "events"}}
      ]
    }
  ]
}"#;
