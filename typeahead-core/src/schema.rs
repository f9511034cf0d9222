//! Declared field schemas for registered record types.
//!
//! The ad-hoc filter layer introspects a type's schema to decide which
//! query-string parameters name real fields and how to coerce their values.

use serde::{Deserialize, Serialize};

/// Field kinds the filter layer can coerce values for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Coerced with the boolean token set ("true"/"false"/"1"/"0").
    Boolean,
    /// Coerced with `i64` parsing.
    Integer,
    /// Passed through as the raw string.
    Text,
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered field list with by-name lookup.
///
/// Every schema carries the intrinsic `id` (integer) and `title` (text)
/// fields; live-aware types additionally expose `live` (boolean).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<FieldDef>,
}

impl FieldSchema {
    /// Create a schema with the intrinsic `id` and `title` fields.
    pub fn new() -> Self {
        Self {
            fields: vec![
                FieldDef::new("id", FieldKind::Integer),
                FieldDef::new("title", FieldKind::Text),
            ],
        }
    }

    /// Add a declared field (builder style).
    pub fn with_field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldDef::new(name, kind));
        self
    }

    /// Add the intrinsic `live` field for live-aware types.
    pub fn with_live(self) -> Self {
        self.with_field("live", FieldKind::Boolean)
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::new()
    }
}
