//! Records and rendered summaries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Store-assigned record identifier.
pub type RecordId = i64;

/// A record as returned by a data source.
///
/// `id` and `title` are intrinsic; `live` is the published state (always
/// `true` for types without one); any further declared attributes live in
/// `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    #[serde(default = "default_live")]
    pub live: bool,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
}

fn default_live() -> bool {
    true
}

impl Record {
    pub fn new(id: RecordId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            live: true,
            fields: Map::new(),
        }
    }

    /// Set the published state (builder style).
    pub fn with_live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    /// Attach an extra field value (builder style).
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Field access covering the intrinsics and the extra attributes.
    ///
    /// Returns `None` for fields the record simply does not carry; `IsNull`
    /// predicates treat absent and JSON-null alike.
    pub fn get(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::from(self.id)),
            "title" => Some(Value::String(self.title.clone())),
            "live" => Some(Value::Bool(self.live)),
            _ => self.fields.get(name).cloned(),
        }
    }
}

/// The one output shape of the service: a record reduced to its display
/// label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Summary {
    pub id: RecordId,
    pub title: String,
}

impl Summary {
    pub fn new(id: RecordId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
