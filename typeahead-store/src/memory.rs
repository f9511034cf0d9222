//! In-memory `ModelSource` used by the dev server and tests.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use typeahead_core::{
    FieldFilter, FieldKind, FieldSchema, Lookup, Record, RecordId, RecordQuery, StoreError,
};

use crate::source::ModelSource;

type LabelFn = Arc<dyn Fn(&Record) -> Option<String> + Send + Sync>;
type SpecificFn = Arc<dyn Fn(Record) -> Record + Send + Sync>;

/// A `ModelSource` backed by an ordered in-memory map.
///
/// Store order is ascending record id, which keeps every query result
/// deterministic. Capabilities are opted into builder-style; the defaults
/// match the trait's (title-only search, no live flag, no create).
pub struct MemoryModel {
    schema: FieldSchema,
    search_fields: Vec<String>,
    live_aware: bool,
    creatable: bool,
    label_fn: Option<LabelFn>,
    specific_fn: Option<SpecificFn>,
    records: RwLock<BTreeMap<RecordId, Record>>,
}

impl Default for MemoryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryModel {
    /// Create an empty model with the intrinsic schema.
    pub fn new() -> Self {
        Self {
            schema: FieldSchema::new(),
            search_fields: vec!["title".to_string()],
            live_aware: false,
            creatable: false,
            label_fn: None,
            specific_fn: None,
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Declare an extra field.
    pub fn with_field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.schema = self.schema.with_field(name, kind);
        self
    }

    /// Replace the searched fields (default is title only).
    pub fn with_search_fields(mut self, fields: Vec<String>) -> Self {
        self.search_fields = fields;
        self
    }

    /// Mark the model live-aware; this also declares the `live` field.
    pub fn with_live_state(mut self) -> Self {
        self.live_aware = true;
        self.schema = self.schema.with_live();
        self
    }

    /// Override the display label.
    pub fn with_label(
        mut self,
        label: impl Fn(&Record) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.label_fn = Some(Arc::new(label));
        self
    }

    /// Override the specialization hook.
    pub fn with_specific(
        mut self,
        specific: impl Fn(Record) -> Record + Send + Sync + 'static,
    ) -> Self {
        self.specific_fn = Some(Arc::new(specific));
        self
    }

    /// Enable the create-from-text factory.
    pub fn with_create(mut self) -> Self {
        self.creatable = true;
        self
    }

    /// Insert a record, replacing any existing record with the same id.
    pub fn insert(&self, record: Record) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records.insert(record.id, record);
        Ok(())
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<usize, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }

    fn matches(&self, query: &RecordQuery, record: &Record) -> bool {
        if let Some(ids) = &query.ids {
            if !ids.contains(&record.id) {
                return false;
            }
        }
        if query.exclude_ids.contains(&record.id) {
            return false;
        }
        if self.live_aware && query.live_only && !record.live {
            return false;
        }
        if !query.any_of.is_empty() && !query.any_of.iter().any(|f| filter_matches(record, f)) {
            return false;
        }
        query.all_of.iter().all(|f| filter_matches(record, f))
    }
}

impl ModelSource for MemoryModel {
    fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    fn search_fields(&self) -> Vec<String> {
        self.search_fields.clone()
    }

    fn has_live_state(&self) -> bool {
        self.live_aware
    }

    fn search(&self, query: &RecordQuery) -> Result<Vec<Record>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(records
            .values()
            .filter(|record| self.matches(query, record))
            .take(limit)
            .cloned()
            .collect())
    }

    fn specific(&self, record: Record) -> Record {
        match &self.specific_fn {
            Some(specific) => specific(record),
            None => record,
        }
    }

    fn label(&self, record: &Record) -> Option<String> {
        self.label_fn.as_ref().and_then(|label| label(record))
    }

    fn can_create(&self) -> bool {
        self.creatable
    }

    fn create(&self, text: &str) -> Result<Record, StoreError> {
        if !self.creatable {
            return Err(StoreError::CreateUnsupported);
        }
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = records.last_key_value().map(|(id, _)| id + 1).unwrap_or(1);
        let record = Record::new(id, text);
        records.insert(id, record.clone());
        Ok(record)
    }
}

/// Evaluate one filter against one record.
///
/// Predicates on values of a mismatched kind simply don't match; the only
/// lookup that sees an absent value is `IsNull`.
fn filter_matches(record: &Record, filter: &FieldFilter) -> bool {
    let value = record.get(&filter.field);

    if filter.lookup == Lookup::IsNull {
        let wants_null = filter.value.as_bool().unwrap_or(false);
        let is_null = matches!(value, None | Some(Value::Null));
        return is_null == wants_null;
    }

    let value = match value {
        None | Some(Value::Null) => return false,
        Some(value) => value,
    };

    match filter.lookup {
        Lookup::Exact => value == filter.value,
        Lookup::IContains => match (value.as_str(), filter.value.as_str()) {
            (Some(haystack), Some(needle)) => haystack
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => false,
        },
        Lookup::Lt | Lookup::Lte | Lookup::Gt | Lookup::Gte => {
            match compare(&value, &filter.value) {
                Some(ordering) => ordering_matches(filter.lookup, ordering),
                None => false,
            }
        }
        // Handled above.
        Lookup::IsNull => unreachable!("isnull evaluated before kind dispatch"),
    }
}

/// Compare two values: integers numerically, text lexicographically.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
        return Some(left.cmp(&right));
    }
    match (left.as_str(), right.as_str()) {
        (Some(left), Some(right)) => Some(left.cmp(right)),
        _ => None,
    }
}

fn ordering_matches(lookup: Lookup, ordering: Ordering) -> bool {
    match lookup {
        Lookup::Lt => ordering == Ordering::Less,
        Lookup::Lte => ordering != Ordering::Greater,
        Lookup::Gt => ordering == Ordering::Greater,
        Lookup::Gte => ordering != Ordering::Less,
        _ => false,
    }
}
