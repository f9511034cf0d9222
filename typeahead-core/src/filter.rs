//! Ad-hoc field filters compiled from request query strings.
//!
//! Any query-string pair the handler does not claim for itself may name a
//! declared field, optionally suffixed with a lookup (`is_live__isnull`).
//! Compilation is deliberately lenient: pairs whose field or lookup is not
//! recognized are skipped so that stale or forward-looking query strings
//! keep working. Only a value that fails coercion to the declared field
//! kind is an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FilterError;
use crate::schema::{FieldKind, FieldSchema};

/// Separator between a field name and its lookup suffix.
const LOOKUP_SEPARATOR: &str = "__";

/// Lookup applied by a field filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lookup {
    /// Exact value equality (the default when no suffix is given).
    Exact,
    /// Case-insensitive substring containment.
    IContains,
    /// Absent-or-null test against a boolean.
    IsNull,
    /// Ordered comparisons.
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Lookup {
    /// Resolve a lookup suffix. Unknown suffixes return `None`, which makes
    /// the whole parameter unrecognized (and therefore skipped).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "exact" => Some(Lookup::Exact),
            "icontains" => Some(Lookup::IContains),
            "isnull" => Some(Lookup::IsNull),
            "lt" => Some(Lookup::Lt),
            "lte" => Some(Lookup::Lte),
            "gt" => Some(Lookup::Gt),
            "gte" => Some(Lookup::Gte),
            _ => None,
        }
    }
}

/// A single compiled predicate against one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFilter {
    /// Field to filter on.
    pub field: String,
    /// Lookup to apply.
    pub lookup: Lookup,
    /// Value to compare against (JSON value for flexibility).
    pub value: Value,
}

impl FieldFilter {
    /// Create a new field filter.
    pub fn new(field: impl Into<String>, lookup: Lookup, value: Value) -> Self {
        Self {
            field: field.into(),
            lookup,
            value,
        }
    }

    /// Create an equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Lookup::Exact, value.into())
    }

    /// Create a case-insensitive containment filter.
    pub fn icontains(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::new(field, Lookup::IContains, Value::String(needle.into()))
    }
}

/// Parse a boolean query token.
///
/// The accepted set is exactly `"true"`, `"false"`, `"1"`, `"0"`,
/// case-sensitive. Everything else is rejected.
pub fn parse_boolean(token: &str) -> Option<bool> {
    match token {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Compile ad-hoc query-string pairs into field filters.
///
/// `reserved` names the handler's own parameters; those are never treated
/// as field filters. For the rest: the key is split on the first `__` into
/// a base field and an optional lookup suffix, the base is looked up in
/// `schema`, and the value is coerced to the declared kind (an `isnull`
/// lookup always takes a boolean token). Unrecognized fields and suffixes
/// are skipped; a failed coercion is the one hard error.
///
/// The returned filters compose conjunctively and independently.
pub fn compile_filters(
    schema: &FieldSchema,
    params: &HashMap<String, String>,
    reserved: &[&str],
) -> Result<Vec<FieldFilter>, FilterError> {
    let mut filters = Vec::new();

    for (key, raw) in params {
        if reserved.contains(&key.as_str()) {
            continue;
        }

        let (base, suffix) = match key.split_once(LOOKUP_SEPARATOR) {
            Some((base, suffix)) => (base, Some(suffix)),
            None => (key.as_str(), None),
        };

        let lookup = match suffix {
            Some(suffix) => match Lookup::from_suffix(suffix) {
                Some(lookup) => lookup,
                None => continue,
            },
            None => Lookup::Exact,
        };

        let field = match schema.field(base) {
            Some(field) => field,
            None => continue,
        };

        let value = coerce(key, raw, field.kind, lookup)?;
        filters.push(FieldFilter::new(base, lookup, value));
    }

    Ok(filters)
}

/// Coerce a raw query-string value to the declared field kind.
fn coerce(key: &str, raw: &str, kind: FieldKind, lookup: Lookup) -> Result<Value, FilterError> {
    // IsNull tests take a boolean token no matter what the field kind is.
    if lookup == Lookup::IsNull || kind == FieldKind::Boolean {
        return parse_boolean(raw).map(Value::Bool).ok_or_else(|| {
            FilterError::InvalidValue {
                field: key.to_string(),
                value: raw.to_string(),
                reason: "expected boolean token (true/false/1/0)".to_string(),
            }
        });
    }

    match kind {
        FieldKind::Integer => raw
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| FilterError::InvalidValue {
                field: key.to_string(),
                value: raw.to_string(),
                reason: "expected integer".to_string(),
            }),
        FieldKind::Text => Ok(Value::String(raw.to_string())),
        // Handled above.
        FieldKind::Boolean => unreachable!("boolean coercion handled with isnull"),
    }
}
