//! Declarative record queries.
//!
//! A [`RecordQuery`] is the single shape every lookup against a model takes,
//! whether it started life as an id list, a search string, or a bag of
//! query-string filters. Sources interpret it; handlers only build it.

use serde::{Deserialize, Serialize};

use crate::filter::FieldFilter;
use crate::record::RecordId;

/// A query against one model's records.
///
/// All populated clauses apply conjunctively: a record matches when it
/// satisfies at least one `any_of` filter (if any are set), every `all_of`
/// filter, the id restrictions, and the live restriction. `limit` caps the
/// result count after matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordQuery {
    /// Disjunctive filters: a record must match at least one (when non-empty).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<FieldFilter>,
    /// Conjunctive filters: a record must match all of them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<FieldFilter>,
    /// Restrict to these ids (`Some(vec![])` matches nothing).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<RecordId>>,
    /// Drop records with these ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_ids: Vec<RecordId>,
    /// Keep only live records.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub live_only: bool,
    /// Cap on the number of returned records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl RecordQuery {
    /// A query with no restrictions (matches every record).
    pub fn all() -> Self {
        Self::default()
    }

    /// A query restricted to the given ids.
    pub fn by_ids(ids: Vec<RecordId>) -> Self {
        Self {
            ids: Some(ids),
            ..Self::default()
        }
    }

    /// Add disjunctive filters (at least one must match).
    pub fn matching_any(mut self, filters: Vec<FieldFilter>) -> Self {
        self.any_of = filters;
        self
    }

    /// Add conjunctive filters (all must match).
    pub fn with_filters(mut self, filters: Vec<FieldFilter>) -> Self {
        self.all_of = filters;
        self
    }

    /// Add a single conjunctive filter.
    pub fn with_filter(mut self, filter: FieldFilter) -> Self {
        self.all_of.push(filter);
        self
    }

    /// Drop records with the given ids.
    pub fn excluding(mut self, ids: Vec<RecordId>) -> Self {
        self.exclude_ids = ids;
        self
    }

    /// Keep only live records.
    pub fn live_only(mut self) -> Self {
        self.live_only = true;
        self
    }

    /// Cap the number of returned records.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether the query has no restrictions at all.
    pub fn is_unrestricted(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FieldFilter;

    #[test]
    fn test_default_is_unrestricted() {
        assert!(RecordQuery::all().is_unrestricted());
    }

    #[test]
    fn test_by_ids_sets_restriction() {
        let query = RecordQuery::by_ids(vec![1, 2, 3]);
        assert_eq!(query.ids, Some(vec![1, 2, 3]));
        assert!(!query.is_unrestricted());
    }

    #[test]
    fn test_empty_id_restriction_is_not_unrestricted() {
        // `Some(vec![])` means "these ids: none", not "no restriction".
        let query = RecordQuery::by_ids(vec![]);
        assert!(!query.is_unrestricted());
    }

    #[test]
    fn test_builders_compose() {
        let query = RecordQuery::all()
            .matching_any(vec![FieldFilter::icontains("title", "cat")])
            .with_filter(FieldFilter::eq("featured", true))
            .excluding(vec![7])
            .live_only()
            .with_limit(20);
        assert_eq!(query.any_of.len(), 1);
        assert_eq!(query.all_of.len(), 1);
        assert_eq!(query.exclude_ids, vec![7]);
        assert!(query.live_only);
        assert_eq!(query.limit, Some(20));
    }

    #[test]
    fn test_serde_omits_empty_clauses() {
        let json = serde_json::to_string(&RecordQuery::all()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_serde_round_trip() {
        let query = RecordQuery::by_ids(vec![4]).live_only().with_limit(5);
        let json = serde_json::to_string(&query).unwrap();
        let back: RecordQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, query);
    }
}
