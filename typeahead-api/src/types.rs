//! Wire types shared by the REST handlers.

use serde::{Deserialize, Serialize};
use typeahead_core::Summary;

// ============================================================================
// REQUEST TYPES
// ============================================================================

/// Query parameters for `GET /objects`.
///
/// Unknown parameters are ignored so admin widgets can pass through extra
/// state without breaking resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectsParams {
    /// Comma-separated record ids to resolve.
    pub ids: Option<String>,
    /// Record type tag, `app_label.ModelName`.
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}

/// Form body for `POST /create`.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateForm {
    /// Title text for the new record.
    pub value: Option<String>,
    /// Record type tag, `app_label.ModelName`.
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}

// ============================================================================
// RESPONSE TYPES
// ============================================================================

/// Envelope for the list endpoints.
///
/// `GET /search` and `GET /objects` both answer with `{"items": [...]}`.
/// `POST /create` returns a bare [`Summary`] instead, which the widget
/// inserts into its selection directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ItemsResponse {
    pub items: Vec<Summary>,
}

impl ItemsResponse {
    pub fn new(items: Vec<Summary>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_objects_params_type_rename() {
        let params: ObjectsParams =
            serde_json::from_value(json!({"ids": "1,2", "type": "cms.Page"})).unwrap();
        assert_eq!(params.ids.as_deref(), Some("1,2"));
        assert_eq!(params.record_type.as_deref(), Some("cms.Page"));
    }

    #[test]
    fn test_objects_params_all_optional() {
        let params: ObjectsParams = serde_json::from_value(json!({})).unwrap();
        assert!(params.ids.is_none());
        assert!(params.record_type.is_none());
    }

    #[test]
    fn test_create_form_type_rename() {
        let form: CreateForm =
            serde_json::from_value(json!({"value": "New page", "type": "cms.Page"})).unwrap();
        assert_eq!(form.value.as_deref(), Some("New page"));
        assert_eq!(form.record_type.as_deref(), Some("cms.Page"));
    }

    #[test]
    fn test_items_response_shape() {
        let response = ItemsResponse::new(vec![Summary::new(1, "Home")]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"items": [{"id": 1, "title": "Home"}]}));
    }

    #[test]
    fn test_items_response_empty() {
        let value = serde_json::to_value(ItemsResponse::new(Vec::new())).unwrap();
        assert_eq!(value, json!({"items": []}));
    }
}
