//! Shared harness for endpoint tests.
//!
//! Builds a real router over seeded in-memory models so tests exercise the
//! full extractor-to-serializer path with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use typeahead_api::{create_api_router, ApiConfig, AppState, AuthConfig};
use typeahead_core::{FieldKind, ModelTag, Record};
use typeahead_store::{MemoryModel, ModelRegistry};

pub const EDITOR_KEY: &str = "editor-key";
pub const ADMIN_KEY: &str = "admin-key";
pub const READER_KEY: &str = "reader-key";

/// A router over seeded data, plus direct handles to the backing models so
/// tests can assert on store contents after a request.
pub struct TestHarness {
    pub app: Router,
    pub pages: Arc<MemoryModel>,
    pub tags: Arc<MemoryModel>,
}

/// Page model: live-aware and creatable, integer and text filter fields.
fn page_model() -> MemoryModel {
    let model = MemoryModel::new()
        .with_field("views", FieldKind::Integer)
        .with_field("slug", FieldKind::Text)
        .with_live_state()
        .with_create();

    let records = [
        Record::new(1, "Home")
            .with_field("views", 250)
            .with_field("slug", "home"),
        Record::new(2, "Contact")
            .with_field("views", 40)
            .with_field("slug", "contact"),
        Record::new(3, "Pricing")
            .with_field("views", 180)
            .with_field("slug", "pricing"),
        Record::new(4, "Secret draft")
            .with_live(false)
            .with_field("views", 2)
            .with_field("slug", "secret-draft"),
        Record::new(5, "Company history")
            .with_field("views", 90)
            .with_field("slug", "history"),
    ];
    for record in records {
        model.insert(record).expect("seed page");
    }
    model
}

/// Tag model: no live state, no create factory, two search fields.
///
/// Events carries `live: false` to show that types without live state
/// never filter on it.
fn tag_model() -> MemoryModel {
    let model = MemoryModel::new()
        .with_field("slug", FieldKind::Text)
        .with_search_fields(vec!["title".to_string(), "slug".to_string()]);

    for record in [
        Record::new(1, "News").with_field("slug", "news"),
        Record::new(2, "Events").with_field("slug", "events").with_live(false),
    ] {
        model.insert(record).expect("seed tag");
    }
    model
}

fn test_auth_config() -> AuthConfig {
    AuthConfig::default()
        .with_key(EDITOR_KEY, ["cms.add_page"])
        .with_key(ADMIN_KEY, ["*"])
        .with_key(READER_KEY, Vec::<String>::new())
}

/// Harness over the standard two-model registry.
pub fn harness() -> TestHarness {
    let pages = Arc::new(page_model());
    let tags = Arc::new(tag_model());

    let mut registry = ModelRegistry::new();
    registry.register("cms.Page".parse::<ModelTag>().unwrap(), pages.clone());
    registry.register("cms.Tag".parse::<ModelTag>().unwrap(), tags.clone());

    let state = AppState::new(registry, test_auth_config(), "cms.Page");
    let app = create_api_router(state, &ApiConfig::default());

    TestHarness { app, pages, tags }
}

/// Harness whose page model holds `count` live records, for cap tests.
pub fn wide_harness(count: usize) -> TestHarness {
    let pages = Arc::new(
        MemoryModel::new()
            .with_field("views", FieldKind::Integer)
            .with_live_state()
            .with_create(),
    );
    for i in 1..=count {
        pages
            .insert(Record::new(i as i64, format!("Page {:03}", i)).with_field("views", i as i64))
            .expect("seed page");
    }

    let tags = Arc::new(tag_model());

    let mut registry = ModelRegistry::new();
    registry.register("cms.Page".parse::<ModelTag>().unwrap(), pages.clone());
    registry.register("cms.Tag".parse::<ModelTag>().unwrap(), tags.clone());

    let state = AppState::new(registry, test_auth_config(), "cms.Page");
    let app = create_api_router(state, &ApiConfig::default());

    TestHarness { app, pages, tags }
}

/// Issue a GET and decode the JSON body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// POST a form-encoded body, optionally with an api key, decode the JSON.
pub async fn post_form(
    app: &Router,
    uri: &str,
    body: &str,
    api_key: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Pull the item titles out of an `{"items": [...]}` body.
pub fn item_titles(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["title"].as_str().expect("title").to_string())
        .collect()
}

/// Pull the item ids out of an `{"items": [...]}` body.
pub fn item_ids(body: &Value) -> Vec<i64> {
    body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}
