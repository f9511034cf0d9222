//! End-to-end tests for POST /create.
//!
//! Creation is the only write on the API, and the only place permissions
//! matter. The checks run in a fixed order: request shape, type
//! resolution, permission, capability, factory. These tests pin both the
//! responses and the absence of side effects on refused requests.

use axum::http::StatusCode;

mod support;
use support::{get_json, harness, item_ids, post_form, wide_harness, ADMIN_KEY, EDITOR_KEY, READER_KEY};

// ============================================================================
// HAPPY PATH
// ============================================================================

#[tokio::test]
async fn create_with_permitted_key_returns_summary() {
    let h = harness();
    let (status, body) = post_form(&h.app, "/create", "value=New+page", Some(EDITOR_KEY)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 6);
    assert_eq!(body["title"], "New page");
    // Bare summary, not an items envelope.
    assert!(body.get("items").is_none());
    assert_eq!(h.pages.count().unwrap(), 6);
}

#[tokio::test]
async fn create_with_wildcard_key_is_permitted() {
    let h = harness();
    let (status, body) = post_form(&h.app, "/create", "value=Another", Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Another");
}

#[tokio::test]
async fn created_record_is_resolvable_and_searchable() {
    let h = harness();
    let (_, created) = post_form(&h.app, "/create", "value=Launch+plan", Some(EDITOR_KEY)).await;
    let id = created["id"].as_i64().unwrap();

    let (_, resolved) = get_json(&h.app, &format!("/objects?ids={}", id)).await;
    assert_eq!(item_ids(&resolved), vec![id]);

    let (_, found) = get_json(&h.app, "/search?query=launch").await;
    assert_eq!(item_ids(&found), vec![id]);
}

#[tokio::test]
async fn create_allocates_past_highest_id() {
    let h = wide_harness(25);
    let (_, body) = post_form(&h.app, "/create", "value=Next", Some(EDITOR_KEY)).await;
    assert_eq!(body["id"], 26);
}

#[tokio::test]
async fn create_with_explicit_type_parameter() {
    let h = harness();
    let (status, body) =
        post_form(&h.app, "/create", "value=Typed&type=cms.Page", Some(EDITOR_KEY)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Typed");
}

// ============================================================================
// PERMISSION DENIALS
// ============================================================================

#[tokio::test]
async fn create_anonymous_is_forbidden_and_store_unchanged() {
    let h = harness();
    let (status, body) = post_form(&h.app, "/create", "value=Nope", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
    assert_eq!(h.pages.count().unwrap(), 5);
}

#[tokio::test]
async fn create_unknown_key_is_anonymous() {
    let h = harness();
    let (status, _) = post_form(&h.app, "/create", "value=Nope", Some("no-such-key")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(h.pages.count().unwrap(), 5);
}

#[tokio::test]
async fn create_key_without_permission_is_forbidden() {
    let h = harness();
    let (status, body) = post_form(&h.app, "/create", "value=Nope", Some(READER_KEY)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["message"].as_str().unwrap().contains("cms.add_page"));
    assert_eq!(h.pages.count().unwrap(), 5);
}

// ============================================================================
// CHECK ORDER
// ============================================================================

#[tokio::test]
async fn create_missing_value_is_bad_request() {
    let h = harness();
    let (status, body) = post_form(&h.app, "/create", "type=cms.Page", Some(EDITOR_KEY)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_FIELD");
}

#[tokio::test]
async fn create_blank_value_is_bad_request() {
    let h = harness();
    let (status, _) = post_form(&h.app, "/create", "value=+++", Some(EDITOR_KEY)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_unknown_type_rejected_before_permission() {
    let h = harness();
    // Anonymous caller and unknown type: the type failure wins, so this is
    // a 400, not a 403.
    let (status, body) = post_form(&h.app, "/create", "value=X&type=cms.Missing", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_TYPE");
}

#[tokio::test]
async fn create_malformed_type_is_bad_request() {
    let h = harness();
    let (status, body) = post_form(&h.app, "/create", "value=X&type=nodot", Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn create_permission_checked_before_capability() {
    let h = harness();
    // The tag model cannot create. A caller without the permission still
    // sees the permission failure first.
    let (status, body) = post_form(&h.app, "/create", "value=X&type=cms.Tag", Some(READER_KEY)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["message"].as_str().unwrap().contains("cms.add_tag"));
}

#[tokio::test]
async fn create_on_type_without_factory_is_bad_request() {
    let h = harness();
    let (status, body) = post_form(&h.app, "/create", "value=X&type=cms.Tag", Some(ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CREATE_UNSUPPORTED");
    assert_eq!(h.tags.count().unwrap(), 2);
}
