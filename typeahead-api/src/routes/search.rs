//! Search REST API Routes
//!
//! Substring search over a record type's search fields, narrowed by
//! schema-declared field filters. This is the endpoint a typeahead widget
//! polls on every keystroke, so the handler is lenient: parameters it
//! cannot make sense of are dropped rather than rejected.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use typeahead_core::{compile_filters, FieldFilter, RecordQuery};

use crate::{
    error::{ApiError, ApiResult},
    params::parse_id_csv,
    render::render_records,
    state::AppState,
    types::ItemsResponse,
};

/// Parameters the handler consumes itself; never treated as field filters.
const RESERVED_PARAMS: [&str; 3] = ["query", "type", "exclude"];

/// Result cap per response. The widget paginates by refining the query, not
/// by fetching further pages.
pub const MAX_RESULTS: usize = 20;

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /search - Search a record type by substring and field filters
#[utoipa::path(
    get,
    path = "/search",
    tag = "Typeahead",
    params(
        ("query" = Option<String>, Query, description = "Case-insensitive substring matched against the type's search fields"),
        ("type" = Option<String>, Query, description = "Record type tag (server default when omitted)"),
        ("exclude" = Option<String>, Query, description = "Comma-separated ids to omit, typically the widget's current selection"),
    ),
    responses(
        (status = 200, description = "Up to 20 matching summaries", body = ItemsResponse),
        (status = 400, description = "Unknown type or unparseable filter value", body = ApiError),
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<impl IntoResponse> {
    let raw_type = params
        .get("type")
        .map(String::as_str)
        .unwrap_or(&state.default_type);
    let source = state.registry.resolve(raw_type)?;

    // An absent or empty query matches everything; every title contains "".
    let needle = params.get("query").cloned().unwrap_or_default();
    let any_of: Vec<FieldFilter> = source
        .search_fields()
        .into_iter()
        .map(|field| FieldFilter::icontains(field, needle.clone()))
        .collect();

    let all_of = compile_filters(source.schema(), &params, &RESERVED_PARAMS)?;

    let mut query = RecordQuery::all()
        .matching_any(any_of)
        .with_filters(all_of)
        .with_limit(MAX_RESULTS);
    if source.has_live_state() {
        query = query.live_only();
    }
    if let Some(raw_exclude) = params.get("exclude") {
        match parse_id_csv(raw_exclude) {
            Ok(exclude_ids) => query = query.excluding(exclude_ids),
            Err(_) => {
                tracing::debug!(exclude = %raw_exclude, "Ignoring unparseable exclude list");
            }
        }
    }

    let records = source.search(&query)?;
    let items = render_records(source.as_ref(), records);

    Ok(Json(ItemsResponse::new(items)))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the search router.
pub fn create_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(search))
        .with_state(state)
}
