//! Object Resolution REST API Routes
//!
//! Resolves previously-selected record ids back to display summaries so an
//! admin widget can re-render a stored selection after a page reload.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use typeahead_core::RecordQuery;

use crate::{
    error::{ApiError, ApiResult},
    params::parse_id_csv,
    render::render_records,
    state::AppState,
    types::{ItemsResponse, ObjectsParams},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /objects - Resolve record ids to display summaries
#[utoipa::path(
    get,
    path = "/objects",
    tag = "Typeahead",
    params(
        ("ids" = String, Query, description = "Comma-separated record ids to resolve"),
        ("type" = Option<String>, Query, description = "Record type tag (server default when omitted)"),
    ),
    responses(
        (status = 200, description = "Resolved summaries in store order", body = ItemsResponse),
        (status = 400, description = "Missing ids, unknown type, or malformed id token", body = ApiError),
    )
)]
pub async fn objects(
    State(state): State<AppState>,
    Query(params): Query<ObjectsParams>,
) -> ApiResult<impl IntoResponse> {
    let raw_ids = params.ids.as_deref().map(str::trim).unwrap_or("");
    if raw_ids.is_empty() {
        return Err(ApiError::missing_field("ids"));
    }

    let raw_type = params.record_type.as_deref().unwrap_or(&state.default_type);
    let source = state.registry.resolve(raw_type)?;

    // One malformed token fails the whole request; ids that simply do not
    // exist are dropped from the response instead.
    let ids = parse_id_csv(raw_ids)?;

    let mut query = RecordQuery::by_ids(ids);
    if source.has_live_state() {
        query = query.live_only();
    }

    let records = source.search(&query)?;
    let items = render_records(source.as_ref(), records);

    Ok(Json(ItemsResponse::new(items)))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the object resolution router.
pub fn create_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(objects))
        .with_state(state)
}
