//! Create-From-Text REST API Routes
//!
//! Lets a widget mint a new record from the text the user typed when no
//! existing record matches. Creation is opt-in per record type and gated
//! by an explicit permission, so the checks here run strictly in order:
//! input shape, type resolution, permission, capability, then the factory.

use axum::{extract::State, response::IntoResponse, Form, Json};

use typeahead_core::{ModelTag, Summary};

use crate::{
    auth::{add_permission_label, AuthExtractor},
    error::{ApiError, ApiResult},
    render::render_record,
    state::AppState,
    types::CreateForm,
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /create - Create a record from typed text
#[utoipa::path(
    post,
    path = "/create",
    tag = "Typeahead",
    request_body(
        content = CreateForm,
        content_type = "application/x-www-form-urlencoded",
        description = "Title text plus optional record type tag"
    ),
    responses(
        (status = 200, description = "The created record's summary", body = Summary),
        (status = 400, description = "Missing value, unknown type, or type without create support", body = ApiError),
        (status = 403, description = "Caller lacks the type's add permission", body = ApiError),
    ),
    security(
        ("api_key" = [])
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AuthExtractor(auth): AuthExtractor,
    Form(form): Form<CreateForm>,
) -> ApiResult<impl IntoResponse> {
    let value = form.value.as_deref().map(str::trim).unwrap_or("");
    if value.is_empty() {
        return Err(ApiError::missing_field("value"));
    }

    let raw_type = form.record_type.as_deref().unwrap_or(&state.default_type);
    let tag: ModelTag = raw_type.parse()?;
    let source = state.registry.get(&tag)?;

    let permission = add_permission_label(&tag);
    if !auth.has_perm(&permission) {
        tracing::info!(actor = ?auth.actor, %permission, "Create denied");
        return Err(ApiError::forbidden(format!(
            "Creating {} records requires the '{}' permission",
            tag, permission
        )));
    }

    if !source.can_create() {
        return Err(ApiError::create_unsupported(&tag));
    }

    let record = source.create(value)?;
    tracing::info!(id = record.id, %tag, "Created record from text");

    Ok(Json(render_record(source.as_ref(), record)))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the create-from-text router.
pub fn create_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::post(create))
        .with_state(state)
}
