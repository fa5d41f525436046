use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::auth::owns_resource;
use crate::config;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::types::AppState;
use crate::validation::{validate_status_update, UpdateStatusRequest};

/// PATCH /users/:id/status - Replace the caller's own status message
///
/// Request flow: ownership check, payload validation, single-row write.
/// Nothing is written unless both checks pass.
pub async fn status_patch(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<StatusCode, ApiError> {
    if !owns_resource(auth.as_ref().map(|ext| &ext.0), id) {
        return Err(ApiError::unauthorized(format!(
            "caller does not own user {}",
            id
        )));
    }

    let max_length = config::config().validation.max_status_length;
    if let Err(errors) = validate_status_update(&payload, max_length) {
        return Err(ApiError::validation_failed("Validation errors", errors));
    }

    // Validation guarantees the field is present and non-empty
    let status = payload.status_message.as_deref().unwrap_or_default();
    state.users.update_status(id, status).await?;

    Ok(StatusCode::NO_CONTENT)
}
