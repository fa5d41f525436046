use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::auth::owns_resource;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::types::AppState;

/// DELETE /users/:id - Remove the caller's own account
pub async fn user_delete(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !owns_resource(auth.as_ref().map(|ext| &ext.0), id) {
        return Err(ApiError::unauthorized(format!(
            "caller does not own user {}",
            id
        )));
    }

    state.users.delete(id).await?;

    tracing::info!("deleted user {}", id);
    Ok(StatusCode::NO_CONTENT)
}
