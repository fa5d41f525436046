use axum::{
    extract::{Extension, Path, State},
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::owns_resource;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::types::AppState;

/// GET /users/:id - Fetch the caller's own profile
pub async fn user_get(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    if !owns_resource(auth.as_ref().map(|ext| &ext.0), id) {
        return Err(ApiError::unauthorized(format!(
            "caller does not own user {}",
            id
        )));
    }

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("user {} not found", id)))?;

    Ok(Json(json!({ "success": true, "data": user })))
}
