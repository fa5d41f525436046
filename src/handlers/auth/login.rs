use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, hash_password, Claims};
use crate::config;
use crate::error::ApiError;
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/login - Verify credentials and issue a JWT
///
/// Unknown usernames and wrong passwords both answer 401 so the endpoint does
/// not reveal which accounts exist.
pub async fn login_post(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let user = state
        .users
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized(format!("unknown username '{}'", payload.username)))?;

    if user.password_hash != hash_password(&payload.password) {
        return Err(ApiError::unauthorized(format!(
            "bad password for '{}'",
            payload.username
        )));
    }

    let claims = Claims::new(user.user_id, user.username.clone());
    let token = generate_jwt(claims).map_err(|e| {
        tracing::error!("JWT generation failed: {}", e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    let expires_in = config::config().security.jwt_expiry_hours * 3600;

    tracing::info!("login: {} ({})", user.username, user.user_id);

    Ok(Json(json!({
        "success": true,
        "data": {
            "token": token,
            "user": user,
            "expires_in": expires_in,
        }
    })))
}
