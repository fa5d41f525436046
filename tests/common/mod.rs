use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use tryitter_api::auth::{generate_jwt, hash_password, Claims};
use tryitter_api::database::models::{TrybeModule, User};
use tryitter_api::database::repository::{RepositoryError, UserRepository};
use tryitter_api::routes::app;
use tryitter_api::types::AppState;

/// In-memory stand-in for the Postgres user store, substituted through the
/// repository seam so request logic can be exercised without a database.
pub struct MemoryUsers {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUsers {
    pub fn new(seed: Vec<User>) -> Self {
        Self {
            users: RwLock::new(seed.into_iter().map(|u| (u.user_id, u)).collect()),
        }
    }

    /// Inspect the stored row after a request has run
    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.read().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().unwrap().get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<(), RepositoryError> {
        let mut users = self.users.write().unwrap();
        let user = users
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user {}", id)))?;
        user.status_message = Some(status.to_string());
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.users
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("user {}", id)))
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Build a router over a seeded in-memory store, returning both so tests can
/// inspect storage after requests
pub fn test_app(seed: Vec<User>) -> (Arc<MemoryUsers>, Router) {
    let store = Arc::new(MemoryUsers::new(seed));
    let router = app(AppState::new(store.clone()));
    (store, router)
}

pub fn seed_user(username: &str, password: &str, status: Option<&str>) -> User {
    let now = Utc::now();
    User {
        user_id: Uuid::new_v4(),
        full_name: format!("{} Example", username),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: hash_password(password),
        current_module: TrybeModule::BackEnd,
        status_message: status.map(str::to_string),
        created_at: now,
        updated_at: now,
    }
}

/// Bearer token the server itself would have issued for this user
pub fn token_for(user: &User) -> String {
    generate_jwt(Claims::new(user.user_id, user.username.clone())).expect("jwt generation")
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body")
        .to_vec()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json response body")
}
