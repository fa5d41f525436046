/// Shared types used across the codebase
use std::sync::Arc;

use crate::database::repository::UserRepository;

/// Application state injected into handlers. The storage collaborator is held
/// behind the trait object so tests can substitute an in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
