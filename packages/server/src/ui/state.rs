//! Server state shared by handlers.

use std::sync::Arc;

use crate::{domain::ProjectRepository, infrastructure::repository::InMemoryProjectRepository};

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn ProjectRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// State backed by a fresh, empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProjectRepository::new()))
    }
}
