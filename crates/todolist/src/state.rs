//! Application state with repository-based storage.
//!
//! The state is cloned for each request. It holds the repository as a trait
//! object so handlers never depend on a concrete backend.

use std::sync::Arc;

use todolist_core::storage::TodoRepository;

use crate::config::AuthConfig;

// Storage features: at least one must be enabled
#[cfg(not(any(feature = "mysql", feature = "inmemory")))]
compile_error!("Must enable a storage feature: 'mysql' or 'inmemory'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// To-do repository.
    pub todo_repo: Arc<dyn TodoRepository>,
    /// Credentials checked by the authentication gate.
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    /// Creates a new AppState around the given repository and credentials.
    pub fn new(todo_repo: Arc<dyn TodoRepository>, auth: AuthConfig) -> Self {
        Self {
            todo_repo,
            auth: Arc::new(auth),
        }
    }

    /// Creates an AppState backed by an empty in-memory repository.
    #[cfg(any(test, feature = "inmemory"))]
    pub fn in_memory(auth: AuthConfig) -> Self {
        Self::new(
            Arc::new(crate::storage::inmemory::InMemoryRepository::new()),
            auth,
        )
    }
}
