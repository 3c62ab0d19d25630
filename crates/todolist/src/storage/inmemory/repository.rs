//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use todolist_core::storage::{Result, TodoPatch, TodoRepository};
use todolist_core::todo::TodoItem;

/// In-memory storage backend for testing.
///
/// Items live in a `BTreeMap` wrapped in `Arc<RwLock<_>>`, so listing is
/// ordered by id. IDs come from a monotonically increasing sequence and are
/// never reused. Data is lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<BTreeMap<i64, TodoItem>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            todos: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn get_all(&self) -> Result<Vec<TodoItem>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<TodoItem>> {
        let todos = self.todos.read().await;
        Ok(todos.get(&id).cloned())
    }

    async fn create(&self, title: &str) -> Result<TodoItem> {
        let mut todos = self.todos.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let todo = TodoItem::new(id, title);
        todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, patch: &TodoPatch) -> Result<Option<TodoItem>> {
        let mut todos = self.todos.write().await;
        Ok(todos.get_mut(&id).map(|todo| {
            patch.apply_to(todo);
            todo.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut todos = self.todos.write().await;
        Ok(u64::from(todos.remove(&id).is_some()))
    }
}
