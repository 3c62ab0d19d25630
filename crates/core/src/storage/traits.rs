use async_trait::async_trait;

use crate::todo::TodoItem;

use super::{Result, TodoPatch};

/// Repository for to-do item operations.
///
/// Lookups distinguish three outcomes: `Ok(Some(_))` when a row matches,
/// `Ok(None)` when none does, and `Err(_)` when the store failed.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Gets every item, ordered by id.
    async fn get_all(&self) -> Result<Vec<TodoItem>>;

    /// Gets an item by its ID.
    async fn get_by_id(&self, id: i64) -> Result<Option<TodoItem>>;

    /// Creates a new item with the given title and returns it with its assigned ID.
    async fn create(&self, title: &str) -> Result<TodoItem>;

    /// Applies a partial update and returns the updated item, or `None` if
    /// no item has the given ID.
    async fn update(&self, id: i64, patch: &TodoPatch) -> Result<Option<TodoItem>>;

    /// Deletes an item by its ID and returns the number of rows removed (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64>;
}
