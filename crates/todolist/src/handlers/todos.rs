//! To-do CRUD handlers.
//!
//! Each handler validates its input, delegates to the repository held in
//! [`AppState`], and renders a typed JSON envelope.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

use todolist_core::storage::TodoPatch;

use crate::{
    handlers::AppError,
    models::{CreateTodo, MessageResponse, TodoListResponse, TodoResponse},
    state::AppState,
};

fn parse_id(raw: &str, message: &'static str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|e| {
        tracing::warn!(id = %raw, error = %e, "Invalid todo id");
        AppError::BadRequest(message)
    })
}

// ============================================================================
// List Todos
// ============================================================================

/// List every todo (GET /manage-todos).
#[axum::debug_handler]
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<TodoListResponse>, AppError> {
    let todos = state.todo_repo.get_all().await?;

    tracing::info!(count = todos.len(), "Success Get All Data");

    Ok(Json(TodoListResponse::ok("Success Get All", todos)))
}

// ============================================================================
// Create Todo
// ============================================================================

/// Create a new todo (POST /manage-todo).
#[axum::debug_handler]
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<TodoResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse create request");
        AppError::BadRequest("Invalid input")
    })?;

    let title = payload
        .valid_title()
        .ok_or(AppError::BadRequest("Invalid input"))?;

    let todo = state.todo_repo.create(title).await?;

    tracing::info!(todo_id = todo.id, title = %todo.title, "Created new todo");

    Ok(Json(TodoResponse::ok("New Todo Created", todo)))
}

// ============================================================================
// Get Todo
// ============================================================================

/// Get a single todo by ID (GET /manage-todo/todo/{id}).
#[axum::debug_handler]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, AppError> {
    let id = parse_id(&id, "Bad request")?;

    let todo = state
        .todo_repo
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Not Found"))?;

    tracing::info!(todo_id = id, "Success Get By ID");

    Ok(Json(TodoResponse::ok("Success Get Id", todo)))
}

// ============================================================================
// Update Todo
// ============================================================================

/// Partially update a todo by ID (PUT /manage-todo/todo/{id}).
///
/// Only `title` and `status` may appear in the body. An empty body object is
/// accepted and answers with the current item without writing.
#[axum::debug_handler]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TodoResponse>, AppError> {
    let id = parse_id(&id, "parse ID error")?;

    let Json(body) = payload.map_err(|e| {
        tracing::warn!(todo_id = id, error = %e, "Failed to parse update request");
        AppError::BadRequest("Bad request")
    })?;

    let Value::Object(fields) = body else {
        return Err(AppError::BadRequest("Bad request"));
    };

    let patch = TodoPatch::from_fields(&fields).map_err(|e| {
        tracing::warn!(todo_id = id, error = %e, "Rejected update fields");
        AppError::BadRequest("Bad request")
    })?;

    let current = state
        .todo_repo
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("ID not Found"))?;

    if patch.is_empty() {
        tracing::debug!(todo_id = id, "Update request changes nothing");
        return Ok(Json(TodoResponse::ok("Not Change", current)));
    }

    let updated = state
        .todo_repo
        .update(id, &patch)
        .await?
        .ok_or(AppError::NotFound("ID not Found"))?;

    tracing::info!(todo_id = id, "Success Update Todo");

    Ok(Json(TodoResponse::ok("Success Update Todo", updated)))
}

// ============================================================================
// Delete Todo
// ============================================================================

/// Delete a todo by ID (DELETE /manage-todo/todo/{id}).
#[axum::debug_handler]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "Parse ID Error")?;

    let removed = state.todo_repo.delete(id).await?;

    if removed == 0 {
        return Err(AppError::NotFound("Not Found"));
    }

    tracing::info!(todo_id = id, "Success Delete");

    Ok(Json(MessageResponse::ok("Success Delete")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::http::StatusCode;
    use serde_json::json;
    use todolist_core::storage::{RepositoryError, Result, TodoRepository};
    use todolist_core::todo::TodoItem;

    use super::*;
    use crate::config::AuthConfig;

    /// Repository whose every call fails like a lost connection.
    struct FailingRepository;

    fn down() -> RepositoryError {
        RepositoryError::ConnectionFailed("database is down".to_string())
    }

    #[async_trait]
    impl TodoRepository for FailingRepository {
        async fn get_all(&self) -> Result<Vec<TodoItem>> {
            Err(down())
        }

        async fn get_by_id(&self, _id: i64) -> Result<Option<TodoItem>> {
            Err(down())
        }

        async fn create(&self, _title: &str) -> Result<TodoItem> {
            Err(down())
        }

        async fn update(&self, _id: i64, _patch: &TodoPatch) -> Result<Option<TodoItem>> {
            Err(down())
        }

        async fn delete(&self, _id: i64) -> Result<u64> {
            Err(down())
        }
    }

    fn auth() -> AuthConfig {
        AuthConfig {
            username: "key".to_string(),
            password: "value".to_string(),
        }
    }

    fn failing_state() -> AppState {
        AppState::new(Arc::new(FailingRepository), auth())
    }

    fn assert_store_failure<T: std::fmt::Debug>(result: std::result::Result<T, AppError>) {
        let error = result.unwrap_err();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Connection failed: database is down");
    }

    #[tokio::test]
    async fn test_list_surfaces_store_failure() {
        assert_store_failure(list_todos(State(failing_state())).await);
    }

    #[tokio::test]
    async fn test_create_surfaces_store_failure() {
        let payload = Ok(Json(CreateTodo {
            title: "Makan".to_string(),
        }));

        assert_store_failure(create_todo(State(failing_state()), payload).await);
    }

    #[tokio::test]
    async fn test_get_surfaces_store_failure() {
        assert_store_failure(get_todo(State(failing_state()), Path("1".to_string())).await);
    }

    #[tokio::test]
    async fn test_update_surfaces_store_failure_on_lookup() {
        let payload = Ok(Json(json!({"title": "New Title"})));

        assert_store_failure(
            update_todo(State(failing_state()), Path("1".to_string()), payload).await,
        );
    }

    #[tokio::test]
    async fn test_delete_surfaces_store_failure() {
        assert_store_failure(delete_todo(State(failing_state()), Path("1".to_string())).await);
    }

    #[tokio::test]
    async fn test_validation_runs_before_the_store() {
        // A failing store must not turn client errors into 500s.
        let result = get_todo(State(failing_state()), Path("abc".to_string())).await;
        assert_eq!(result.unwrap_err().status_code(), StatusCode::BAD_REQUEST);

        let payload = Ok(Json(CreateTodo {
            title: String::new(),
        }));
        let result = create_todo(State(failing_state()), payload).await;
        assert_eq!(result.unwrap_err().to_string(), "Invalid input");

        let payload = Ok(Json(json!({"priority": 1})));
        let result = update_todo(State(failing_state()), Path("1".to_string()), payload).await;
        assert_eq!(result.unwrap_err().to_string(), "Bad request");
    }

    #[tokio::test]
    async fn test_update_of_vanished_row_is_not_found() {
        let state = AppState::in_memory(auth());
        let created = state.todo_repo.create("Makan").await.unwrap();

        // Lookup succeeds, then the row disappears before the write.
        struct VanishingRepository(Arc<dyn TodoRepository>);

        #[async_trait]
        impl TodoRepository for VanishingRepository {
            async fn get_all(&self) -> Result<Vec<TodoItem>> {
                self.0.get_all().await
            }

            async fn get_by_id(&self, id: i64) -> Result<Option<TodoItem>> {
                self.0.get_by_id(id).await
            }

            async fn create(&self, title: &str) -> Result<TodoItem> {
                self.0.create(title).await
            }

            async fn update(&self, _id: i64, _patch: &TodoPatch) -> Result<Option<TodoItem>> {
                Ok(None)
            }

            async fn delete(&self, id: i64) -> Result<u64> {
                self.0.delete(id).await
            }
        }

        let state = AppState::new(Arc::new(VanishingRepository(state.todo_repo)), auth());
        let payload = Ok(Json(json!({"status": true})));

        let result = update_todo(State(state), Path(created.id.to_string()), payload).await;

        let error = result.unwrap_err();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "ID not Found");
    }

    #[tokio::test]
    async fn test_update_surfaces_store_failure_on_write() {
        let state = AppState::in_memory(auth());
        let created = state.todo_repo.create("Makan").await.unwrap();

        // Lookup succeeds, then the write fails.
        struct ReadOnlyRepository(Arc<dyn TodoRepository>);

        #[async_trait]
        impl TodoRepository for ReadOnlyRepository {
            async fn get_all(&self) -> Result<Vec<TodoItem>> {
                self.0.get_all().await
            }

            async fn get_by_id(&self, id: i64) -> Result<Option<TodoItem>> {
                self.0.get_by_id(id).await
            }

            async fn create(&self, _title: &str) -> Result<TodoItem> {
                Err(down())
            }

            async fn update(&self, _id: i64, _patch: &TodoPatch) -> Result<Option<TodoItem>> {
                Err(down())
            }

            async fn delete(&self, _id: i64) -> Result<u64> {
                Err(down())
            }
        }

        let state = AppState::new(Arc::new(ReadOnlyRepository(state.todo_repo)), auth());
        let payload = Ok(Json(json!({"title": "New Title"})));

        assert_store_failure(
            update_todo(State(state), Path(created.id.to_string()), payload).await,
        );
    }
}
