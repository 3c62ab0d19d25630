//! JSON response envelopes shared by every endpoint.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use todolist_core::todo::TodoItem;

/// Envelope for a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoResponse {
    pub status: u16,
    pub message: String,
    pub data: TodoItem,
}

/// Envelope for the full list; `data` holds the item count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub status: u16,
    pub message: String,
    pub data: usize,
    pub todos: Vec<TodoItem>,
}

/// Envelope carrying only a status and a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: u16,
    pub message: String,
}

/// Error body: `{"message": ..., "status": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
}

impl TodoResponse {
    pub fn ok(message: impl Into<String>, data: TodoItem) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            data,
        }
    }
}

impl TodoListResponse {
    pub fn ok(message: impl Into<String>, todos: Vec<TodoItem>) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            data: todos.len(),
            todos,
        }
    }
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
        }
    }
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
        }
    }
}
