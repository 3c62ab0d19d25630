mod response;
mod todo;

pub use response::{ErrorResponse, MessageResponse, TodoListResponse, TodoResponse};
pub use todo::CreateTodo;
