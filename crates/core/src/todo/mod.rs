mod types;

pub use types::{normalize_title, TodoItem, TITLE_MAX_CHARS};
