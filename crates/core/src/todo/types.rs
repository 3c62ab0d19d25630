use serde::{Deserialize, Serialize};

/// Longest title the store accepts, counted in characters.
pub const TITLE_MAX_CHARS: usize = 300;

/// Trims `raw` and returns it if it is non-empty and within [`TITLE_MAX_CHARS`].
pub fn normalize_title(raw: &str) -> Option<&str> {
    let title = raw.trim();
    (!title.is_empty() && title.chars().count() <= TITLE_MAX_CHARS).then_some(title)
}

/// A single to-do item.
///
/// The `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    /// Completion flag.
    #[serde(default)]
    pub status: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed item.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: false,
        }
    }
}
