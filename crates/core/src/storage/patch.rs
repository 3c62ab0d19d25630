use serde_json::{Map, Value};

use crate::todo::{normalize_title, TodoItem, TITLE_MAX_CHARS};

use super::{RepositoryError, Result};

/// A partial update for a [`TodoItem`].
///
/// Only `title` and `status` can change; the ID is immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub status: Option<bool>,
}

impl TodoPatch {
    /// Builds a patch from a JSON field map.
    ///
    /// Recognizes `title` (string, trimmed, 1 to [`TITLE_MAX_CHARS`]
    /// characters) and `status` (boolean). Any other
    /// key yields [`RepositoryError::InvalidField`]; a recognized key holding
    /// the wrong kind of value yields [`RepositoryError::InvalidData`].
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self> {
        let mut patch = Self::default();

        for (key, value) in fields {
            match key.as_str() {
                "title" => {
                    let title = value.as_str().ok_or_else(|| {
                        RepositoryError::InvalidData("title must be a string".to_string())
                    })?;
                    let title = normalize_title(title).ok_or_else(|| {
                        RepositoryError::InvalidData(format!(
                            "title must be 1 to {TITLE_MAX_CHARS} characters"
                        ))
                    })?;
                    patch.title = Some(title.to_string());
                }
                "status" => {
                    let status = value.as_bool().ok_or_else(|| {
                        RepositoryError::InvalidData("status must be a boolean".to_string())
                    })?;
                    patch.status = Some(status);
                }
                other => return Err(RepositoryError::InvalidField(other.to_string())),
            }
        }

        Ok(patch)
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none()
    }

    /// Applies the present fields to `item`.
    pub fn apply_to(&self, item: &mut TodoItem) {
        if let Some(title) = &self.title {
            item.title.clone_from(title);
        }
        if let Some(status) = self.status {
            item.status = status;
        }
    }
}
