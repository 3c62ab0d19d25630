use serde::Deserialize;

use todolist_core::todo::normalize_title;

/// Request payload for creating a new to-do item.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
}

impl CreateTodo {
    /// Returns the title trimmed of surrounding whitespace, if it is
    /// non-empty and fits the title column.
    pub fn valid_title(&self) -> Option<&str> {
        normalize_title(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use todolist_core::todo::TITLE_MAX_CHARS;

    use super::*;

    #[test]
    fn test_valid_title_trims_whitespace() {
        let payload = CreateTodo {
            title: "  Makan  ".to_string(),
        };

        assert_eq!(payload.valid_title(), Some("Makan"));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let payload = CreateTodo {
            title: " \t".to_string(),
        };

        assert_eq!(payload.valid_title(), None);
    }

    #[test]
    fn test_overlong_title_is_rejected() {
        let payload = CreateTodo {
            title: "a".repeat(TITLE_MAX_CHARS + 1),
        };

        assert_eq!(payload.valid_title(), None);
    }

    #[test]
    fn test_missing_title_deserializes_to_empty() {
        let payload: CreateTodo = serde_json::from_str("{}").unwrap();

        assert_eq!(payload.valid_title(), None);
    }
}
