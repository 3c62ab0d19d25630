//! MySQL schema definition and SQL query constants.

/// SQL statement to create the todo table.
pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todolists (
    id BIGINT NOT NULL AUTO_INCREMENT,
    title VARCHAR(300) NOT NULL,
    status BOOLEAN NOT NULL DEFAULT FALSE,
    PRIMARY KEY (id)
)
"#;

pub const SELECT_ALL: &str = r#"
SELECT id, title, status
FROM todolists
ORDER BY id ASC
"#;

pub const SELECT_BY_ID: &str = r#"
SELECT id, title, status
FROM todolists
WHERE id = ?
"#;

pub const INSERT: &str = r#"
INSERT INTO todolists (title, status)
VALUES (?, FALSE)
"#;

/// Prefix for partial updates; the `SET` list is appended per patch.
pub const UPDATE_PREFIX: &str = "UPDATE todolists SET ";

pub const DELETE: &str = r#"
DELETE FROM todolists
WHERE id = ?
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_is_idempotent_and_typed() {
        assert!(CREATE_TABLE.contains("CREATE TABLE IF NOT EXISTS todolists"));
        assert!(CREATE_TABLE.contains("AUTO_INCREMENT"));
        assert!(CREATE_TABLE.contains("VARCHAR(300)"));
        assert!(CREATE_TABLE.contains("DEFAULT FALSE"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(SELECT_ALL.contains("ORDER BY id"));
        assert!(SELECT_BY_ID.contains("WHERE id = ?"));
        assert!(INSERT.contains("INSERT"));
        assert!(UPDATE_PREFIX.starts_with("UPDATE todolists SET"));
        assert!(DELETE.contains("DELETE"));
    }
}
