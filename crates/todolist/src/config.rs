use std::{env, fmt, str::FromStr, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    /// Log output format (default: text)
    pub log_format: LogFormat,
}

/// MySQL connection and pool settings.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Database user (default: "Raihan")
    pub user: String,
    /// Database password (default: "Pastibisa")
    pub password: String,
    /// Database host (default: "localhost")
    pub host: String,
    /// Database port (default: 3306)
    pub port: u16,
    /// Database name (default: "Gin_todo")
    pub name: String,
    /// Maximum open connections in the pool (default: 10)
    pub max_connections: u32,
    /// Connections kept open while idle (default: 2)
    pub min_connections: u32,
    /// Age in seconds after which a connection is recycled (default: 3600)
    pub max_lifetime_seconds: u64,
    /// Deadline in seconds for acquiring a connection (default: 5)
    pub connect_timeout_seconds: u64,
}

/// Shared secret for the Basic authentication gate.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Expected username (default: "key")
    pub username: String,
    /// Expected password (default: "value")
    pub password: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DB_USER`, `DB_PASS`, `DB_HOST`, `DB_PORT`, `DB_NAME` - MySQL connection
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 10)
    /// - `DB_MIN_CONNECTIONS` - Idle pool floor (default: 2)
    /// - `DB_MAX_LIFETIME_SECONDS` - Connection recycle age (default: 3600)
    /// - `DB_CONNECT_TIMEOUT_SECONDS` - Connection acquire deadline (default: 5)
    /// - `AUTH_USER`, `AUTH_PASS` - Basic auth credentials (default: "key" / "value")
    /// - `LOG_FORMAT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Missing or unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            database: DatabaseConfig {
                user: string("DB_USER", "Raihan"),
                password: string("DB_PASS", "Pastibisa"),
                host: string("DB_HOST", "localhost"),
                port: parse_or(&lookup, "DB_PORT", 3306),
                name: string("DB_NAME", "Gin_todo"),
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10),
                min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 2),
                max_lifetime_seconds: parse_or(&lookup, "DB_MAX_LIFETIME_SECONDS", 3600),
                connect_timeout_seconds: parse_or(&lookup, "DB_CONNECT_TIMEOUT_SECONDS", 5),
            },
            auth: AuthConfig {
                username: string("AUTH_USER", "key"),
                password: string("AUTH_PASS", "value"),
            },
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
        }
    }
}

impl DatabaseConfig {
    /// Get the connection recycle age as a Duration.
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_seconds)
    }

    /// Get the connection acquire deadline as a Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("max_lifetime_seconds", &self.max_lifetime_seconds)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}
