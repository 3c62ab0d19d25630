//! Connection pool construction.

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use todolist_core::storage::Result;

use super::error::map_sqlx_error;
use crate::config::DatabaseConfig;

/// Opens a MySQL pool and verifies connectivity.
///
/// The first connection is acquired eagerly, bounded by
/// `connect_timeout`, so an unreachable database fails here rather than on
/// the first request.
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name);

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        max_connections = config.max_connections,
        "Connecting to database"
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime())
        .acquire_timeout(config.connect_timeout())
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)?;

    tracing::info!("Connected to database");

    Ok(pool)
}
