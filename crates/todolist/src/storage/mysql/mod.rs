//! MySQL storage backend implementation.
//!
//! This module provides a MySQL implementation of the repository trait using
//! `sqlx`. The pool is built once at startup from [`DatabaseConfig`] and
//! injected into [`MySqlRepository`].
//!
//! [`DatabaseConfig`]: crate::config::DatabaseConfig

mod error;
mod pool;
mod repository;
mod schema;

pub use pool::connect;
pub use repository::MySqlRepository;
