//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `todolist_core::storage`. The backend is selected at compile
//! time via feature flags.
//!
//! # Feature Flags
//!
//! - `mysql` (default): MySQL storage backend using `sqlx`
//! - `inmemory`: In-memory storage backend (data is lost on restart)
//!
//! When both are enabled the server uses MySQL. The in-memory backend is
//! always compiled for tests.
//!
//! # Examples
//!
//! Build with MySQL (default):
//! ```bash
//! cargo build -p todolist
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p todolist --no-default-features --features inmemory
//! ```

#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;
