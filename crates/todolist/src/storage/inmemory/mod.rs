//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository trait.
//! It backs the handler tests and can serve local development when the
//! binary is built without the `mysql` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
