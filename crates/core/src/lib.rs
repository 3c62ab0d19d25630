//! Core domain types and storage contracts for the todolist service.
//!
//! This crate holds no I/O. Storage backends and the HTTP surface live in the
//! `todolist` binary and depend on the contracts defined here.

pub mod storage;
pub mod todo;
