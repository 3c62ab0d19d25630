//! Cross-cutting request middleware.
//!
//! Layered in [`crate::app`], outermost first: panic recovery, request
//! logging, authentication.

pub mod auth;
pub mod logging;
pub mod recover;

pub use auth::require_basic_auth;
pub use logging::request_span;
pub use recover::panic_response;
