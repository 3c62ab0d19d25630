//! HTTP Basic authentication gate.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{AUTHORIZATION, WWW_AUTHENTICATE},
        HeaderMap, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{config::AuthConfig, models::ErrorResponse};

/// Challenge sent with every 401.
pub const CHALLENGE: &str = "Basic realm=\"Restricted\"";

/// Username and password decoded from an `Authorization: Basic` header.
#[derive(Debug, PartialEq, Eq)]
struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Compares both fields without short-circuiting on the first mismatch.
    fn matches(&self, expected: &AuthConfig) -> bool {
        let username = constant_time_eq(self.username.as_bytes(), expected.username.as_bytes());
        let password = constant_time_eq(self.password.as_bytes(), expected.password.as_bytes());
        username & password
    }
}

/// Byte comparison whose timing does not depend on where the inputs differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

fn basic_credentials(headers: &HeaderMap) -> Option<Credentials> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(WWW_AUTHENTICATE, CHALLENGE)],
        Json(ErrorResponse::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED")),
    )
        .into_response()
}

/// Rejects requests whose Basic credentials do not match the shared secret.
pub async fn require_basic_auth(
    State(expected): State<Arc<AuthConfig>>,
    request: Request,
    next: Next,
) -> Response {
    match basic_credentials(request.headers()) {
        Some(credentials) if credentials.matches(&expected) => {
            next.run(request).await
        }
        Some(credentials) => {
            tracing::warn!(username = %credentials.username, "Rejected credentials");
            unauthorized()
        }
        None => {
            tracing::warn!(path = %request.uri().path(), "Missing or malformed credentials");
            unauthorized()
        }
    }
}
