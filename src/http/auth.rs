//! Basic authentication middleware.
//!
//! Every route except `/info` requires Basic credentials compared
//! literally against the configured pair. Failures return 401 with a
//! `WWW-Authenticate: Basic realm="Restricted"` challenge.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::error::AppError;
use super::state::AppState;

/// Username/password pair for Basic authentication.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `SECURITY_USER_NAME` / `SECURITY_USER_PASSWORD`.
    pub fn from_env() -> anyhow::Result<Self> {
        let username = std::env::var("SECURITY_USER_NAME")
            .map_err(|_| anyhow::anyhow!("SECURITY_USER_NAME must be set"))?;
        let password = std::env::var("SECURITY_USER_PASSWORD")
            .map_err(|_| anyhow::anyhow!("SECURITY_USER_PASSWORD must be set"))?;
        Ok(Self { username, password })
    }

    /// Literal comparison against a decoded `user:password` pair.
    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Extract the `user:password` pair from a Basic Authorization header value.
fn decode_basic(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Middleware guarding the protected routes.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(decode_basic)
        .map(|(username, password)| state.credentials.matches(&username, &password))
        .unwrap_or(false);

    if authorized {
        next.run(request).await
    } else {
        AppError::Unauthorized.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_basic_header() {
        // "admin:secret"
        let (username, password) = decode_basic("Basic YWRtaW46c2VjcmV0").unwrap();
        assert_eq!(username, "admin");
        assert_eq!(password, "secret");
    }

    #[test]
    fn rejects_non_basic_schemes_and_bad_encodings() {
        assert!(decode_basic("Bearer token").is_none());
        assert!(decode_basic("Basic not-base64!").is_none());
    }

    #[test]
    fn credentials_compare_literally() {
        let creds = BasicCredentials::new("admin", "secret");
        assert!(creds.matches("admin", "secret"));
        assert!(!creds.matches("Admin", "secret"));
        assert!(!creds.matches("admin", ""));
    }
}
