//! Shared-secret request signing
//!
//! A protected route is authorised by an HMAC-SHA256 digest over the
//! route's canonical message: the lowercase method, one space, and the
//! route template (`"post /api/v1/genres"`). The digest depends on neither
//! path parameters nor payload, so a captured digest stays valid for any
//! body sent to the same route.

use crate::error::{AppError, Result};
use axum::http::{header::AUTHORIZATION, HeaderMap, Method};
use hmac::{Hmac, Mac};
use metrics::counter;
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// A route that requires a request signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRoute {
    pub method: Method,
    pub template: &'static str,
}

impl SignedRoute {
    pub const fn new(method: Method, template: &'static str) -> Self {
        Self { method, template }
    }

    /// `"<method> <template>"` with the method lowercased
    pub fn canonical_message(&self) -> String {
        format!(
            "{} {}",
            self.method.as_str().to_ascii_lowercase(),
            self.template
        )
    }
}

/// `POST /api/v1/genres`
pub const CREATE_GENRE_ROUTE: SignedRoute = SignedRoute::new(Method::POST, "/api/v1/genres");

/// Verifies request signatures with the process-wide secret.
#[derive(Clone)]
pub struct RequestAuthenticator {
    mac: HmacSha256,
}

impl std::fmt::Debug for RequestAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestAuthenticator").finish_non_exhaustive()
    }
}

impl RequestAuthenticator {
    pub fn new(secret: &str) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid HMAC key: {}", e)))?;
        Ok(Self { mac })
    }

    /// Hex-encoded digest a client must present for `route`.
    pub fn sign(&self, route: &SignedRoute) -> String {
        let mut mac = self.mac.clone();
        mac.update(route.canonical_message().as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Check the `Authorization` header of a request to `route`.
    pub fn verify(&self, route: &SignedRoute, headers: &HeaderMap) -> Result<()> {
        let header = match headers.get(AUTHORIZATION).map(|v| v.to_str()) {
            Some(Ok(value)) if !value.trim().is_empty() => value,
            Some(Err(_)) => {
                return Err(self.reject(route, "malformed", "Malformed authorization header"))
            }
            _ => return Err(self.reject(route, "missing", "Missing authorization header")),
        };

        let presented = presented_credential(header);
        let expected = self.sign(route);

        if constant_time_eq(expected.as_bytes(), presented.as_bytes()) {
            Ok(())
        } else {
            Err(self.reject(route, "mismatch", "Invalid request signature"))
        }
    }

    fn reject(&self, route: &SignedRoute, reason: &'static str, message: &str) -> AppError {
        warn!(
            route = %route.canonical_message(),
            reason,
            "Request signature verification failed"
        );
        counter!("bookshelf_auth_failures_total", "reason" => reason).increment(1);
        AppError::Forbidden(message.to_string())
    }
}

/// Strip at most one leading whitespace-delimited token (the scheme label,
/// which is not checked) and return the rest. A bare digest is returned as is.
pub fn presented_credential(header: &str) -> &str {
    let header = header.trim();
    match header.split_once(char::is_whitespace) {
        Some((_scheme, rest)) => rest.trim_start(),
        None => header,
    }
}

/// Constant-time byte comparison
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
