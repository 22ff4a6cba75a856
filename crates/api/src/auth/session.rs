//! Opaque session tokens carried by an `HttpOnly` cookie.
//!
//! The client holds a random UUID v4 token; the database stores only its
//! SHA-256 hex digest, so a leaked `sessions` table cannot be replayed.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "memo_session";

/// Generate a new session token.
///
/// Returns `(plaintext, hash)`: the plaintext goes into the Set-Cookie
/// header, the hash into the `sessions` table.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    format!("{digest:x}")
}

/// Build the `Set-Cookie` value establishing a session.
pub fn session_cookie(token: &str, max_age_days: i64) -> String {
    let max_age = max_age_days * 24 * 60 * 60;
    format!("{SESSION_COOKIE}={token}; Path=/; Max-Age={max_age}; HttpOnly; SameSite=Lax")
}

/// Build the `Set-Cookie` value clearing the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Extract the session token from a `Cookie` request header value.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}
