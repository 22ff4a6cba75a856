//! Route definitions for registration and session management.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /createUser  -> register
/// POST /login       -> login
/// POST /logout      -> logout
/// GET  /user        -> current user (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/createUser", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
}
