//! Route definitions for the category resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET / -> list (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/categories", get(categories::list))
}
