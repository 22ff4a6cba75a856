//! Route definitions for the memo resource.

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::handlers::memos;
use crate::state::AppState;

/// Routes mounted at `/memos`. All require a session cookie.
///
/// ```text
/// GET    /all                   -> list active
/// GET    /paginate?page=N       -> paginate active
/// POST   /                      -> create
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> soft-delete
/// GET    /deleted/all           -> list trashed
/// GET    /deleted/paginate      -> paginate trashed
/// PATCH  /deleted/restore/{id}  -> restore
/// DELETE /deleted/{id}          -> permanently delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/memos/all", get(memos::list))
        .route("/memos/paginate", get(memos::paginate))
        .route("/memos", post(memos::create))
        .route("/memos/{id}", put(memos::update).delete(memos::destroy))
        .route("/memos/deleted/all", get(memos::list_trashed))
        .route("/memos/deleted/paginate", get(memos::paginate_trashed))
        .route("/memos/deleted/restore/{id}", patch(memos::restore))
        .route("/memos/deleted/{id}", delete(memos::destroy_permanently))
}
