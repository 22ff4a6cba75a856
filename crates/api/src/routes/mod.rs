pub mod auth;
pub mod categories;
pub mod health;
pub mod memos;

use axum::Router;

use crate::state::AppState;

/// Build the public route tree (mounted at the root).
///
/// Route hierarchy:
///
/// ```text
/// /createUser                       register (public)
/// /login                            login (public)
/// /logout                           logout (cookie optional)
/// /user                             current user (requires session)
///
/// /memos/all                        list active memos
/// /memos/paginate?page=N            paginate active memos
/// /memos                            create (POST)
/// /memos/{id}                       update (PUT), soft-delete (DELETE)
/// /memos/deleted/all                list trashed memos
/// /memos/deleted/paginate?page=N    paginate trashed memos
/// /memos/deleted/restore/{id}       restore (PATCH)
/// /memos/deleted/{id}               permanently delete (DELETE)
///
/// /categories                       list categories (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(memos::router())
        .merge(categories::router())
}
