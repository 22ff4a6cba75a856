//! Handler for the category listing.
//!
//! Categories are fixed reference data managed outside the API, so the
//! only operation is a public read.

use axum::extract::State;
use axum::Json;

use memo_db::models::category::Category;
use memo_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::response::StatusResponse;
use crate::state::AppState;

/// GET /categories
///
/// All categories ordered by name. No authentication required.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<StatusResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(StatusResponse::success(
        "Categories retrieved successfully",
        categories,
    )))
}
