//! Handlers for the memo resource, including the trash lifecycle.
//!
//! Every handler requires an authenticated user. Ownership is enforced
//! after loading the memo through the expected state view: a row missing
//! from that view is a 404 (wrong-state access looks like absence), a row
//! owned by someone else is a 403.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use memo_core::datetime::{format_date, format_datetime, parse_deadline};
use memo_core::error::CoreError;
use memo_core::types::{DbId, Timestamp};
use memo_core::validation::{validate_content, validate_title, FieldErrors};
use memo_db::models::category::CategoryInfo;
use memo_db::models::memo::{CreateMemo, Memo, UpdateMemo};
use memo_db::repositories::{CategoryRepo, MemoCategoryRepo, MemoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{MessageResponse, Paginated, StatusResponse};
use crate::state::AppState;

/// Fixed page size for paginated memo listings.
const PER_PAGE: i64 = 5;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /memos` and `PUT /memos/{id}`.
///
/// Absent fields are authoritative on update: a missing `deadline_at`
/// clears the stored deadline, a missing `category_ids` removes every
/// assignment.
#[derive(Debug, Deserialize)]
pub struct MemoPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_ids: Option<Vec<DbId>>,
    pub deadline_at: Option<String>,
}

/// A memo shaped for API output: joined categories, dates formatted in
/// the display timezone.
#[derive(Debug, Serialize)]
pub struct MemoResponse {
    pub id: DbId,
    pub title: Option<String>,
    pub content: String,
    pub categories: Vec<CategoryInfo>,
    pub deadline_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// ---------------------------------------------------------------------------
// Active-view handlers
// ---------------------------------------------------------------------------

/// GET /memos/all
///
/// All active memos of the current user, most recently updated first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<MemoResponse>>> {
    let memos = MemoRepo::list_active(&state.pool, auth_user.user_id).await?;
    let shaped = shape_memos(&state, memos).await?;
    Ok(Json(shaped))
}

/// GET /memos/paginate?page=N
pub async fn paginate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Paginated<MemoResponse>>> {
    let page = params.page();
    let result =
        MemoRepo::paginate_active(&state.pool, auth_user.user_id, page, PER_PAGE).await?;
    let shaped = shape_memos(&state, result.memos).await?;
    Ok(Json(Paginated::new(shaped, page, PER_PAGE, result.total)))
}

/// POST /memos
///
/// Create a memo owned by the current user and assign its categories.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<MemoPayload>,
) -> AppResult<(StatusCode, Json<StatusResponse<MemoResponse>>)> {
    let (fields, category_ids) = validate_payload(&state, input).await?;

    let memo = MemoRepo::create(
        &state.pool,
        auth_user.user_id,
        &CreateMemo {
            title: fields.title,
            content: fields.content,
            deadline_at: fields.deadline_at,
        },
    )
    .await?;
    MemoCategoryRepo::sync(&state.pool, memo.id, &category_ids).await?;

    tracing::info!(
        user_id = auth_user.user_id,
        memo_id = memo.id,
        categories = category_ids.len(),
        "Memo created"
    );

    let shaped = shape_memo(&state, memo).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::success("Memo created successfully", shaped)),
    ))
}

/// PUT /memos/{id}
///
/// Replace an active memo's fields and its whole category set.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<MemoPayload>,
) -> AppResult<Json<StatusResponse<MemoResponse>>> {
    let memo = find_owned_active(&state, id, auth_user.user_id).await?;
    let (fields, category_ids) = validate_payload(&state, input).await?;

    let updated = MemoRepo::update(
        &state.pool,
        memo.id,
        &UpdateMemo {
            title: fields.title,
            content: fields.content,
            deadline_at: fields.deadline_at,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Memo",
        id,
    }))?;
    let plan = MemoCategoryRepo::sync(&state.pool, updated.id, &category_ids).await?;

    tracing::info!(
        user_id = auth_user.user_id,
        memo_id = updated.id,
        added = plan.to_add.len(),
        removed = plan.to_remove.len(),
        "Memo updated"
    );

    let shaped = shape_memo(&state, updated).await?;
    Ok(Json(StatusResponse::success(
        "Memo updated successfully",
        shaped,
    )))
}

/// DELETE /memos/{id}
///
/// Soft-delete an active memo (moves it to the trash).
pub async fn destroy(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let memo = find_owned_active(&state, id, auth_user.user_id).await?;
    // The state may have flipped between the ownership load and the
    // state-scoped UPDATE; a no-op is reported as absence, not success.
    if !MemoRepo::soft_delete(&state.pool, memo.id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Memo", id }));
    }

    tracing::info!(user_id = auth_user.user_id, memo_id = memo.id, "Memo trashed");

    Ok(Json(MessageResponse {
        message: "Memo deleted successfully",
    }))
}

// ---------------------------------------------------------------------------
// Trash-view handlers
// ---------------------------------------------------------------------------

/// GET /memos/deleted/all
pub async fn list_trashed(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<MemoResponse>>> {
    let memos = MemoRepo::list_trashed(&state.pool, auth_user.user_id).await?;
    let shaped = shape_memos(&state, memos).await?;
    Ok(Json(shaped))
}

/// GET /memos/deleted/paginate?page=N
pub async fn paginate_trashed(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Paginated<MemoResponse>>> {
    let page = params.page();
    let result =
        MemoRepo::paginate_trashed(&state.pool, auth_user.user_id, page, PER_PAGE).await?;
    let shaped = shape_memos(&state, result.memos).await?;
    Ok(Json(Paginated::new(shaped, page, PER_PAGE, result.total)))
}

/// PATCH /memos/deleted/restore/{id}
///
/// Move a trashed memo back to the active view.
pub async fn restore(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let memo = find_owned_trashed(&state, id, auth_user.user_id).await?;
    if !MemoRepo::restore(&state.pool, memo.id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Memo", id }));
    }

    tracing::info!(user_id = auth_user.user_id, memo_id = memo.id, "Memo restored");

    Ok(Json(MessageResponse {
        message: "Memo restored successfully",
    }))
}

/// DELETE /memos/deleted/{id}
///
/// Permanently destroy a trashed memo. Association rows cascade.
pub async fn destroy_permanently(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let memo = find_owned_trashed(&state, id, auth_user.user_id).await?;
    if !MemoRepo::hard_delete(&state.pool, memo.id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Memo", id }));
    }

    tracing::info!(
        user_id = auth_user.user_id,
        memo_id = memo.id,
        "Memo permanently deleted"
    );

    Ok(Json(MessageResponse {
        message: "Memo permanently deleted",
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validated memo fields ready for the repository layer.
struct ValidatedFields {
    title: Option<String>,
    content: String,
    deadline_at: Option<Timestamp>,
}

/// Validate a memo payload, collecting every field failure into one 422.
///
/// Returns the parsed fields plus the (verified-existing) category ids.
async fn validate_payload(
    state: &AppState,
    input: MemoPayload,
) -> AppResult<(ValidatedFields, Vec<DbId>)> {
    let mut errors = FieldErrors::new();

    if let Err(msg) = validate_title(input.title.as_deref()) {
        errors.add("title", msg);
    }

    let content = input.content.unwrap_or_default();
    if let Err(msg) = validate_content(&content) {
        errors.add("content", msg);
    }

    let deadline_at = match input.deadline_at.as_deref() {
        Some(raw) => match parse_deadline(
            raw,
            state.config.deadline_date_format,
            state.config.display_offset(),
        ) {
            Ok(ts) => Some(ts),
            Err(msg) => {
                errors.add("deadline_at", msg);
                None
            }
        },
        None => None,
    };

    let category_ids = input.category_ids.unwrap_or_default();
    if !category_ids.is_empty() {
        let existing = CategoryRepo::find_existing_ids(&state.pool, &category_ids).await?;
        for id in &category_ids {
            if !existing.contains(id) {
                errors.add("category_ids", format!("The selected category id {id} is invalid"));
            }
        }
    }

    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors)));
    }

    Ok((
        ValidatedFields {
            title: input.title,
            content,
            deadline_at,
        },
        category_ids,
    ))
}

/// Load an active memo and check ownership (404 if absent or trashed,
/// 403 if owned by someone else).
async fn find_owned_active(state: &AppState, id: DbId, user_id: DbId) -> AppResult<Memo> {
    let memo = MemoRepo::find_active_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Memo",
            id,
        }))?;
    check_owner(&memo, user_id)?;
    Ok(memo)
}

/// Load a trashed memo and check ownership (404 if absent or still active).
async fn find_owned_trashed(state: &AppState, id: DbId, user_id: DbId) -> AppResult<Memo> {
    let memo = MemoRepo::find_trashed_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Memo",
            id,
        }))?;
    check_owner(&memo, user_id)?;
    Ok(memo)
}

fn check_owner(memo: &Memo, user_id: DbId) -> AppResult<()> {
    if memo.user_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this memo".into(),
        )));
    }
    Ok(())
}

/// Shape one memo, loading its categories with a single query.
async fn shape_memo(state: &AppState, memo: Memo) -> AppResult<MemoResponse> {
    let categories = MemoCategoryRepo::list_for_memo(&state.pool, memo.id).await?;
    Ok(to_response(memo, categories, state.config.display_offset()))
}

/// Shape a whole listing, batch-loading categories with one query instead
/// of one per memo.
async fn shape_memos(state: &AppState, memos: Vec<Memo>) -> AppResult<Vec<MemoResponse>> {
    let ids: Vec<DbId> = memos.iter().map(|m| m.id).collect();
    let rows = MemoCategoryRepo::list_for_memos(&state.pool, &ids).await?;

    let mut by_memo: BTreeMap<DbId, Vec<CategoryInfo>> = BTreeMap::new();
    for row in rows {
        by_memo.entry(row.memo_id).or_default().push(CategoryInfo {
            id: row.id,
            name: row.name,
            color_code: row.color_code,
        });
    }

    let offset = state.config.display_offset();
    Ok(memos
        .into_iter()
        .map(|memo| {
            let categories = by_memo.remove(&memo.id).unwrap_or_default();
            to_response(memo, categories, offset)
        })
        .collect())
}

fn to_response(memo: Memo, categories: Vec<CategoryInfo>, offset: FixedOffset) -> MemoResponse {
    MemoResponse {
        id: memo.id,
        title: memo.title,
        content: memo.content,
        categories,
        deadline_at: memo.deadline_at.map(|ts| format_date(ts, offset)),
        created_at: format_datetime(memo.created_at, offset),
        updated_at: format_datetime(memo.updated_at, offset),
    }
}
