//! HTTP-level integration tests for the memo trash lifecycle:
//! soft-delete, trashed listings, restore, and permanent deletion.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, delete, get, patch, post_json, register_user};
use sqlx::PgPool;

async fn create_memo(app: Router, cookie: &str, content: &str) -> i64 {
    let response = post_json(
        app,
        "/memos",
        Some(cookie),
        serde_json::json!({ "content": content }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Soft delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_moves_memo_to_trash_listing(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = register_user(app.clone(), "Owner", "owner@example.com").await;
    let id = create_memo(app.clone(), &cookie, "to the bin").await;

    let response = delete(app.clone(), &format!("/memos/{id}"), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("deleted"));

    // Gone from the active listing.
    let response = get(app.clone(), "/memos/all", Some(&cookie)).await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());

    // Present in the trash listing.
    let response = get(app.clone(), "/memos/deleted/all", Some(&cookie)).await;
    let json = body_json(response).await;
    let trashed = json.as_array().unwrap();
    assert_eq!(trashed.len(), 1);
    assert_eq!(trashed[0]["id"].as_i64(), Some(id));

    // A second delete finds nothing in the active view.
    let response = delete(app, &format!("/memos/{id}"), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_enforces_ownership(pool: PgPool) {
    let app = build_test_app(pool);
    let owner = register_user(app.clone(), "Owner", "owner@example.com").await;
    let intruder = register_user(app.clone(), "Intruder", "intruder@example.com").await;
    let id = create_memo(app.clone(), &owner, "mine").await;

    let response = delete(app, &format!("/memos/{id}"), Some(&intruder)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Restore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_restore_returns_memo_to_active_listing(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = register_user(app.clone(), "Owner", "owner@example.com").await;
    let id = create_memo(app.clone(), &cookie, "restore me").await;

    delete(app.clone(), &format!("/memos/{id}"), Some(&cookie)).await;

    let response = patch(
        app.clone(),
        &format!("/memos/deleted/restore/{id}"),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("restored"));

    let response = get(app.clone(), "/memos/all", Some(&cookie)).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let response = get(app, "/memos/deleted/all", Some(&cookie)).await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_restore_on_active_memo_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = register_user(app.clone(), "Owner", "owner@example.com").await;
    let id = create_memo(app.clone(), &cookie, "never trashed").await;

    // An active memo is invisible through the trash view.
    let response = patch(
        app,
        &format!("/memos/deleted/restore/{id}"),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_restore_enforces_ownership(pool: PgPool) {
    let app = build_test_app(pool);
    let owner = register_user(app.clone(), "Owner", "owner@example.com").await;
    let intruder = register_user(app.clone(), "Intruder", "intruder@example.com").await;
    let id = create_memo(app.clone(), &owner, "mine").await;
    delete(app.clone(), &format!("/memos/{id}"), Some(&owner)).await;

    let response = patch(
        app,
        &format!("/memos/deleted/restore/{id}"),
        Some(&intruder),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Permanent deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_permanent_delete_requires_trash_first(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = register_user(app.clone(), "Owner", "owner@example.com").await;
    let id = create_memo(app.clone(), &cookie, "destroy me").await;

    // An active memo cannot be destroyed directly.
    let response = delete(app.clone(), &format!("/memos/deleted/{id}"), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    delete(app.clone(), &format!("/memos/{id}"), Some(&cookie)).await;

    let response = delete(app.clone(), &format!("/memos/deleted/{id}"), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("permanently"));

    // Terminal: gone from both listings and unrestorable.
    let response = get(app.clone(), "/memos/deleted/all", Some(&cookie)).await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());

    let response = patch(
        app,
        &format!("/memos/deleted/restore/{id}"),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_permanent_delete_enforces_ownership(pool: PgPool) {
    let app = build_test_app(pool);
    let owner = register_user(app.clone(), "Owner", "owner@example.com").await;
    let intruder = register_user(app.clone(), "Intruder", "intruder@example.com").await;
    let id = create_memo(app.clone(), &owner, "mine").await;
    delete(app.clone(), &format!("/memos/{id}"), Some(&owner)).await;

    let response = delete(app.clone(), &format!("/memos/deleted/{id}"), Some(&intruder)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Still in the owner's trash, untouched.
    let response = get(app, "/memos/deleted/all", Some(&owner)).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_trash_pagination(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = register_user(app.clone(), "Owner", "owner@example.com").await;

    for i in 0..6 {
        let id = create_memo(app.clone(), &cookie, &format!("memo {i}")).await;
        delete(app.clone(), &format!("/memos/{id}"), Some(&cookie)).await;
    }

    let response = get(app, "/memos/deleted/paginate?page=2", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 6);
    assert_eq!(json["last_page"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
