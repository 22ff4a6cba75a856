//! Integration tests for the memo soft-delete lifecycle.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Soft-deleted memos leave the active view and appear in the trash view
//! - Restore moves a memo back to the active view
//! - Hard-delete only matches trashed rows and is permanent
//! - Soft-delete is idempotent (second call returns `false`)

use sqlx::PgPool;

use memo_core::memo::MemoState;
use memo_db::models::memo::CreateMemo;
use memo_db::models::user::CreateUser;
use memo_db::repositories::{MemoRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_test_user(pool: &PgPool, email: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: "lifecycle tester".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");
    user.id
}

fn new_memo(content: &str) -> CreateMemo {
    CreateMemo {
        title: None,
        content: content.to_string(),
        deadline_at: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_moves_memo_to_trash_view(pool: PgPool) {
    let user_id = create_test_user(&pool, "trash@test.com").await;
    let memo = MemoRepo::create(&pool, user_id, &new_memo("to the bin"))
        .await
        .unwrap();
    assert_eq!(memo.state(), MemoState::Active);

    let deleted = MemoRepo::soft_delete(&pool, memo.id).await.unwrap();
    assert!(deleted, "soft_delete should return true on first call");

    // Gone from the active view.
    assert!(MemoRepo::find_active_by_id(&pool, memo.id)
        .await
        .unwrap()
        .is_none());
    let active = MemoRepo::list_active(&pool, user_id).await.unwrap();
    assert!(!active.iter().any(|m| m.id == memo.id));

    // Present in the trash view, with the trashed state derived.
    let trashed = MemoRepo::find_trashed_by_id(&pool, memo.id)
        .await
        .unwrap()
        .expect("memo should be findable through the trash view");
    assert_eq!(trashed.state(), MemoState::Trashed);
    let listing = MemoRepo::list_trashed(&pool, user_id).await.unwrap();
    assert!(listing.iter().any(|m| m.id == memo.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_is_idempotent(pool: PgPool) {
    let user_id = create_test_user(&pool, "idem@test.com").await;
    let memo = MemoRepo::create(&pool, user_id, &new_memo("delete twice"))
        .await
        .unwrap();

    assert!(MemoRepo::soft_delete(&pool, memo.id).await.unwrap());
    assert!(
        !MemoRepo::soft_delete(&pool, memo.id).await.unwrap(),
        "second soft_delete should return false (already trashed)"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_restore_returns_memo_to_active_view(pool: PgPool) {
    let user_id = create_test_user(&pool, "restore@test.com").await;
    let memo = MemoRepo::create(&pool, user_id, &new_memo("restore me"))
        .await
        .unwrap();

    MemoRepo::soft_delete(&pool, memo.id).await.unwrap();
    let restored = MemoRepo::restore(&pool, memo.id).await.unwrap();
    assert!(restored, "restore should return true");

    let found = MemoRepo::find_active_by_id(&pool, memo.id)
        .await
        .unwrap()
        .expect("restored memo should be active again");
    assert_eq!(found.content, "restore me");
    assert!(
        MemoRepo::find_trashed_by_id(&pool, memo.id)
            .await
            .unwrap()
            .is_none(),
        "restored memo should leave the trash view"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_restore_fails_on_active_memo(pool: PgPool) {
    let user_id = create_test_user(&pool, "noop-restore@test.com").await;
    let memo = MemoRepo::create(&pool, user_id, &new_memo("never trashed"))
        .await
        .unwrap();

    let restored = MemoRepo::restore(&pool, memo.id).await.unwrap();
    assert!(!restored, "restore must not match an active memo");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_hard_delete_requires_trashed_state(pool: PgPool) {
    let user_id = create_test_user(&pool, "hard@test.com").await;
    let memo = MemoRepo::create(&pool, user_id, &new_memo("kill me properly"))
        .await
        .unwrap();

    // Active -> Destroyed directly is not permitted.
    let deleted = MemoRepo::hard_delete(&pool, memo.id).await.unwrap();
    assert!(!deleted, "hard_delete must not match an active memo");

    // Active -> Trashed -> Destroyed works and is terminal.
    MemoRepo::soft_delete(&pool, memo.id).await.unwrap();
    assert!(MemoRepo::hard_delete(&pool, memo.id).await.unwrap());

    assert!(MemoRepo::find_active_by_id(&pool, memo.id)
        .await
        .unwrap()
        .is_none());
    assert!(MemoRepo::find_trashed_by_id(&pool, memo.id)
        .await
        .unwrap()
        .is_none());
    assert!(
        !MemoRepo::restore(&pool, memo.id).await.unwrap(),
        "a destroyed memo cannot be restored"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_only_touches_active_memos(pool: PgPool) {
    let user_id = create_test_user(&pool, "update@test.com").await;
    let memo = MemoRepo::create(&pool, user_id, &new_memo("original"))
        .await
        .unwrap();
    MemoRepo::soft_delete(&pool, memo.id).await.unwrap();

    let updated = MemoRepo::update(
        &pool,
        memo.id,
        &memo_db::models::memo::UpdateMemo {
            title: Some("nope".to_string()),
            content: "should not apply".to_string(),
            deadline_at: None,
        },
    )
    .await
    .unwrap();

    assert!(updated.is_none(), "update must not match a trashed memo");
    let row = MemoRepo::find_trashed_by_id(&pool, memo.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.content, "original");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_clears_deadline_when_null(pool: PgPool) {
    let user_id = create_test_user(&pool, "deadline@test.com").await;
    let memo = MemoRepo::create(
        &pool,
        user_id,
        &CreateMemo {
            title: Some("dated".to_string()),
            content: "has a deadline".to_string(),
            deadline_at: Some(chrono::Utc::now()),
        },
    )
    .await
    .unwrap();
    assert!(memo.deadline_at.is_some());

    let updated = MemoRepo::update(
        &pool,
        memo.id,
        &memo_db::models::memo::UpdateMemo {
            title: memo.title.clone(),
            content: memo.content.clone(),
            deadline_at: None,
        },
    )
    .await
    .unwrap()
    .expect("update should succeed");

    assert!(
        updated.deadline_at.is_none(),
        "a NULL deadline in the update must clear the stored value"
    );
}
