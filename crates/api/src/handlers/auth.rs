//! Handlers for registration, login, logout, and the current user.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use memo_core::error::CoreError;
use memo_core::validation::{
    validate_email, validate_name, validate_password, FieldErrors,
};
use memo_db::models::session::CreateSession;
use memo_db::models::user::{CreateUser, UserResponse};
use memo_db::repositories::{SessionRepo, UserRepo};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{
    clear_session_cookie, generate_session_token, hash_session_token, session_cookie,
    token_from_cookie_header,
};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /createUser`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /createUser
///
/// Register a new account and establish a session. Returns 204 with a
/// session cookie.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    // Field validation, collecting every failure.
    let mut errors = FieldErrors::new();
    if let Err(msg) = validate_name(&input.name) {
        errors.add("name", msg);
    }
    if let Err(msg) = validate_email(&input.email) {
        errors.add("email", msg);
    }
    if let Err(msg) = validate_password(&input.password) {
        errors.add("password", msg);
    }
    if input.password != input.password_confirmation {
        errors.add("password", "The password confirmation does not match");
    }

    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors)));
    }

    // Hash and create. The unique constraint is the authoritative
    // duplicate-email check (no pre-query to race against); a violation
    // surfaces in the same field-error shape as the other failures.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = match UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
        },
    )
    .await
    {
        Ok(user) => user,
        Err(err) if is_unique_violation(&err, "uq_users_email") => {
            let mut errors = FieldErrors::new();
            errors.add("email", "The email has already been taken");
            return Err(AppError::Core(CoreError::Validation(errors)));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(user_id = user.id, "User registered");

    // Establish the session.
    let cookie = create_session(&state, user.id).await?;
    Ok((StatusCode::NO_CONTENT, AppendHeaders([(SET_COOKIE, cookie)])))
}

/// POST /login
///
/// Authenticate with email + password. The failure message never reveals
/// whether the email exists. On success the session is regenerated: any
/// session presented by the incoming cookie is revoked and a fresh one
/// is issued.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    // Session regeneration: drop whatever session the client presented.
    revoke_cookie_session(&state, &headers).await?;

    let cookie = create_session(&state, user.id).await?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok((StatusCode::NO_CONTENT, AppendHeaders([(SET_COOKIE, cookie)])))
}

/// POST /logout
///
/// Revoke the cookie's session if present and clear the cookie.
/// Idempotent: returns 204 whether or not a live session existed.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let revoked = revoke_cookie_session(&state, &headers).await?;
    if revoked {
        tracing::info!("User logged out");
    }

    Ok((
        StatusCode::NO_CONTENT,
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
    ))
}

/// GET /user
///
/// Return the authenticated user's profile (no password hash).
pub async fn current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(user.into()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a session row for `user_id` and return the Set-Cookie value.
async fn create_session(state: &AppState, user_id: i64) -> AppResult<String> {
    let (plaintext, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::days(state.config.session_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    Ok(session_cookie(&plaintext, state.config.session_expiry_days))
}

/// Revoke the session named by the request's cookie, if any.
async fn revoke_cookie_session(state: &AppState, headers: &HeaderMap) -> AppResult<bool> {
    let token = headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(token_from_cookie_header);

    match token {
        Some(token) => {
            let revoked =
                SessionRepo::revoke_by_token_hash(&state.pool, &hash_session_token(token))
                    .await?;
            Ok(revoked)
        }
        None => Ok(false),
    }
}
