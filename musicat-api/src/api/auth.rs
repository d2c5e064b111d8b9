//! Registration, login and profile endpoints

use axum::{extract::State, http::StatusCode, Json};
use musicat_common::auth::{hash_password, issue_token, verify_password};
use musicat_common::db::User;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::extract::{AuthenticatedUser, ValidatedJson};
use crate::db::users;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session token plus the account it belongs to
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// bcrypt is CPU bound; keep it off the async workers
async fn hash_off_thread(password: String) -> ApiResult<String> {
    let hashed = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))??;
    Ok(hashed)
}

async fn verify_off_thread(password: String, stored: String) -> ApiResult<bool> {
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .map_err(|e| ApiError::Internal(format!("password check failed: {}", e)))??;
    Ok(matches)
}

/// Hash checked when the username is unknown, so both failures cost one bcrypt verify
static UNKNOWN_USER_HASH: OnceCell<String> = OnceCell::const_new();

async fn unknown_user_hash() -> ApiResult<String> {
    UNKNOWN_USER_HASH
        .get_or_try_init(|| hash_off_thread("musicat-unknown-user".to_string()))
        .await
        .cloned()
}

fn session_token(user_id: i64, state: &AppState) -> ApiResult<String> {
    issue_token(user_id, &state.token_secret).map_err(|e| ApiError::Internal(e.to_string()))
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let hashed = hash_off_thread(body.password).await?;
    let user = users::create_user(&state.db, &body.username, &body.email, &hashed).await?;

    let token = session_token(user.id, &state)?;
    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let invalid = || ApiError::Unauthorized("Invalid username or password".to_string());

    let Some(creds) = users::find_credentials(&state.db, &body.username).await? else {
        warn!("Login for unknown user {}", body.username);
        verify_off_thread(body.password, unknown_user_hash().await?).await?;
        return Err(invalid());
    };

    if !verify_off_thread(body.password, creds.password_hash.clone()).await? {
        warn!("Wrong password for user {}", creds.username);
        return Err(invalid());
    }

    info!("User {} logged in", creds.id);
    let user = creds.user();
    let token = session_token(user.id, &state)?;
    Ok(Json(AuthResponse { token, user }))
}

/// GET /profile
pub async fn profile(State(state): State<AppState>, caller: AuthenticatedUser) -> ApiResult<Json<User>> {
    users::get_user(&state.db, caller.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::Unauthorized("Account no longer exists".to_string()))
}
