//! Registration, login and logout endpoints.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    Extension,
};

use super::{success, ApiResponse, ApiResult, ValidForm};
use crate::auth::{
    clear_session_cookie, hash_password_blocking, session_cookie, session_token,
    verify_password_blocking, CurrentUser,
};
use crate::errors::AppError;
use crate::models::{CredentialsForm, SessionInfo};
use crate::AppState;

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// POST /api/register - Create a new user.
pub async fn register(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<CredentialsForm>,
) -> ApiResult<SessionInfo> {
    if form.username.trim().is_empty() {
        return Err(AppError::Validation("Username is required".to_string()));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    // Skip hashing for names that are already taken
    if state.store.lock().await.user_exists(&form.username) {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }

    // Hash without holding the store lock; insert_user re-checks for a race
    let password_hash = hash_password_blocking(form.password).await?;
    state
        .store
        .lock()
        .await
        .insert_user(&form.username, password_hash)?;

    success(SessionInfo {
        username: form.username,
    })
}

/// POST /api/login - Check credentials and start a session.
pub async fn login(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<CredentialsForm>,
) -> Result<impl IntoResponse, AppError> {
    let stored_hash = state
        .store
        .lock()
        .await
        .stored_password_hash(&form.username)
        .map(str::to_string);

    let valid = match stored_hash {
        Some(hash) => verify_password_blocking(hash, form.password).await?,
        None => {
            tracing::debug!("Login attempt for unknown user {}", form.username);
            false
        }
    };

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state.sessions.create(&form.username).await;
    tracing::info!("User {} logged in", form.username);

    Ok((
        [(
            header::SET_COOKIE,
            session_cookie(&token, state.config.cookie_secure),
        )],
        ApiResponse::new(SessionInfo {
            username: form.username,
        }),
    ))
}

/// POST /api/logout - End the current session, if any.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        if let Some(username) = state.sessions.remove(&token).await {
            tracing::info!("User {} logged out", username);
        }
    }

    (
        [(
            header::SET_COOKIE,
            clear_session_cookie(state.config.cookie_secure),
        )],
        ApiResponse::new(()),
    )
}

/// GET /api/session - Who is logged in.
pub async fn current_session(Extension(user): Extension<CurrentUser>) -> ApiResult<SessionInfo> {
    success(SessionInfo {
        username: user.username,
    })
}
