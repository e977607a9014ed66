//! Session-based authentication module.
//!
//! Passwords are stored as salted Argon2 hashes; a successful login binds a random
//! cookie token to the username in an in-memory session table.

mod password;
mod session;

pub use password::*;
pub use session::*;

use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

/// Username of the logged-in caller, inserted into request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
}

/// Session layer function that takes the session table as a parameter.
pub async fn session_auth_layer(
    sessions: Arc<SessionStore>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token(request.headers()) else {
        return unauthorized_response("Login required");
    };

    match sessions.username(&token).await {
        Some(username) => {
            request.extensions_mut().insert(CurrentUser { username });
            next.run(request).await
        }
        None => {
            tracing::debug!("Rejected request with unknown session token");
            unauthorized_response("Session expired or invalid")
        }
    }
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    AppError::Unauthorized(message.to_string()).into_response()
}
