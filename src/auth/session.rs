//! In-memory login sessions keyed by a random cookie token.

use std::collections::HashMap;

use axum::http::{header, HeaderMap};
use tokio::sync::RwLock;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "diary_session";

/// Table of live sessions. Sessions do not survive a restart.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `username` and return its token.
    pub async fn create(&self, username: &str) -> String {
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.sessions
            .write()
            .await
            .insert(token.clone(), username.to_string());
        token
    }

    /// Username bound to `token`, if the session is live.
    pub async fn username(&self, token: &str) -> Option<String> {
        self.sessions.read().await.get(token).cloned()
    }

    /// End the session. Returns the username it belonged to.
    pub async fn remove(&self, token: &str) -> Option<String> {
        self.sessions.write().await.remove(token)
    }
}

/// Extract the session token from the request's `Cookie` headers.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value that installs the session token.
pub fn session_cookie(token: &str, secure: bool) -> String {
    format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/{}",
        SESSION_COOKIE,
        token,
        if secure { "; Secure" } else { "" }
    )
}

/// `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie(secure: bool) -> String {
    format!(
        "{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0{}",
        SESSION_COOKIE,
        if secure { "; Secure" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_session_lifecycle() {
        let store = SessionStore::new();
        let token = store.create("alice").await;

        assert_eq!(store.username(&token).await.as_deref(), Some("alice"));
        assert_eq!(store.remove(&token).await.as_deref(), Some("alice"));
        assert!(store.username(&token).await.is_none());
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let store = SessionStore::new();
        let a = store.create("alice").await;
        let b = store.create("alice").await;
        assert_ne!(a, b);
    }

    #[test]
    fn test_session_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; diary_session=abc123; lang=en"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_token_missing_or_empty() {
        let mut headers = HeaderMap::new();
        assert!(session_token(&headers).is_none());

        headers.insert(header::COOKIE, HeaderValue::from_static("diary_session="));
        assert!(session_token(&headers).is_none());
    }

    #[test]
    fn test_cookie_values() {
        assert_eq!(
            session_cookie("tok", false),
            "diary_session=tok; HttpOnly; SameSite=Lax; Path=/"
        );
        assert!(session_cookie("tok", true).ends_with("; Secure"));
        assert!(clear_session_cookie(false).contains("Max-Age=0"));
    }
}
