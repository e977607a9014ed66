//! User credential record and login form.

use serde::{Deserialize, Serialize};

/// Credential record stored under the username key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Argon2 PHC string
    #[serde(alias = "password")]
    pub password_hash: String,
    pub created_at: String,
}

/// Form body for login and registration.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// Public view of the logged-in user.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub username: String,
}
