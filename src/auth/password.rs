//! Salted password hashing with Argon2id.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2};
use tokio::task::spawn_blocking;

use crate::errors::AppError;

/// Hash a plaintext password with a fresh random salt, returning a PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC string.
///
/// A mismatch is `Ok(false)`. So is a stored hash this server cannot verify
/// (e.g. a Werkzeug `scrypt:`/`pbkdf2:` hash carried over from an older data file).
pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool, AppError> {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password hash has an unsupported format: {}", e);
            return Ok(false);
        }
    };

    if Algorithm::try_from(parsed.algorithm).is_err() {
        tracing::warn!(
            "Stored password hash uses unsupported algorithm {}",
            parsed.algorithm
        );
        return Ok(false);
    }

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// [`hash_password`] on the blocking thread pool.
pub async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
}

/// [`verify_password`] on the blocking thread pool.
pub async fn verify_password_blocking(
    stored_hash: String,
    password: String,
) -> Result<bool, AppError> {
    spawn_blocking(move || verify_password(&stored_hash, &password))
        .await
        .map_err(|e| AppError::Internal(format!("Password check task failed: {}", e)))?
}

/// Werkzeug hashes of "secret1", as found in data files of the older Flask app.
#[cfg(test)]
pub const WERKZEUG_SCRYPT: &str = "scrypt:32768:8:1$k3Fq9ZpL2mXa7TbW$c373e6524e2aa62f08bec292ce0ef4aadaefadd089f03a1217a2141858afbe1d3b7215d6bb3bd334a4237398ff054a7bcdca9ddc71f121b4b7ed6156b653f2ba";
#[cfg(test)]
pub const WERKZEUG_PBKDF2: &str = "pbkdf2:sha256:600000$Yh8sQ2vNc4RtLp0d$a11da024efce38e5f97e606859318cb9a928ee79096af46e3fee20dc96a63402";
