//! Configuration module for the diary backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON storage file
    pub data_file: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log line format
    pub log_format: LogFormat,
    /// Mark the session cookie `Secure` (serve behind HTTPS)
    pub cookie_secure: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_file = env::var("DIARY_DATA_FILE")
            .unwrap_or_else(|_| "data.json".to_string())
            .into();

        let bind_addr_raw =
            env::var("DIARY_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
        let bind_addr = bind_addr_raw.parse().map_err(|e| {
            AppError::Internal(format!(
                "Invalid DIARY_BIND_ADDR {:?}: {}",
                bind_addr_raw, e
            ))
        })?;

        let log_level = env::var("DIARY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = env::var("DIARY_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or(LogFormat::Pretty);

        let cookie_secure = env::var("DIARY_COOKIE_SECURE")
            .map(|s| matches!(s.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            data_file,
            bind_addr,
            log_level,
            log_format,
            cookie_secure,
        })
    }
}
