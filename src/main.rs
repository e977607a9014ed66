//! Personal Diary Backend
//!
//! A small REST backend for a personal diary, persisted to a single JSON file.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionStore;
use config::{Config, LogFormat};
use db::UserManager;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<UserManager>>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: UserManager, config: Config) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            sessions: Arc::new(SessionStore::new()),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Personal Diary Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // A malformed storage file aborts startup
    let store = UserManager::open(&config.data_file)?;
    tracing::info!("Data file: {:?}", store.data_file());
    if store.document().users.is_empty() {
        tracing::warn!("No users registered yet. POST /api/register to create one.");
    }

    let bind_addr = config.bind_addr;
    let state = AppState::new(store, config);

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let sessions = state.sessions.clone();

    // Routes that need a logged-in session
    let protected_routes = Router::new()
        .route("/session", get(api::current_session))
        .route(
            "/entries",
            get(api::list_entries).post(api::create_entry),
        )
        .route(
            "/entries/{id}",
            get(api::get_entry)
                .put(api::update_entry)
                .delete(api::delete_entry),
        )
        .route("/search", get(api::search_entries))
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(sessions.clone(), req, next)
        }));

    // Account routes
    let account_routes = Router::new()
        .route("/register", post(api::register))
        .route("/login", post(api::login))
        .route("/logout", post(api::logout));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", protected_routes.merge(account_routes))
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
