//! Admin settings backend: settings registry, theme and branding documents,
//! Telegram widget login and the static Dioxus frontend.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod session_store;
pub mod settings;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tower_sessions::{Expiry, SessionManagerLayer};

pub use state::AppState;

use auth::TelegramVerifier;
use config::Config;
use session_store::SqliteSessionStore;
use settings::SettingsRegistry;

pub fn build_state(config: &Config, db: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState {
        db,
        settings: SettingsRegistry::builtin(),
        telegram: TelegramVerifier::new(
            config.telegram_bot_token.as_deref(),
            config.telegram_auth_max_age,
        ),
        bot_username: config.telegram_bot_username.clone(),
        admin_ids: config.admin_telegram_ids.clone(),
    })
}

pub fn session_layer(
    store: SqliteSessionStore,
    config: &Config,
) -> SessionManagerLayer<SqliteSessionStore> {
    let ttl = time::Duration::seconds(config.session_ttl.as_secs() as i64);
    SessionManagerLayer::new(store)
        .with_secure(config.session_secure)
        .with_expiry(Expiry::OnInactivity(ttl))
}

/// Full application router. Unknown non-API paths serve `index.html` from
/// `frontend_dist` so the client-side router can take over.
pub fn build_router(
    state: Arc<AppState>,
    sessions: SessionManagerLayer<SqliteSessionStore>,
    frontend_dist: &str,
) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .nest("/api", api::router(Arc::clone(&state)))
        // /wasm/*: WASM binary and generated JS bindings
        // /assets/*: hashed CSS and font assets
        .nest_service("/wasm", ServeDir::new(format!("{frontend_dist}/wasm")))
        .nest_service("/assets", ServeDir::new(format!("{frontend_dist}/assets")))
        .fallback_service(ServeFile::new(format!("{frontend_dist}/index.html")))
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
