//! HTTP surface: public endpoints, auth and the admin-only settings API.

pub mod settings;
pub mod theme;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, patch, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use shared_types::ApiErrorBody;

use crate::{auth::handlers as auth, middleware::require_admin, AppState};

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "admin-server" }))
}

async fn not_found() -> (StatusCode, Json<ApiErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorBody {
            detail: "Not found".to_string(),
        }),
    )
}

/// Routes under `/api`. Everything below `/api/admin` passes the admin guard.
pub fn router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let admin = Router::new()
        .route("/settings", get(settings::list_settings))
        .route("/settings/categories", get(settings::list_categories))
        .route(
            "/settings/{key}",
            get(settings::get_setting)
                .put(settings::update_setting)
                .delete(settings::reset_setting),
        )
        .route("/theme/colors", patch(theme::update_theme_colors))
        .route("/theme/colors/reset", post(theme::reset_theme_colors))
        .route("/branding", put(theme::update_branding))
        .layer(axum_middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/theme/colors", get(theme::get_theme_colors))
        .route("/branding", get(theme::get_branding))
        .route("/auth/config", get(auth::auth_config))
        .route("/auth/telegram/widget", post(auth::telegram_widget_login))
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
        .nest("/admin", admin)
        // keeps unknown /api paths out of the SPA fallback
        .fallback(not_found)
}
