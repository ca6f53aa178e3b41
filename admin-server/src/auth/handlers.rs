use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use shared_types::{AuthConfigResponse, AuthResponse, AuthUser, MeResponse, TelegramWidgetAuth};
use sqlx::SqlitePool;
use tower_sessions::Session;
use tracing::{info, warn};

use crate::auth::session as sess;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

// ── Widget login ──────────────────────────────────────────────────────────────

/// POST /api/auth/telegram/widget
pub async fn telegram_widget_login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(payload): Json<TelegramWidgetAuth>,
) -> ApiResult<Json<AuthResponse>> {
    if let Err(e) = state.telegram.verify(&payload, Utc::now().timestamp()) {
        warn!(telegram_id = payload.id, "telegram login rejected: {e}");
        return Err(e.into());
    }

    upsert_user(&state.db, &payload).await?;

    let display_name = payload.display_name();
    sess::set_user(&session, payload.id, &display_name)
        .await
        .map_err(|e| ApiError::Session(e.to_string()))?;

    let is_admin = state.is_admin(payload.id);
    info!(telegram_id = payload.id, is_admin, "telegram login successful");

    Ok(Json(AuthResponse {
        user: AuthUser {
            telegram_id: payload.id,
            display_name,
            username: payload.username,
            photo_url: payload.photo_url,
        },
        is_admin,
    }))
}

/// POST /api/auth/logout
pub async fn logout(session: Session) -> ApiResult<StatusCode> {
    sess::clear(&session)
        .await
        .map_err(|e| ApiError::Session(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Session check ─────────────────────────────────────────────────────────────

/// GET /api/auth/me
///
/// Always 200; the UI checks `authenticated` to decide whether to show the
/// login page.
pub async fn me(State(state): State<Arc<AppState>>, session: Session) -> ApiResult<Json<MeResponse>> {
    let Some(telegram_id) = sess::get_telegram_id(&session).await else {
        return Ok(Json(MeResponse::default()));
    };

    let user = match fetch_user(&state.db, telegram_id).await? {
        Some(user) => user,
        None => AuthUser {
            telegram_id,
            display_name: sess::get_display_name(&session)
                .await
                .unwrap_or_else(|| telegram_id.to_string()),
            username: None,
            photo_url: None,
        },
    };

    Ok(Json(MeResponse {
        authenticated: true,
        user: Some(user),
        is_admin: state.is_admin(telegram_id),
    }))
}

/// GET /api/auth/config
pub async fn auth_config(State(state): State<Arc<AppState>>) -> Json<AuthConfigResponse> {
    Json(AuthConfigResponse {
        bot_username: state.bot_username.clone(),
    })
}

// ── DB helpers ────────────────────────────────────────────────────────────────

async fn upsert_user(db: &SqlitePool, auth: &TelegramWidgetAuth) -> Result<(), sqlx::Error> {
    let now = Utc::now().timestamp();
    sqlx::query(
        "INSERT INTO users (telegram_id, first_name, last_name, username, photo_url, created_at, last_login_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(telegram_id) DO UPDATE SET
             first_name = excluded.first_name,
             last_name = excluded.last_name,
             username = excluded.username,
             photo_url = excluded.photo_url,
             last_login_at = excluded.last_login_at",
    )
    .bind(auth.id)
    .bind(&auth.first_name)
    .bind(&auth.last_name)
    .bind(&auth.username)
    .bind(&auth.photo_url)
    .bind(now)
    .bind(now)
    .execute(db)
    .await?;
    Ok(())
}

async fn fetch_user(db: &SqlitePool, telegram_id: i64) -> Result<Option<AuthUser>, sqlx::Error> {
    let row: Option<(String, Option<String>, Option<String>, Option<String>)> = sqlx::query_as(
        "SELECT first_name, last_name, username, photo_url FROM users WHERE telegram_id = ?",
    )
    .bind(telegram_id)
    .fetch_optional(db)
    .await?;

    Ok(row.map(|(first_name, last_name, username, photo_url)| AuthUser {
        telegram_id,
        display_name: match last_name {
            Some(last) => format!("{first_name} {last}"),
            None => first_name,
        },
        username,
        photo_url,
    }))
}
