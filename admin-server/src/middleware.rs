use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::warn;

use crate::{auth::session as sess, error::ApiError, AppState};

/// Telegram id of the admin making the request, inserted by [`require_admin`].
#[derive(Debug, Clone, Copy)]
pub struct AdminId(pub i64);

/// Middleware for `/api/admin/*`: a session is required and its Telegram id
/// must be on the admin allowlist.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    session: Session,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(telegram_id) = sess::get_telegram_id(&session).await else {
        return ApiError::Unauthenticated.into_response();
    };

    if !state.is_admin(telegram_id) {
        warn!(telegram_id, path = %req.uri().path(), "admin access denied");
        return ApiError::Forbidden.into_response();
    }

    req.extensions_mut().insert(AdminId(telegram_id));
    next.run(req).await
}
