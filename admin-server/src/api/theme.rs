use std::sync::Arc;

use axum::{extract::State, Json};
use shared_types::{Branding, ThemeColors, ThemeColorsUpdate};
use tracing::info;

use crate::{db, error::ApiResult, AppState};

const THEME_COLORS_DOC: &str = "theme_colors";
const BRANDING_DOC: &str = "branding";

async fn current_colors(state: &AppState) -> Result<ThemeColors, sqlx::Error> {
    Ok(db::load_document(&state.db, THEME_COLORS_DOC)
        .await?
        .unwrap_or_default())
}

/// GET /api/theme/colors
pub async fn get_theme_colors(State(state): State<Arc<AppState>>) -> ApiResult<Json<ThemeColors>> {
    Ok(Json(current_colors(&state).await?))
}

/// PATCH /api/admin/theme/colors
pub async fn update_theme_colors(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ThemeColorsUpdate>,
) -> ApiResult<Json<ThemeColors>> {
    let mut colors = current_colors(&state).await?;
    colors.apply(&update)?;
    db::save_document(&state.db, THEME_COLORS_DOC, &colors).await?;
    info!("theme colors updated");
    Ok(Json(colors))
}

/// POST /api/admin/theme/colors/reset
pub async fn reset_theme_colors(State(state): State<Arc<AppState>>) -> ApiResult<Json<ThemeColors>> {
    db::delete_document(&state.db, THEME_COLORS_DOC).await?;
    info!("theme colors reset to defaults");
    Ok(Json(ThemeColors::default()))
}

/// GET /api/branding
pub async fn get_branding(State(state): State<Arc<AppState>>) -> ApiResult<Json<Branding>> {
    let branding = db::load_document(&state.db, BRANDING_DOC)
        .await?
        .unwrap_or_default();
    Ok(Json(branding))
}

/// PUT /api/admin/branding
pub async fn update_branding(
    State(state): State<Arc<AppState>>,
    Json(mut branding): Json<Branding>,
) -> ApiResult<Json<Branding>> {
    branding.validate()?;
    branding.name = branding.name.trim().to_string();
    branding.logo_letter = branding.logo_letter.trim().to_string();
    branding.logo_url = branding
        .logo_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());
    db::save_document(&state.db, BRANDING_DOC, &branding).await?;
    info!(name = %branding.name, "branding updated");
    Ok(Json(branding))
}
