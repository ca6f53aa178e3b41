use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use shared_types::{SettingCategorySummary, SettingDefinition, UpdateSettingRequest};

use crate::{error::ApiResult, middleware::AdminId, AppState};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// GET /api/admin/settings[?category=KEY]
pub async fn list_settings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<SettingDefinition>>> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let settings = state.settings.list(&state.db, category).await?;
    Ok(Json(settings))
}

/// GET /api/admin/settings/categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<SettingCategorySummary>> {
    Json(state.settings.categories())
}

/// GET /api/admin/settings/{key}
pub async fn get_setting(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<SettingDefinition>> {
    Ok(Json(state.settings.get(&state.db, &key).await?))
}

/// PUT /api/admin/settings/{key}
pub async fn update_setting(
    State(state): State<Arc<AppState>>,
    Extension(AdminId(actor_id)): Extension<AdminId>,
    Path(key): Path<String>,
    Json(body): Json<UpdateSettingRequest>,
) -> ApiResult<Json<SettingDefinition>> {
    let updated = state
        .settings
        .update(&state.db, &key, &body.value, actor_id)
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/admin/settings/{key}
pub async fn reset_setting(
    State(state): State<Arc<AppState>>,
    Extension(AdminId(actor_id)): Extension<AdminId>,
    Path(key): Path<String>,
) -> ApiResult<Json<SettingDefinition>> {
    Ok(Json(state.settings.reset(&state.db, &key, actor_id).await?))
}
