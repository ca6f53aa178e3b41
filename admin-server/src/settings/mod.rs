//! Settings registry: catalog defaults merged with stored overrides.

pub mod catalog;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use shared_types::{SettingCategoryRef, SettingCategorySummary, SettingDefinition};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use catalog::{category_label, SettingSpec, CATEGORIES};

struct StoredOverride {
    value: Value,
    updated_at: i64,
}

pub struct SettingsRegistry {
    specs: Vec<SettingSpec>,
}

impl SettingsRegistry {
    pub fn new(specs: Vec<SettingSpec>) -> Self {
        Self { specs }
    }

    pub fn builtin() -> Self {
        Self::new(catalog::builtin_specs())
    }

    pub fn spec(&self, key: &str) -> Option<&SettingSpec> {
        self.specs.iter().find(|s| s.key == key)
    }

    /// All definitions in catalog order, optionally limited to one category.
    pub async fn list(
        &self,
        db: &SqlitePool,
        category: Option<&str>,
    ) -> Result<Vec<SettingDefinition>, sqlx::Error> {
        let mut overrides = load_overrides(db).await?;
        Ok(self
            .specs
            .iter()
            .filter(|spec| category.map_or(true, |c| spec.category == c))
            .map(|spec| definition(spec, overrides.remove(spec.key)))
            .collect())
    }

    /// Categories that have at least one setting, in catalog order.
    pub fn categories(&self) -> Vec<SettingCategorySummary> {
        CATEGORIES
            .iter()
            .filter_map(|(key, label)| {
                let items = self.specs.iter().filter(|s| s.category == *key).count();
                (items > 0).then(|| SettingCategorySummary {
                    key: (*key).to_string(),
                    label: (*label).to_string(),
                    items,
                })
            })
            .collect()
    }

    pub async fn get(&self, db: &SqlitePool, key: &str) -> ApiResult<SettingDefinition> {
        let spec = self
            .spec(key)
            .ok_or_else(|| ApiError::SettingNotFound(key.to_string()))?;
        let stored = load_override(db, key).await?;
        Ok(definition(spec, stored))
    }

    /// Validate and store an override, recording the change in the audit log.
    pub async fn update(
        &self,
        db: &SqlitePool,
        key: &str,
        value: &Value,
        actor_id: i64,
    ) -> ApiResult<SettingDefinition> {
        let spec = self
            .spec(key)
            .ok_or_else(|| ApiError::SettingNotFound(key.to_string()))?;
        if spec.read_only {
            return Err(ApiError::ReadOnly(key.to_string()));
        }
        let normalized = spec
            .kind
            .validate(value, spec.is_optional, &spec.choices)
            .map_err(|source| ApiError::InvalidValue {
                key: key.to_string(),
                source,
            })?;

        let previous = load_override(db, key).await?;
        let old_value = previous
            .as_ref()
            .map(|o| o.value.clone())
            .unwrap_or_else(|| spec.default.clone());
        let now = Utc::now().timestamp();
        let encoded = normalized.to_string();

        let mut tx = db.begin().await?;
        sqlx::query(
            "INSERT INTO setting_overrides (key, value, updated_at, updated_by) VALUES (?, ?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                 updated_at = excluded.updated_at, updated_by = excluded.updated_by",
        )
        .bind(key)
        .bind(&encoded)
        .bind(now)
        .bind(actor_id)
        .execute(&mut *tx)
        .await?;
        record_audit(&mut tx, key, Some(&old_value), Some(&normalized), actor_id, now).await?;
        tx.commit().await?;

        info!(key, actor_id, "setting override stored");
        Ok(definition(
            spec,
            Some(StoredOverride {
                value: normalized,
                updated_at: now,
            }),
        ))
    }

    /// Drop the override so the catalog default applies again.
    pub async fn reset(
        &self,
        db: &SqlitePool,
        key: &str,
        actor_id: i64,
    ) -> ApiResult<SettingDefinition> {
        let spec = self
            .spec(key)
            .ok_or_else(|| ApiError::SettingNotFound(key.to_string()))?;
        if spec.read_only {
            return Err(ApiError::ReadOnly(key.to_string()));
        }

        if let Some(previous) = load_override(db, key).await? {
            let now = Utc::now().timestamp();
            let mut tx = db.begin().await?;
            sqlx::query("DELETE FROM setting_overrides WHERE key = ?")
                .bind(key)
                .execute(&mut *tx)
                .await?;
            record_audit(
                &mut tx,
                key,
                Some(&previous.value),
                Some(&spec.default),
                actor_id,
                now,
            )
            .await?;
            tx.commit().await?;
            info!(key, actor_id, "setting override removed");
        }

        Ok(definition(spec, None))
    }
}

fn definition(spec: &SettingSpec, stored: Option<StoredOverride>) -> SettingDefinition {
    let has_override = stored.is_some();
    let (current, updated_at) = match stored {
        Some(o) => (o.value, DateTime::<Utc>::from_timestamp(o.updated_at, 0)),
        None => (spec.default.clone(), None),
    };

    SettingDefinition {
        key: spec.key.to_string(),
        name: Some(spec.name.to_string()),
        category: SettingCategoryRef {
            key: spec.category.to_string(),
            label: category_label(spec.category).to_string(),
        },
        kind: spec.kind,
        is_optional: spec.is_optional,
        current,
        original: spec.default.clone(),
        has_override,
        read_only: spec.read_only,
        hint: spec.hint.clone(),
        choices: spec.choices.clone(),
        updated_at,
    }
}

fn decode_override(key: &str, raw: &str, updated_at: i64) -> Option<StoredOverride> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(StoredOverride { value, updated_at }),
        Err(e) => {
            warn!(key, "ignoring unreadable setting override: {e}");
            None
        }
    }
}

async fn load_overrides(db: &SqlitePool) -> Result<HashMap<String, StoredOverride>, sqlx::Error> {
    let rows: Vec<(String, String, i64)> =
        sqlx::query_as("SELECT key, value, updated_at FROM setting_overrides")
            .fetch_all(db)
            .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(key, raw, updated_at)| {
            decode_override(&key, &raw, updated_at).map(|o| (key, o))
        })
        .collect())
}

async fn load_override(db: &SqlitePool, key: &str) -> Result<Option<StoredOverride>, sqlx::Error> {
    let row: Option<(String, i64)> =
        sqlx::query_as("SELECT value, updated_at FROM setting_overrides WHERE key = ?")
            .bind(key)
            .fetch_optional(db)
            .await?;

    Ok(row.and_then(|(raw, updated_at)| decode_override(key, &raw, updated_at)))
}

async fn record_audit(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    key: &str,
    old_value: Option<&Value>,
    new_value: Option<&Value>,
    actor_id: i64,
    at: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO settings_audit (id, setting_key, old_value, new_value, actor_id, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(ulid::Ulid::new().to_string())
    .bind(key)
    .bind(old_value.map(Value::to_string))
    .bind(new_value.map(Value::to_string))
    .bind(actor_id)
    .bind(at)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
