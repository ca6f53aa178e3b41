use serde::{Deserialize, Serialize};

use crate::settings::SettingDefinition;

/// Setting keys the administrator starred, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSettings {
    keys: Vec<String>,
}

impl FavoriteSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the persisted JSON array. Anything unreadable starts empty.
    pub fn from_storage(raw: &str) -> Self {
        let keys: Vec<String> = serde_json::from_str(raw).unwrap_or_default();
        let mut favorites = Self::new();
        for key in keys {
            if !favorites.is_favorite(&key) {
                favorites.keys.push(key);
            }
        }
        favorites
    }

    pub fn to_storage(&self) -> String {
        serde_json::to_string(&self.keys).unwrap_or_else(|_| "[]".to_string())
    }

    /// Add or remove `key`; returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        if let Some(pos) = self.keys.iter().position(|k| k == key) {
            self.keys.remove(pos);
            false
        } else {
            self.keys.push(key.to_string());
            true
        }
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Favorite settings in the order of `all`, not the order they were starred.
    pub fn select<'a>(&self, all: &'a [SettingDefinition]) -> Vec<&'a SettingDefinition> {
        all.iter().filter(|s| self.is_favorite(&s.key)).collect()
    }
}
