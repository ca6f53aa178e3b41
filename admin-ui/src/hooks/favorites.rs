use dioxus::prelude::*;
use shared_types::{FavoriteSettings, FAVORITES_STORAGE_KEY};

fn load_favorites() -> FavoriteSettings {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return FavoriteSettings::new();
    };
    let Ok(Some(raw)) = storage.get_item(FAVORITES_STORAGE_KEY) else {
        return FavoriteSettings::new();
    };
    FavoriteSettings::from_storage(&raw)
}

fn persist_favorites(favorites: &FavoriteSettings) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        dioxus_logger::tracing::warn!("localStorage unavailable; favorite settings not saved");
        return;
    };
    if let Err(e) = storage.set_item(FAVORITES_STORAGE_KEY, &favorites.to_storage()) {
        dioxus_logger::tracing::warn!("Failed to persist favorite settings: {e:?}");
    }
}

/// Favorites backed by local storage; `Copy` so event handlers can capture it.
#[derive(Clone, Copy, PartialEq)]
pub struct FavoritesHandle {
    favorites: Signal<FavoriteSettings>,
}

impl FavoritesHandle {
    pub fn is_favorite(&self, key: &str) -> bool {
        self.favorites.read().is_favorite(key)
    }

    pub fn count(&self) -> usize {
        self.favorites.read().len()
    }

    pub fn snapshot(&self) -> FavoriteSettings {
        self.favorites.read().clone()
    }

    /// Flip membership and write the list back to storage.
    pub fn toggle(&mut self, key: &str) -> bool {
        let now_favorite = self.favorites.write().toggle(key);
        persist_favorites(&self.favorites.read());
        now_favorite
    }
}

pub fn use_favorite_settings() -> FavoritesHandle {
    let favorites = use_signal(load_favorites);
    FavoritesHandle { favorites }
}
