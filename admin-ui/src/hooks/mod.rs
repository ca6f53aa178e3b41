pub mod favorites;

pub use favorites::{use_favorite_settings, FavoritesHandle};
