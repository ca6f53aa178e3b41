//! Shared types between the admin front-end and backend
//!
//! These types are used by both:
//! - the axum admin server (native Rust)
//! - the Dioxus settings panel (WASM)
//!
//! Besides the JSON wire types this crate holds the panel logic that does
//! not touch the DOM: the menu tree, global search, category grouping,
//! favorites, and Telegram callback parsing.

pub mod api;
pub mod favorites;
pub mod i18n;
pub mod menu;
pub mod search;
pub mod settings;
pub mod telegram;
pub mod theme;

pub use api::{ApiErrorBody, AuthConfigResponse, AuthResponse, AuthUser, MeResponse};
pub use favorites::FavoriteSettings;
pub use i18n::{Catalog, Translate};
pub use menu::{
    favorites_badge, find_menu_item, is_settings_section, resolve_content, ContentView, MenuIcon,
    MenuItem, MenuSection, DEFAULT_SECTION, FAVORITES_ID, MENU_SECTIONS,
};
pub use search::{filter_settings, SearchSummary};
pub use settings::{
    display_value, format_setting_key, group_by_category, CategoryGroup, SettingCategoryRef,
    SettingCategorySummary, SettingChoice, SettingDefinition, SettingHint, SettingKind,
    SettingValueError, UpdateSettingRequest,
};
pub use telegram::{parse_callback_query, TelegramCallbackError, TelegramWidgetAuth};
pub use theme::{is_hex_color, Branding, ThemeColors, ThemeColorsUpdate, ThemeError};

/// Local storage key for the favorites list.
pub const FAVORITES_STORAGE_KEY: &str = "admin_favorite_settings";
