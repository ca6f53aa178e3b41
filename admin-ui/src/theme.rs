use shared_types::ThemeColors;

const THEME_CACHE_KEY: &str = "admin_theme_colors";

/// Inline style declaring every palette color as a CSS variable on `:root`.
pub fn css_variables(colors: &ThemeColors) -> String {
    colors
        .entries()
        .iter()
        .map(|(_, var, value)| format!("{var}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn apply_theme_to_document(colors: &ThemeColors) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("style", &css_variables(colors));
        }
    }
}

/// Last palette seen, so the first paint does not flash the defaults.
pub fn get_cached_theme_colors() -> Option<ThemeColors> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_CACHE_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

pub fn set_cached_theme_colors(colors: &ThemeColors) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    if let Ok(payload) = serde_json::to_string(colors) {
        let _ = storage.set_item(THEME_CACHE_KEY, &payload);
    }
}

/// Apply and remember a palette from the server.
pub fn remember_theme_colors(colors: &ThemeColors) {
    apply_theme_to_document(colors);
    set_cached_theme_colors(colors);
}
