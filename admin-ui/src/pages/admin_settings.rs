use dioxus::prelude::*;
use shared_types::{
    filter_settings, group_by_category, resolve_content, ContentView, ThemeColors, DEFAULT_SECTION,
};

use crate::api;
use crate::components::{
    AdminGate, BrandingTab, BurgerIcon, FavoritesTab, SearchBox, SearchSummaryLine, SettingsTab,
    Sidebar, ThemeTab,
};
use crate::hooks::use_favorite_settings;
use crate::i18n::use_i18n;

#[component]
pub fn AdminSettings() -> Element {
    rsx! {
        AdminGate { SettingsPanel {} }
    }
}

/// Sidebar, header with search, and whichever tab the menu or query selects.
#[component]
fn SettingsPanel() -> Element {
    let i18n = use_i18n();
    let mut active_section = use_signal(|| DEFAULT_SECTION.to_string());
    let search_query = use_signal(String::new);
    let mut mobile_menu_open = use_signal(|| false);
    let favorites = use_favorite_settings();

    let mut theme = use_resource(api::fetch_theme_colors);
    let mut settings = use_resource(api::fetch_settings);

    let theme_colors = match &*theme.read_unchecked() {
        Some(Ok(colors)) => colors.clone(),
        _ => ThemeColors::default(),
    };
    let (all, load_error) = match &*settings.read_unchecked() {
        Some(Ok(list)) => (list.clone(), None),
        Some(Err(e)) => (Vec::new(), Some(e.to_string())),
        None => (Vec::new(), None),
    };

    let query = search_query();
    let active = active_section();
    let view = resolve_content(&active, &query);
    let matches: Vec<_> = match view {
        ContentView::SearchResults => filter_settings(&all, &query, &i18n)
            .into_iter()
            .cloned()
            .collect(),
        _ => Vec::new(),
    };
    let title = i18n.tr(&format!("admin.settings.{active}"));
    let match_count = matches.len();
    let on_changed = move |_: ()| settings.restart();

    rsx! {
        div { class: "admin-settings",
            Sidebar {
                active: active.clone(),
                favorites_count: favorites.count(),
                open: mobile_menu_open(),
                on_select: move |id: String| {
                    active_section.set(id);
                    mobile_menu_open.set(false);
                },
                on_close: move |_| mobile_menu_open.set(false),
            }
            if mobile_menu_open() {
                div { class: "overlay", onclick: move |_| mobile_menu_open.set(false) }
            }
            main { class: "admin-main",
                header { class: "main-header",
                    button {
                        class: "icon-btn mobile-only",
                        title: i18n.tr("admin.settings.openMenu"),
                        onclick: move |_| mobile_menu_open.set(true),
                        BurgerIcon {}
                    }
                    h1 { "{title}" }
                    div { class: "search-desktop", SearchBox { query: search_query } }
                }
                div { class: "search-mobile", SearchBox { query: search_query } }
                if view == ContentView::SearchResults {
                    SearchSummaryLine { query: query.clone(), count: match_count }
                }
                div { class: "admin-content",
                    if let Some(message) = load_error {
                        p { class: "error-text", "{message}" }
                    }
                    {match view {
                        ContentView::SearchResults => rsx! {
                            SettingsTab { groups: None, settings: matches, favorites, on_changed }
                        },
                        ContentView::Branding => rsx! {
                            BrandingTab { accent: theme_colors.accent.clone() }
                        },
                        ContentView::Theme => rsx! {
                            ThemeTab {
                                colors: theme_colors.clone(),
                                on_saved: move |_| theme.restart(),
                            }
                        },
                        ContentView::Favorites => rsx! {
                            FavoritesTab { settings: all, favorites, on_changed }
                        },
                        ContentView::Settings(item) => rsx! {
                            SettingsTab {
                                groups: Some(group_by_category(&all, item.categories, &i18n)),
                                settings: Vec::new(),
                                favorites,
                                on_changed,
                            }
                        },
                        ContentView::Empty => rsx! {},
                    }}
                }
            }
        }
    }
}
