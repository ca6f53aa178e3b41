use dioxus::prelude::*;
use shared_types::{display_value, CategoryGroup, SettingDefinition};

use super::setting_row::SettingRow;
use crate::hooks::FavoritesHandle;
use crate::i18n::use_i18n;

/// Settings of one menu item, grouped under category headings.
///
/// `groups: None` renders `settings` as a flat list, which is how search
/// results are shown.
#[component]
pub fn SettingsTab(
    #[props(!optional)]
    groups: Option<Vec<CategoryGroup>>,
    settings: Vec<SettingDefinition>,
    favorites: FavoritesHandle,
    on_changed: EventHandler<()>,
) -> Element {
    let i18n = use_i18n();

    match groups {
        Some(groups) if groups.is_empty() => rsx! {
            div { class: "empty-state", {i18n.tr("admin.settings.noSettings")} }
        },
        Some(groups) => rsx! {
            for group in groups {
                section { class: "category-group", key: "{group.key}",
                    h3 { "{group.label}" }
                    for setting in group.settings {
                        SettingRow {
                            key: "{setting.key}:{display_value(&setting.current)}",
                            setting: setting.clone(),
                            favorites,
                            on_changed,
                        }
                    }
                }
            }
        },
        None => rsx! {
            for setting in settings {
                SettingRow {
                    key: "{setting.key}:{display_value(&setting.current)}",
                    setting: setting.clone(),
                    favorites,
                    on_changed,
                }
            }
        },
    }
}

/// Favorited settings, in catalog order.
#[component]
pub fn FavoritesTab(
    settings: Vec<SettingDefinition>,
    favorites: FavoritesHandle,
    on_changed: EventHandler<()>,
) -> Element {
    let i18n = use_i18n();
    let starred: Vec<SettingDefinition> = favorites
        .snapshot()
        .select(&settings)
        .into_iter()
        .cloned()
        .collect();

    if starred.is_empty() {
        return rsx! {
            div { class: "empty-state", {i18n.tr("admin.settings.favoritesEmpty")} }
        };
    }

    rsx! {
        SettingsTab {
            groups: None,
            settings: starred,
            favorites,
            on_changed,
        }
    }
}
