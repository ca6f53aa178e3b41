use dioxus::prelude::*;
use shared_types::{favorites_badge, MenuIcon as ItemIcon, MENU_SECTIONS};

use super::icons::{BackIcon, CloseIcon, StarIcon};
use crate::i18n::use_i18n;
use crate::Route;

#[component]
pub fn Sidebar(
    active: String,
    favorites_count: usize,
    open: bool,
    on_select: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let i18n = use_i18n();
    let title = i18n.tr("admin.settings.title");
    let close_label = i18n.tr("admin.settings.closeMenu");

    rsx! {
        aside { class: if open { "admin-sidebar open" } else { "admin-sidebar" },
            div { class: "sidebar-header",
                Link { class: "icon-btn", to: Route::Admin {}, BackIcon {} }
                h2 { "{title}" }
                button {
                    class: "icon-btn mobile-only",
                    title: "{close_label}",
                    onclick: move |_| on_close.call(()),
                    CloseIcon {}
                }
            }
            nav { class: "sidebar-nav",
                for section in MENU_SECTIONS.iter() {
                    div { class: "sidebar-section", key: "{section.id}",
                        for item in section.items.iter() {
                            button {
                                key: "{item.id}",
                                class: if active == item.id { "sidebar-item active" } else { "sidebar-item" },
                                onclick: move |_| on_select.call(item.id.to_string()),
                                if item.icon == ItemIcon::Star {
                                    StarIcon { filled: active == item.id }
                                }
                                span { class: "label", {i18n.tr(&format!("admin.settings.{}", item.id))} }
                                if let Some(count) = favorites_badge(item.id, favorites_count) {
                                    span { class: "badge", "{count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
