use dioxus::prelude::*;

use crate::components::AdminGate;
use crate::i18n::use_i18n;
use crate::Route;

/// Landing page of the admin area.
#[component]
pub fn Admin() -> Element {
    let i18n = use_i18n();

    rsx! {
        AdminGate {
            div { class: "page-center",
                div { class: "card",
                    h1 { {i18n.tr("admin.title")} }
                    Link { class: "btn btn-primary", to: Route::AdminSettings {}, {i18n.tr("admin.openSettings")} }
                    p { {i18n.tr("admin.settingsHint")} }
                    Link { class: "btn", to: Route::Home {}, {i18n.tr("common.back")} }
                }
            }
        }
    }
}
