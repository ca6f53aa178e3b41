use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let i18n = use_i18n();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "page-center",
            div { class: "card",
                h1 { "404" }
                p { class: "muted", "{path}" }
                Link { class: "btn", to: Route::Home {}, {i18n.tr("common.back")} }
            }
        }
    }
}
