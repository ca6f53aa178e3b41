use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::i18n::use_i18n;
use crate::Route;

/// Renders `children` only for a logged-in admin.
#[component]
pub fn AdminGate(children: Element) -> Element {
    let i18n = use_i18n();
    let auth = use_auth();
    let state = auth.read().clone();

    match state {
        AuthState::Unknown => rsx! {
            div { class: "page-center",
                div { class: "spinner" }
            }
        },
        AuthState::Unauthenticated => rsx! {
            div { class: "page-center",
                div { class: "card",
                    p { {i18n.tr("admin.loginRequired")} }
                    Link { class: "btn btn-primary", to: Route::Login {}, {i18n.tr("home.login")} }
                }
            }
        },
        AuthState::Authenticated { is_admin: false, .. } => rsx! {
            div { class: "page-center",
                div { class: "card",
                    p { class: "error-text", {i18n.tr("admin.forbidden")} }
                    Link { class: "btn", to: Route::Home {}, {i18n.tr("common.back")} }
                }
            }
        },
        AuthState::Authenticated { .. } => children,
    }
}
