use dioxus::prelude::*;
use shared_types::Translate;

use crate::api;
use crate::auth::{use_auth, AuthState};
use crate::i18n::use_i18n;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let i18n = use_i18n();
    let mut auth = use_auth();
    let branding = use_resource(api::fetch_branding);
    let state = auth.read().clone();

    let title = match &*branding.read_unchecked() {
        Some(Ok(branding)) => branding.name.clone(),
        _ => i18n.tr("home.title"),
    };

    let logout = move |_: MouseEvent| {
        spawn(async move {
            if let Err(e) = api::logout().await {
                dioxus_logger::tracing::warn!("logout failed: {e}");
            }
            auth.set(AuthState::Unauthenticated);
        });
    };

    rsx! {
        div { class: "page-center",
            div { class: "card",
                h1 { "{title}" }
                p { {i18n.tr("home.subtitle")} }
                {match state {
                    AuthState::Unknown => rsx! { div { class: "spinner" } },
                    AuthState::Unauthenticated => rsx! {
                        Link { class: "btn btn-primary", to: Route::Login {}, {i18n.tr("home.login")} }
                    },
                    AuthState::Authenticated { user, is_admin } => rsx! {
                        span { class: "muted",
                            {i18n.t_with("home.loggedInAs", "Logged in as {{name}}", &[("name", &user.display_name)])}
                        }
                        if is_admin {
                            Link { class: "btn btn-primary", to: Route::Admin {}, {i18n.tr("home.openAdmin")} }
                        }
                        button { class: "btn", onclick: logout, {i18n.tr("home.logout")} }
                    },
                }}
            }
        }
    }
}
