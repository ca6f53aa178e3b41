pub mod api;
pub mod auth;
pub mod components;
pub mod hooks;
pub mod i18n;
pub mod pages;
pub mod theme;

use dioxus::prelude::*;

use auth::{probe_session, AuthState};
use components::ADMIN_STYLES;
use pages::{Admin, AdminSettings, Home, Login, NotFound, TelegramCallback};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/admin")]
    Admin {},
    #[route("/admin/settings")]
    AdminSettings {},
    #[route("/auth/telegram/callback")]
    TelegramCallback {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    i18n::use_i18n_provider();
    let auth = use_context_provider(|| Signal::new(AuthState::Unknown));

    use_effect(move || {
        spawn(probe_session(auth));
    });

    // cached palette first, then whatever the server says
    use_effect(|| {
        if let Some(colors) = theme::get_cached_theme_colors() {
            theme::apply_theme_to_document(&colors);
        }
        spawn(async {
            match api::fetch_theme_colors().await {
                Ok(colors) => theme::remember_theme_colors(&colors),
                Err(e) => dioxus_logger::tracing::warn!("loading theme colors failed: {e}"),
            }
        });
    });

    rsx! {
        style { {ADMIN_STYLES} }
        Router::<Route> {}
    }
}
