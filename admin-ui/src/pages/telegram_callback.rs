use dioxus::prelude::*;
use shared_types::parse_callback_query;

use crate::api;
use crate::auth::{use_auth, AuthState};
use crate::i18n::use_i18n;
use crate::Route;

fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Landing point of the widget's `data-auth-url` redirect.
#[component]
pub fn TelegramCallback() -> Element {
    let i18n = use_i18n();
    let mut auth = use_auth();
    let nav = navigator();
    let mut error = use_signal(|| None::<String>);
    let mut started = use_signal(|| false);

    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.replace(Route::Home {});
        }
    });

    let required = i18n.tr("auth.telegramRequired");
    let fallback = i18n.tr("common.error");
    use_effect(move || {
        if *started.peek() || auth.peek().is_authenticated() {
            return;
        }
        started.set(true);

        let payload = match parse_callback_query(&location_search()) {
            Ok(payload) => payload,
            Err(e) => {
                dioxus_logger::tracing::warn!("bad Telegram callback: {e}");
                error.set(Some(required.clone()));
                return;
            }
        };

        let fallback = fallback.clone();
        spawn(async move {
            match api::telegram_widget_login(&payload).await {
                Ok(response) => auth.set(AuthState::from(response)),
                Err(e) => {
                    dioxus_logger::tracing::warn!("Telegram login rejected: {e}");
                    error.set(Some(e.detail.unwrap_or(fallback)));
                }
            }
        });
    });

    rsx! {
        div { class: "page-center",
            div { class: "card",
                if let Some(message) = error() {
                    h1 { {i18n.tr("auth.loginFailed")} }
                    p { class: "error-text", "{message}" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            nav.push(Route::Login {});
                        },
                        {i18n.tr("auth.tryAgain")}
                    }
                } else {
                    div { class: "spinner" }
                    h1 { {i18n.tr("auth.authenticating")} }
                    p { {i18n.tr("common.loading")} }
                }
            }
        }
    }
}
