use dioxus::prelude::*;

use crate::api;
use crate::auth::use_auth;
use crate::i18n::use_i18n;
use crate::Route;

const WIDGET_SCRIPT: &str = "https://telegram.org/js/telegram-widget.js?22";
const WIDGET_CONTAINER_ID: &str = "telegram-login";

/// Insert the widget `<script>`; Telegram replaces it with the login button.
fn mount_login_widget(bot_username: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let container = document
        .get_element_by_id(WIDGET_CONTAINER_ID)
        .ok_or("widget container is not mounted")?;
    let origin = window.location().origin().map_err(|e| format!("{e:?}"))?;

    let script = document
        .create_element("script")
        .map_err(|e| format!("{e:?}"))?;
    for (name, value) in [
        ("src", WIDGET_SCRIPT),
        ("async", "true"),
        ("data-telegram-login", bot_username),
        ("data-size", "large"),
        ("data-request-access", "write"),
    ] {
        script
            .set_attribute(name, value)
            .map_err(|e| format!("{e:?}"))?;
    }
    script
        .set_attribute("data-auth-url", &format!("{origin}/auth/telegram/callback"))
        .map_err(|e| format!("{e:?}"))?;

    container.set_inner_html("");
    container
        .append_child(&script)
        .map_err(|e| format!("{e:?}"))?;
    Ok(())
}

#[component]
pub fn Login() -> Element {
    let i18n = use_i18n();
    let auth = use_auth();
    let config = use_resource(api::fetch_auth_config);
    let nav = navigator();

    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.replace(Route::Home {});
        }
    });

    let bot_username = match &*config.read_unchecked() {
        Some(Ok(config)) => Ok(config.bot_username.clone()),
        Some(Err(e)) => Err(e.to_string()),
        None => Ok(None),
    };
    let loaded = config.read_unchecked().is_some();

    use_effect(move || {
        if let Some(Ok(config)) = &*config.read() {
            if let Some(bot) = config.bot_username.as_deref() {
                if let Err(e) = mount_login_widget(bot) {
                    dioxus_logger::tracing::error!("failed to mount Telegram widget: {e}");
                }
            }
        }
    });

    rsx! {
        div { class: "page-center",
            div { class: "card",
                h1 { {i18n.tr("auth.loginTitle")} }
                p { {i18n.tr("auth.loginHint")} }
                {match bot_username {
                    Err(message) => rsx! { span { class: "error-text", "{message}" } },
                    Ok(Some(_)) => rsx! { div { id: WIDGET_CONTAINER_ID } },
                    Ok(None) if loaded => rsx! { span { class: "error-text", {i18n.tr("auth.notConfigured")} } },
                    Ok(None) => rsx! { div { class: "spinner" } },
                }}
                Link { class: "btn", to: Route::Home {}, {i18n.tr("common.back")} }
            }
        }
    }
}
