use dioxus::prelude::*;
use shared_types::{is_hex_color, ThemeColors, ThemeColorsUpdate};

use crate::api;
use crate::i18n::use_i18n;
use crate::theme::remember_theme_colors;

/// Palette editor. Every color is saved on its own as soon as it is valid.
#[component]
pub fn ThemeTab(colors: ThemeColors, on_saved: EventHandler<ThemeColors>) -> Element {
    let i18n = use_i18n();
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let invalid = i18n.tr("admin.theme.invalid");

    let save_color = use_callback(move |(field, value): (String, String)| {
        spawn(async move {
            busy.set(true);
            match api::update_theme_colors(&ThemeColorsUpdate::single(&field, &value)).await {
                Ok(saved) => {
                    error.set(None);
                    remember_theme_colors(&saved);
                    on_saved.call(saved);
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("saving theme color {field} failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    });

    let reset_all = move |_: MouseEvent| {
        spawn(async move {
            busy.set(true);
            match api::reset_theme_colors().await {
                Ok(saved) => {
                    error.set(None);
                    remember_theme_colors(&saved);
                    on_saved.call(saved);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "card",
            h2 { {i18n.tr("admin.theme.title")} }
            for (field, _, value) in colors.entries() {
                ColorRow {
                    key: "{field}:{value}",
                    field,
                    label: i18n.tr(&format!("admin.theme.colors.{field}")),
                    value: value.to_string(),
                    disabled: busy(),
                    invalid: invalid.clone(),
                    on_commit: move |value: String| save_color.call((field.to_string(), value)),
                }
            }
            if let Some(message) = error() {
                span { class: "error-text", "{message}" }
            }
            button {
                class: "btn",
                disabled: busy(),
                onclick: reset_all,
                {i18n.tr("admin.theme.resetAll")}
            }
        }
    }
}

#[component]
fn ColorRow(
    field: &'static str,
    label: String,
    value: String,
    disabled: bool,
    invalid: String,
    on_commit: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(|| value.clone());
    let valid = is_hex_color(&draft.read());

    let commit = use_callback(move |next: String| {
        draft.set(next.clone());
        if is_hex_color(&next) && !next.eq_ignore_ascii_case(&value) {
            on_commit.call(next);
        }
    });

    rsx! {
        div { class: "color-row",
            label { r#for: "color-{field}", "{label}" }
            input {
                r#type: "color",
                id: "color-{field}",
                disabled,
                value: if valid { draft() } else { "#000000".to_string() },
                onchange: move |evt| commit.call(evt.value()),
            }
            input {
                r#type: "text",
                disabled,
                value: "{draft}",
                oninput: move |evt| draft.set(evt.value()),
                onchange: move |evt| commit.call(evt.value()),
            }
            if !valid {
                span { class: "error-text", "{invalid}" }
            }
        }
    }
}
