use dioxus::prelude::*;
use serde_json::Value;
use shared_types::{display_value, SettingDefinition, SettingKind, Translate};

use super::icons::StarIcon;
use crate::api;
use crate::hooks::FavoritesHandle;
use crate::i18n::use_i18n;

/// One setting: name, hints, value editor, save/reset and the favorite star.
///
/// Callers key rows by key and current value, so the draft resets whenever
/// the stored value changes.
#[component]
pub fn SettingRow(
    setting: SettingDefinition,
    favorites: FavoritesHandle,
    on_changed: EventHandler<()>,
) -> Element {
    let i18n = use_i18n();
    let mut favorites = favorites;
    let mut draft = use_signal(|| display_value(&setting.current));
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let key = setting.key.clone();
    let save = use_callback(move |value: Value| {
        let key = key.clone();
        spawn(async move {
            busy.set(true);
            match api::update_setting(&key, value).await {
                Ok(_) => {
                    error.set(None);
                    on_changed.call(());
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("saving {key} failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    });

    let key = setting.key.clone();
    let reset = use_callback(move |_: ()| {
        let key = key.clone();
        spawn(async move {
            busy.set(true);
            match api::reset_setting(&key).await {
                Ok(_) => {
                    error.set(None);
                    on_changed.call(());
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("resetting {key} failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    });

    let name = setting.translated_name(&i18n);
    let is_favorite = favorites.is_favorite(&setting.key);
    let star_title = if is_favorite {
        i18n.tr("admin.settings.removeFavorite")
    } else {
        i18n.tr("admin.settings.addFavorite")
    };
    let default_line = i18n.t_with(
        "admin.settings.default",
        "Default: {{value}}",
        &[("value", &default_text(&setting.original, &i18n))],
    );
    let disabled = setting.read_only || busy();
    let kind = setting.kind;
    let is_optional = setting.is_optional;
    let invalid_label = i18n.tr("admin.settings.invalidValue");
    let fav_key = setting.key.clone();
    let choices = setting.choices.clone();

    rsx! {
        div { class: if setting.has_override { "setting-row modified" } else { "setting-row" },
            div { class: "setting-info",
                span { class: "setting-name", "{name}" }
                span { class: "setting-key", "{setting.key}" }
                if let Some(description) = setting.description() {
                    span { class: "setting-description", "{description}" }
                }
                if let Some(warning) = setting.warning() {
                    span { class: "setting-warning", "⚠ {warning}" }
                }
                if setting.read_only {
                    span { class: "setting-tag", {i18n.tr("admin.settings.readOnly")} }
                } else if setting.has_override {
                    span { class: "setting-tag", "{default_line}" }
                }
                if let Some(message) = error() {
                    span { class: "error-text", "{message}" }
                }
            }
            div { class: "setting-editor",
                if kind == SettingKind::Bool {
                    label { class: "toggle",
                        input {
                            r#type: "checkbox",
                            checked: setting.current.as_bool().unwrap_or(false),
                            disabled,
                            onchange: move |evt| save.call(Value::Bool(evt.checked())),
                        }
                        span { class: "track" }
                    }
                } else if !choices.is_empty() {
                    select {
                        disabled,
                        value: "{draft}",
                        onchange: move |evt| {
                            let picked = evt.value();
                            if let Some(choice) = choices.iter().find(|c| display_value(&c.value) == picked) {
                                save.call(choice.value.clone());
                            }
                        },
                        for choice in setting.choices.iter() {
                            option {
                                value: display_value(&choice.value),
                                selected: choice.value == setting.current,
                                "{choice.label}"
                            }
                        }
                    }
                } else {
                    input {
                        r#type: "text",
                        disabled,
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    if !setting.read_only {
                        button {
                            class: "btn btn-primary btn-small",
                            disabled,
                            onclick: move |_| match kind.parse_input(&draft(), is_optional) {
                                Ok(value) => save.call(value),
                                Err(e) => error.set(Some(format!("{invalid_label}: {e}"))),
                            },
                            {i18n.tr("common.save")}
                        }
                    }
                }
                if setting.has_override && !setting.read_only {
                    button {
                        class: "btn btn-small",
                        disabled,
                        onclick: move |_| reset.call(()),
                        {i18n.tr("common.reset")}
                    }
                }
                button {
                    class: if is_favorite { "icon-btn star-on" } else { "icon-btn" },
                    title: "{star_title}",
                    onclick: move |_| {
                        favorites.toggle(&fav_key);
                    },
                    StarIcon { filled: is_favorite }
                }
            }
        }
    }
}

fn default_text(value: &Value, tr: &dyn Translate) -> String {
    if value.is_null() {
        tr.t("admin.settings.notSet", "Not set")
    } else {
        display_value(value)
    }
}
