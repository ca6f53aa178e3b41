use dioxus::prelude::*;
use shared_types::Branding;

use crate::api;
use crate::i18n::use_i18n;

#[component]
pub fn BrandingTab(accent: String) -> Element {
    let i18n = use_i18n();
    let branding = use_resource(api::fetch_branding);

    match &*branding.read_unchecked() {
        Some(Ok(current)) => rsx! {
            BrandingForm { initial: current.clone(), accent }
        },
        Some(Err(e)) => rsx! {
            div { class: "empty-state",
                p { class: "error-text", "{e}" }
            }
        },
        None => rsx! {
            div { class: "empty-state", {i18n.tr("common.loading")} }
        },
    }
}

#[component]
fn BrandingForm(initial: Branding, accent: String) -> Element {
    let i18n = use_i18n();
    let mut name = use_signal(|| initial.name.clone());
    let mut logo_letter = use_signal(|| initial.logo_letter.clone());
    let mut logo_url = use_signal(|| initial.logo_url.clone().unwrap_or_default());
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| None::<Result<(), String>>);

    let draft = move || Branding {
        name: name(),
        logo_letter: logo_letter(),
        logo_url: Some(logo_url()).filter(|url| !url.trim().is_empty()),
    };

    let save = move |_: MouseEvent| {
        let branding = draft();
        if let Err(e) = branding.validate() {
            status.set(Some(Err(e.to_string())));
            return;
        }
        spawn(async move {
            saving.set(true);
            match api::update_branding(&branding).await {
                Ok(saved) => {
                    name.set(saved.name);
                    logo_letter.set(saved.logo_letter);
                    logo_url.set(saved.logo_url.unwrap_or_default());
                    status.set(Some(Ok(())));
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("saving branding failed: {e}");
                    status.set(Some(Err(e.to_string())));
                }
            }
            saving.set(false);
        });
    };

    let preview = draft();

    rsx! {
        div { class: "card",
            h2 { {i18n.tr("admin.branding.title")} }
            label { class: "form-field",
                {i18n.tr("admin.branding.name")}
                input {
                    r#type: "text",
                    maxlength: "64",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            label { class: "form-field",
                {i18n.tr("admin.branding.logoLetter")}
                input {
                    r#type: "text",
                    maxlength: "2",
                    value: "{logo_letter}",
                    oninput: move |evt| logo_letter.set(evt.value()),
                }
            }
            label { class: "form-field",
                {i18n.tr("admin.branding.logoUrl")}
                input {
                    r#type: "url",
                    placeholder: "https://",
                    value: "{logo_url}",
                    oninput: move |evt| logo_url.set(evt.value()),
                }
            }
            span { class: "muted", {i18n.tr("admin.branding.preview")} }
            div { class: "branding-preview",
                div { class: "logo-letter", style: "background: {accent};",
                    if let Some(url) = preview.logo_url.as_deref() {
                        img { src: "{url}", alt: "{preview.logo_letter}" }
                    } else {
                        "{preview.logo_letter}"
                    }
                }
                strong { "{preview.name}" }
            }
            {match status() {
                Some(Ok(())) => rsx! { span { class: "muted", {i18n.tr("common.saved")} } },
                Some(Err(message)) => rsx! { span { class: "error-text", "{message}" } },
                None => rsx! {},
            }}
            button {
                class: "btn btn-primary",
                disabled: saving(),
                onclick: save,
                if saving() { {i18n.tr("common.saving")} } else { {i18n.tr("common.save")} }
            }
        }
    }
}
