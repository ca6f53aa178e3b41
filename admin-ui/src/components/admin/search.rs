use dioxus::prelude::*;
use shared_types::{SearchSummary, Translate};

use super::icons::{CloseIcon, SearchIcon};
use crate::i18n::use_i18n;

/// Search field bound to the page's query signal; the clear button only
/// shows while there is something to clear.
#[component]
pub fn SearchBox(query: Signal<String>) -> Element {
    let i18n = use_i18n();
    let mut query = query;
    let placeholder = i18n.tr("admin.settings.searchPlaceholder");
    let clear_label = i18n.tr("admin.settings.clearSearch");

    rsx! {
        div { class: "search-box",
            span { class: "search-icon", SearchIcon {} }
            input {
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            if !query.read().is_empty() {
                button {
                    class: "icon-btn clear",
                    title: "{clear_label}",
                    onclick: move |_| query.set(String::new()),
                    CloseIcon {}
                }
            }
        }
    }
}

/// Headline plus the echoed query, exactly as typed. `None` for a blank query.
fn summary_text(query: &str, count: usize, tr: &dyn Translate) -> Option<(String, Option<String>)> {
    let summary = SearchSummary::for_query(query, count)?;
    Some((summary.headline(tr), summary.query_line(query, tr)))
}

#[component]
pub fn SearchSummaryLine(query: String, count: usize) -> Element {
    let i18n = use_i18n();
    let Some((headline, query_line)) = summary_text(&query, count, &i18n) else {
        return rsx! {};
    };

    rsx! {
        div { class: "search-summary",
            strong { "{headline}" }
            if let Some(line) = query_line {
                " {line}"
            }
        }
    }
}
