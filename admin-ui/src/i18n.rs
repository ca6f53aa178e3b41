//! Locale catalogs embedded at build time and the `use_i18n` context.

use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{Catalog, Translate};

const RU: &str = include_str!("../locales/ru.json");
const EN: &str = include_str!("../locales/en.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Ru,
    En,
}

impl Language {
    /// Russian unless the browser asks for English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("en") {
            Language::En
        } else {
            Language::Ru
        }
    }

    pub fn detect() -> Self {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .map(|tag| Self::from_tag(&tag))
            .unwrap_or(Language::Ru)
    }

    fn source(self) -> &'static str {
        match self {
            Language::Ru => RU,
            Language::En => EN,
        }
    }
}

/// Cheap-to-clone handle on the active catalog.
#[derive(Clone)]
pub struct I18n {
    pub language: Language,
    catalog: Rc<Catalog>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

impl I18n {
    pub fn load(language: Language) -> Self {
        let catalog = match Catalog::from_json_str(language.source()) {
            Ok(catalog) => catalog,
            Err(e) => {
                dioxus_logger::tracing::error!("locale {language:?} is not valid JSON: {e}");
                Catalog::new()
            }
        };
        Self {
            language,
            catalog: Rc::new(catalog),
        }
    }

    /// Translate with the key itself as the fallback.
    pub fn tr(&self, key: &str) -> String {
        self.t(key, key)
    }
}

impl Translate for I18n {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.catalog.lookup(key)
    }
}

/// Provide the catalog for the whole app; call once at the root.
pub fn use_i18n_provider() -> I18n {
    use_context_provider(|| I18n::load(Language::detect()))
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>()
}
