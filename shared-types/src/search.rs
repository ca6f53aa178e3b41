//! Global settings search.

use crate::i18n::Translate;
use crate::settings::SettingDefinition;

/// Case-insensitive substring search across every setting.
///
/// A setting matches when the trimmed, lowercased query occurs in its key,
/// raw name, translated name, description, or translated category label.
/// Fields are checked in that order and the first hit wins. Order of `all`
/// is preserved.
pub fn filter_settings<'a>(
    all: &'a [SettingDefinition],
    query: &str,
    tr: &dyn Translate,
) -> Vec<&'a SettingDefinition> {
    let q = query.to_lowercase();
    let q = q.trim();
    if q.is_empty() {
        return Vec::new();
    }

    all.iter().filter(|s| matches_query(s, q, tr)).collect()
}

fn matches_query(setting: &SettingDefinition, q: &str, tr: &dyn Translate) -> bool {
    if setting.key.to_lowercase().contains(q) {
        return true;
    }
    if let Some(name) = &setting.name {
        if name.to_lowercase().contains(q) {
            return true;
        }
    }
    if setting.translated_name(tr).to_lowercase().contains(q) {
        return true;
    }
    if let Some(description) = setting.description() {
        if description.to_lowercase().contains(q) {
            return true;
        }
    }
    setting.category_label(tr).to_lowercase().contains(q)
}

/// Status line under the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSummary {
    Found(usize),
    Nothing,
}

impl SearchSummary {
    /// `None` when the query is blank and no status line is shown.
    pub fn for_query(query: &str, count: usize) -> Option<Self> {
        if query.trim().is_empty() {
            return None;
        }
        Some(if count > 0 {
            SearchSummary::Found(count)
        } else {
            SearchSummary::Nothing
        })
    }

    pub fn headline(self, tr: &dyn Translate) -> String {
        match self {
            SearchSummary::Found(count) => tr.t_with(
                "admin.settings.searchFound",
                "Найдено: {{count}}",
                &[("count", &count.to_string())],
            ),
            SearchSummary::Nothing => tr.t("admin.settings.searchNothing", "Ничего не найдено"),
        }
    }

    /// The echoed query; only present when something was found.
    pub fn query_line(self, query: &str, tr: &dyn Translate) -> Option<String> {
        match self {
            SearchSummary::Found(_) => Some(tr.t_with(
                "admin.settings.searchQuery",
                "по запросу «{{query}}»",
                &[("query", query)],
            )),
            SearchSummary::Nothing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::settings::fixtures::setting;
    use crate::settings::SettingHint;

    fn sample() -> Vec<SettingDefinition> {
        let mut trial = setting("TRIAL_DURATION_DAYS", "TRIAL");
        trial.name = Some("Trial duration".to_string());
        let mut support = setting("SUPPORT_USERNAME", "CORE");
        support.name = None;
        support.hint = Some(SettingHint {
            description: Some("Telegram handle shown in the help menu".to_string()),
            ..SettingHint::default()
        });
        let yookassa = setting("YOOKASSA_SHOP_ID", "YOOKASSA");
        vec![trial, support, yookassa]
    }

    fn catalog() -> Catalog {
        let mut tr = Catalog::new();
        tr.insert(
            "admin.settings.settingNames.Support Username",
            "Контакт поддержки",
        );
        tr.insert("admin.settings.categories.YOOKASSA", "ЮKassa платежи");
        tr
    }

    fn keys(found: Vec<&SettingDefinition>) -> Vec<&str> {
        found.into_iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn blank_query_finds_nothing() {
        let all = sample();
        assert!(filter_settings(&all, "", &catalog()).is_empty());
        assert!(filter_settings(&all, "   ", &catalog()).is_empty());
    }

    #[test]
    fn matches_key_case_insensitively() {
        let all = sample();
        assert_eq!(keys(filter_settings(&all, "trial_DUR", &catalog())), vec!["TRIAL_DURATION_DAYS"]);
    }

    #[test]
    fn matches_raw_name_and_trims_query() {
        let all = sample();
        assert_eq!(keys(filter_settings(&all, "  Trial Duration ", &catalog())), vec!["TRIAL_DURATION_DAYS"]);
    }

    #[test]
    fn matches_translated_name() {
        let all = sample();
        assert_eq!(keys(filter_settings(&all, "поддержки", &catalog())), vec!["SUPPORT_USERNAME"]);
    }

    #[test]
    fn matches_description() {
        let all = sample();
        assert_eq!(keys(filter_settings(&all, "help menu", &catalog())), vec!["SUPPORT_USERNAME"]);
    }

    #[test]
    fn matches_translated_category_label() {
        let all = sample();
        assert_eq!(keys(filter_settings(&all, "платежи", &catalog())), vec!["YOOKASSA_SHOP_ID"]);
    }

    #[test]
    fn preserves_input_order() {
        let all = sample();
        assert_eq!(
            keys(filter_settings(&all, "_", &catalog())),
            vec!["TRIAL_DURATION_DAYS", "SUPPORT_USERNAME", "YOOKASSA_SHOP_ID"]
        );
    }

    #[test]
    fn summary_lines() {
        let tr = Catalog::new();
        assert_eq!(SearchSummary::for_query(" ", 4), None);

        let found = SearchSummary::for_query("bot", 2).unwrap();
        assert_eq!(found.headline(&tr), "Найдено: 2");
        assert_eq!(found.query_line("bot", &tr).as_deref(), Some("по запросу «bot»"));

        let nothing = SearchSummary::for_query("bot", 0).unwrap();
        assert_eq!(nothing.headline(&tr), "Ничего не найдено");
        assert_eq!(nothing.query_line("bot", &tr), None);
    }
}
