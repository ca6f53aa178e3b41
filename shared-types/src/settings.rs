//! Setting definitions as served by the admin settings API, plus the
//! category aggregation and value handling the panel needs.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::i18n::Translate;

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingCategoryRef {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SettingHint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingChoice {
    pub value: Value,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Str,
    Int,
    Float,
    Bool,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SettingKind::Str => "str",
            SettingKind::Int => "int",
            SettingKind::Float => "float",
            SettingKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// One configurable setting with its effective and default values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingDefinition {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: SettingCategoryRef,
    #[serde(rename = "type")]
    pub kind: SettingKind,
    #[serde(default)]
    pub is_optional: bool,
    pub current: Value,
    pub original: Value,
    #[serde(default)]
    pub has_override: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<SettingHint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<SettingChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SettingDefinition {
    pub fn description(&self) -> Option<&str> {
        self.hint.as_ref().and_then(|h| h.description.as_deref())
    }

    pub fn warning(&self) -> Option<&str> {
        self.hint.as_ref().and_then(|h| h.warning.as_deref())
    }

    /// Name used for translation lookups: the display name, else the key.
    pub fn lookup_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.key)
    }

    /// Translated display name (`admin.settings.settingNames.<Formatted Name>`).
    pub fn translated_name(&self, tr: &dyn Translate) -> String {
        let formatted = format_setting_key(self.lookup_name());
        tr.t(&format!("admin.settings.settingNames.{formatted}"), &formatted)
    }

    /// Translated label of this setting's category.
    pub fn category_label(&self, tr: &dyn Translate) -> String {
        category_label(&self.category.key, tr)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingCategorySummary {
    pub key: String,
    pub label: String,
    pub items: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateSettingRequest {
    pub value: Value,
}

/// Settings of one category, in the order they were listed.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub key: String,
    pub label: String,
    pub settings: Vec<SettingDefinition>,
}

// ============================================================================
// Naming and grouping
// ============================================================================

/// `"SUPPORT_USERNAME"` → `"Support Username"`.
///
/// Splits on single spaces after replacing underscores, so runs of
/// separators survive as runs of spaces.
pub fn format_setting_key(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn category_label(key: &str, tr: &dyn Translate) -> String {
    tr.t(&format!("admin.settings.categories.{key}"), key)
}

/// Collect the settings belonging to `categories`, grouped by category key.
///
/// Groups appear in the order their category is first seen in `all`.
pub fn group_by_category(
    all: &[SettingDefinition],
    categories: &[&str],
    tr: &dyn Translate,
) -> Vec<CategoryGroup> {
    if categories.is_empty() {
        return Vec::new();
    }

    let mut groups: Vec<CategoryGroup> = Vec::new();
    for setting in all {
        let key = setting.category.key.as_str();
        if !categories.contains(&key) {
            continue;
        }
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.settings.push(setting.clone()),
            None => groups.push(CategoryGroup {
                key: key.to_string(),
                label: category_label(key, tr),
                settings: vec![setting.clone()],
            }),
        }
    }
    groups
}

// ============================================================================
// Values
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingValueError {
    #[error("value is required")]
    Required,
    #[error("expected a value of type {0}")]
    TypeMismatch(SettingKind),
    #[error("value is not one of the allowed choices")]
    NotAChoice,
}

impl SettingKind {
    /// Check `value` against this kind and normalize it.
    pub fn validate(
        self,
        value: &Value,
        is_optional: bool,
        choices: &[SettingChoice],
    ) -> Result<Value, SettingValueError> {
        if value.is_null() {
            return if is_optional {
                Ok(Value::Null)
            } else {
                Err(SettingValueError::Required)
            };
        }

        let normalized = match (self, value) {
            (SettingKind::Str, Value::String(_)) => value.clone(),
            (SettingKind::Bool, Value::Bool(_)) => value.clone(),
            (SettingKind::Bool, Value::String(s)) => match s.as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => return Err(SettingValueError::TypeMismatch(self)),
            },
            (SettingKind::Int, Value::Number(n)) => {
                let int = n
                    .as_i64()
                    .or_else(|| n.as_f64().filter(|f| is_integral_i64(*f)).map(|f| f as i64))
                    .ok_or(SettingValueError::TypeMismatch(self))?;
                Value::from(int)
            }
            (SettingKind::Int, Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| SettingValueError::TypeMismatch(self))?,
            (SettingKind::Float, Value::Number(n)) => n
                .as_f64()
                .map(Value::from)
                .ok_or(SettingValueError::TypeMismatch(self))?,
            (SettingKind::Float, Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::from)
                .ok_or(SettingValueError::TypeMismatch(self))?,
            _ => return Err(SettingValueError::TypeMismatch(self)),
        };

        if !choices.is_empty() && !choices.iter().any(|c| c.value == normalized) {
            return Err(SettingValueError::NotAChoice);
        }
        Ok(normalized)
    }

    /// Turn text-field input into a JSON value of this kind.
    pub fn parse_input(self, raw: &str, is_optional: bool) -> Result<Value, SettingValueError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return if is_optional {
                Ok(Value::Null)
            } else {
                Err(SettingValueError::Required)
            };
        }

        match self {
            SettingKind::Str => Ok(Value::String(raw.to_string())),
            SettingKind::Int => trimmed
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| SettingValueError::TypeMismatch(self)),
            SettingKind::Float => trimmed
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::from)
                .ok_or(SettingValueError::TypeMismatch(self)),
            SettingKind::Bool => match trimmed.to_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(Value::Bool(true)),
                "false" | "0" | "off" | "no" => Ok(Value::Bool(false)),
                _ => Err(SettingValueError::TypeMismatch(self)),
            },
        }
    }
}

/// Integral and inside `i64`; `i64::MAX as f64` rounds up to 2^63, hence `<`.
fn is_integral_i64(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Text shown for a value in an input field or a summary line.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn setting(key: &str, category: &str) -> SettingDefinition {
        SettingDefinition {
            key: key.to_string(),
            name: Some(key.to_string()),
            category: SettingCategoryRef {
                key: category.to_string(),
                label: category.to_string(),
            },
            kind: SettingKind::Str,
            is_optional: false,
            current: Value::String(String::new()),
            original: Value::String(String::new()),
            has_override: false,
            read_only: false,
            hint: None,
            choices: Vec::new(),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::setting;
    use super::*;
    use crate::i18n::Catalog;
    use serde_json::json;

    #[test]
    fn format_setting_key_title_cases_words() {
        assert_eq!(format_setting_key("SUPPORT_USERNAME"), "Support Username");
        assert_eq!(format_setting_key("trial duration days"), "Trial Duration Days");
        assert_eq!(format_setting_key("A__B"), "A  B");
        assert_eq!(format_setting_key(""), "");
    }

    #[test]
    fn grouping_follows_first_appearance_order() {
        let all = vec![
            setting("TRIAL_DAYS", "TRIAL"),
            setting("YOOKASSA_ENABLED", "YOOKASSA"),
            setting("PAYMENT_CURRENCY", "PAYMENT"),
            setting("YOOKASSA_SHOP_ID", "YOOKASSA"),
        ];
        let mut tr = Catalog::new();
        tr.insert("admin.settings.categories.YOOKASSA", "ЮKassa");

        let groups = group_by_category(&all, &["PAYMENT", "YOOKASSA"], &tr);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "YOOKASSA");
        assert_eq!(groups[0].label, "ЮKassa");
        assert_eq!(groups[0].settings.len(), 2);
        assert_eq!(groups[0].settings[1].key, "YOOKASSA_SHOP_ID");
        assert_eq!(groups[1].key, "PAYMENT");
        assert_eq!(groups[1].label, "PAYMENT");
    }

    #[test]
    fn grouping_without_categories_is_empty() {
        let all = vec![setting("TRIAL_DAYS", "TRIAL")];
        assert!(group_by_category(&all, &[], &Catalog::new()).is_empty());
    }

    #[test]
    fn definition_uses_api_field_names() {
        let raw = json!({
            "key": "MAINTENANCE_MODE",
            "name": "Maintenance mode",
            "category": {"key": "MAINTENANCE", "label": "Maintenance"},
            "type": "bool",
            "current": true,
            "original": false,
            "has_override": true,
            "hint": {"description": "Stops the bot for users"}
        });
        let def: SettingDefinition = serde_json::from_value(raw).unwrap();
        assert_eq!(def.kind, SettingKind::Bool);
        assert!(!def.read_only);
        assert_eq!(def.description(), Some("Stops the bot for users"));
        assert!(def.choices.is_empty());
    }

    #[test]
    fn validate_normalizes_by_kind() {
        assert_eq!(
            SettingKind::Int.validate(&json!("42"), false, &[]),
            Ok(json!(42))
        );
        assert_eq!(
            SettingKind::Int.validate(&json!(3.0), false, &[]),
            Ok(json!(3))
        );
        assert_eq!(
            SettingKind::Int.validate(&json!(3.5), false, &[]),
            Err(SettingValueError::TypeMismatch(SettingKind::Int))
        );
        assert_eq!(
            SettingKind::Bool.validate(&json!("true"), false, &[]),
            Ok(json!(true))
        );
        assert_eq!(
            SettingKind::Str.validate(&json!(5), false, &[]),
            Err(SettingValueError::TypeMismatch(SettingKind::Str))
        );
        assert_eq!(
            SettingKind::Str.validate(&Value::Null, false, &[]),
            Err(SettingValueError::Required)
        );
        assert_eq!(
            SettingKind::Str.validate(&Value::Null, true, &[]),
            Ok(Value::Null)
        );
    }

    #[test]
    fn validate_rejects_integers_outside_i64() {
        assert_eq!(
            SettingKind::Int.validate(&json!(1e20), false, &[]),
            Err(SettingValueError::TypeMismatch(SettingKind::Int))
        );
        assert_eq!(
            SettingKind::Int.validate(&json!(-1e20), false, &[]),
            Err(SettingValueError::TypeMismatch(SettingKind::Int))
        );
        assert_eq!(
            SettingKind::Int.validate(&json!(u64::MAX), false, &[]),
            Err(SettingValueError::TypeMismatch(SettingKind::Int))
        );
        assert_eq!(
            SettingKind::Int.validate(&json!(i64::MAX), false, &[]),
            Ok(json!(i64::MAX))
        );
    }

    #[test]
    fn empty_name_falls_back_to_key() {
        let mut def = setting("SUPPORT_USERNAME", "CORE");
        def.name = Some(String::new());
        assert_eq!(def.lookup_name(), "SUPPORT_USERNAME");
        assert_eq!(def.translated_name(&Catalog::new()), "Support Username");
    }

    #[test]
    fn validate_enforces_choices() {
        let choices = vec![
            SettingChoice {
                value: json!("RUB"),
                label: "Ruble".to_string(),
                description: None,
            },
            SettingChoice {
                value: json!("USD"),
                label: "Dollar".to_string(),
                description: None,
            },
        ];
        assert_eq!(
            SettingKind::Str.validate(&json!("USD"), false, &choices),
            Ok(json!("USD"))
        );
        assert_eq!(
            SettingKind::Str.validate(&json!("EUR"), false, &choices),
            Err(SettingValueError::NotAChoice)
        );
    }

    #[test]
    fn parse_input_handles_text_fields() {
        assert_eq!(SettingKind::Int.parse_input(" 15 ", false), Ok(json!(15)));
        assert_eq!(SettingKind::Bool.parse_input("On", false), Ok(json!(true)));
        assert_eq!(SettingKind::Float.parse_input("1.5", false), Ok(json!(1.5)));
        assert_eq!(SettingKind::Str.parse_input(" a b ", false), Ok(json!(" a b ")));
        assert_eq!(SettingKind::Int.parse_input("  ", true), Ok(Value::Null));
        assert_eq!(
            SettingKind::Int.parse_input("", false),
            Err(SettingValueError::Required)
        );
        assert!(SettingKind::Float.parse_input("nan", false).is_err());
    }

    #[test]
    fn display_value_strips_string_quotes() {
        assert_eq!(display_value(&json!("hello")), "hello");
        assert_eq!(display_value(&json!(10)), "10");
        assert_eq!(display_value(&json!(false)), "false");
        assert_eq!(display_value(&Value::Null), "");
    }
}
