//! Translation lookup with default fallback.
//!
//! Locale files are nested JSON objects; a dotted path such as
//! `admin.settings.categories.PAYMENT` addresses a leaf string.

use std::collections::HashMap;

use serde_json::Value;

pub trait Translate {
    /// Raw lookup; `None` when the key has no translation.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Translate `key`, falling back to `default` when it is missing.
    fn t(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or(default).to_string()
    }

    /// Translate and substitute `{{name}}` placeholders.
    fn t_with(&self, key: &str, default: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.lookup(key).unwrap_or(default), args)
    }
}

/// Flat key → text map built from a nested locale document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let mut entries = HashMap::new();
        flatten_into(&mut entries, String::new(), value);
        Self { entries }
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for Catalog {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten_into(entries, path, v);
            }
        }
        Value::String(text) if !prefix.is_empty() => {
            entries.insert(prefix, text.clone());
        }
        _ => {}
    }
}

pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}
