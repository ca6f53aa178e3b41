//! Theme palette and branding documents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("{field} must be a hex color like #1a2b3c")]
    InvalidColor { field: &'static str },
    #[error("project name must be 1-64 characters")]
    InvalidName,
    #[error("logo letter must be 1-2 characters")]
    InvalidLogoLetter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeColors {
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            accent: "#3b82f6".to_string(),
            background: "#0a0f1a".to_string(),
            surface: "#0f172a".to_string(),
            text: "#f1f5f9".to_string(),
            text_secondary: "#94a3b8".to_string(),
            success: "#22c55e".to_string(),
            warning: "#f59e0b".to_string(),
            error: "#ef4444".to_string(),
        }
    }
}

/// Partial palette update; absent fields keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ThemeColorsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ThemeColors {
    /// `(field name, css variable, value)` for every color, in display order.
    pub fn entries(&self) -> [(&'static str, &'static str, &str); 8] {
        [
            ("accent", "--accent", self.accent.as_str()),
            ("background", "--bg", self.background.as_str()),
            ("surface", "--surface", self.surface.as_str()),
            ("text", "--text", self.text.as_str()),
            ("text_secondary", "--text-secondary", self.text_secondary.as_str()),
            ("success", "--success", self.success.as_str()),
            ("warning", "--warning", self.warning.as_str()),
            ("error", "--error", self.error.as_str()),
        ]
    }

    /// Apply `update` atomically: nothing changes if any provided color is invalid.
    pub fn apply(&mut self, update: &ThemeColorsUpdate) -> Result<(), ThemeError> {
        let mut next = self.clone();
        {
            let slots: [(&'static str, &mut String, &Option<String>); 8] = [
                ("accent", &mut next.accent, &update.accent),
                ("background", &mut next.background, &update.background),
                ("surface", &mut next.surface, &update.surface),
                ("text", &mut next.text, &update.text),
                ("text_secondary", &mut next.text_secondary, &update.text_secondary),
                ("success", &mut next.success, &update.success),
                ("warning", &mut next.warning, &update.warning),
                ("error", &mut next.error, &update.error),
            ];
            for (field, slot, value) in slots {
                if let Some(value) = value {
                    if !is_hex_color(value) {
                        return Err(ThemeError::InvalidColor { field });
                    }
                    *slot = value.to_lowercase();
                }
            }
        }
        *self = next;
        Ok(())
    }
}

impl ThemeColorsUpdate {
    /// Update touching only `field`; unknown field names yield an empty update.
    pub fn single(field: &str, value: &str) -> Self {
        let value = Some(value.to_string());
        let mut update = Self::default();
        match field {
            "accent" => update.accent = value,
            "background" => update.background = value,
            "surface" => update.surface = value,
            "text" => update.text = value,
            "text_secondary" => update.text_secondary = value,
            "success" => update.success = value,
            "warning" => update.warning = value,
            "error" => update.error = value,
            _ => {}
        }
        update
    }
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Branding {
    pub name: String,
    pub logo_letter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: "VPN Bot".to_string(),
            logo_letter: "V".to_string(),
            logo_url: None,
        }
    }
}

impl Branding {
    pub fn validate(&self) -> Result<(), ThemeError> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 || name_len > 64 {
            return Err(ThemeError::InvalidName);
        }
        let letter_len = self.logo_letter.trim().chars().count();
        if letter_len == 0 || letter_len > 2 {
            return Err(ThemeError::InvalidLogoLetter);
        }
        Ok(())
    }
}
