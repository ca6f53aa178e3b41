//! Telegram Login Widget payload.
//!
//! The widget redirects to the callback page with the signed user fields in
//! the query string. The page forwards them to the backend, which checks the
//! signature against `data_check_string`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelegramWidgetAuth {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub auth_date: i64,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelegramCallbackError {
    #[error("missing required parameter `{0}`")]
    MissingField(&'static str),
    #[error("parameter `{0}` is not an integer")]
    InvalidNumber(&'static str),
}

#[derive(Default)]
struct RawParams {
    id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    username: Option<String>,
    photo_url: Option<String>,
    auth_date: Option<String>,
    hash: Option<String>,
}

/// Extract the widget payload from a callback query string (`?` optional).
///
/// `id`, `first_name`, `auth_date` and `hash` must be present and non-empty;
/// `id` and `auth_date` are read like JavaScript `parseInt(x, 10)`, so only a
/// leading run of digits counts. Empty optional fields are treated as absent.
pub fn parse_callback_query(query: &str) -> Result<TelegramWidgetAuth, TelegramCallbackError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut raw = RawParams::default();
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let slot = match &*name {
            "id" => &mut raw.id,
            "first_name" => &mut raw.first_name,
            "last_name" => &mut raw.last_name,
            "username" => &mut raw.username,
            "photo_url" => &mut raw.photo_url,
            "auth_date" => &mut raw.auth_date,
            "hash" => &mut raw.hash,
            _ => continue,
        };
        // first occurrence wins, like URLSearchParams::get
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    let id = required(raw.id, "id")?;
    let first_name = required(raw.first_name, "first_name")?;
    let auth_date = required(raw.auth_date, "auth_date")?;
    let hash = required(raw.hash, "hash")?;

    Ok(TelegramWidgetAuth {
        id: parse_int(&id, "id")?,
        first_name,
        last_name: optional(raw.last_name),
        username: optional(raw.username),
        photo_url: optional(raw.photo_url),
        auth_date: parse_int(&auth_date, "auth_date")?,
        hash,
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, TelegramCallbackError> {
    optional(value).ok_or(TelegramCallbackError::MissingField(field))
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Leading whitespace, an optional sign, then the longest digit prefix.
/// No digits (or a prefix that overflows `i64`) is `InvalidNumber`.
fn parse_int(value: &str, field: &'static str) -> Result<i64, TelegramCallbackError> {
    let rest = value.trim_start();
    let (sign, rest) = match rest.as_bytes().first() {
        Some(b'-') => ("-", &rest[1..]),
        Some(b'+') => ("", &rest[1..]),
        _ => ("", rest),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return Err(TelegramCallbackError::InvalidNumber(field));
    }
    format!("{sign}{}", &rest[..digits])
        .parse::<i64>()
        .map_err(|_| TelegramCallbackError::InvalidNumber(field))
}

impl TelegramWidgetAuth {
    /// `key=value` lines of every present field except `hash`, sorted by key.
    pub fn data_check_string(&self) -> String {
        let mut fields: Vec<(&str, String)> = vec![
            ("auth_date", self.auth_date.to_string()),
            ("first_name", self.first_name.clone()),
            ("id", self.id.to_string()),
        ];
        if let Some(v) = &self.last_name {
            fields.push(("last_name", v.clone()));
        }
        if let Some(v) = &self.photo_url {
            fields.push(("photo_url", v.clone()));
        }
        if let Some(v) = &self.username {
            fields.push(("username", v.clone()));
        }
        fields.sort_by(|a, b| a.0.cmp(b.0));
        fields
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_callback() {
        let auth = parse_callback_query(
            "?id=123456&first_name=Ivan&last_name=Petrov&username=ivan&photo_url=https%3A%2F%2Ft.me%2Fi%2Fuserpic.jpg&auth_date=1700000000&hash=abcdef",
        )
        .unwrap();
        assert_eq!(auth.id, 123456);
        assert_eq!(auth.first_name, "Ivan");
        assert_eq!(auth.last_name.as_deref(), Some("Petrov"));
        assert_eq!(auth.photo_url.as_deref(), Some("https://t.me/i/userpic.jpg"));
        assert_eq!(auth.auth_date, 1_700_000_000);
        assert_eq!(auth.hash, "abcdef");
    }

    #[test]
    fn optional_fields_may_be_missing_or_empty() {
        let auth = parse_callback_query("id=1&first_name=A&last_name=&auth_date=2&hash=h").unwrap();
        assert_eq!(auth.last_name, None);
        assert_eq!(auth.username, None);
        assert_eq!(auth.photo_url, None);
    }

    #[test]
    fn required_fields_are_enforced() {
        assert_eq!(
            parse_callback_query("first_name=A&auth_date=2&hash=h"),
            Err(TelegramCallbackError::MissingField("id"))
        );
        assert_eq!(
            parse_callback_query("id=1&first_name=&auth_date=2&hash=h"),
            Err(TelegramCallbackError::MissingField("first_name"))
        );
        assert_eq!(
            parse_callback_query("id=1&first_name=A&auth_date=2"),
            Err(TelegramCallbackError::MissingField("hash"))
        );
    }

    #[test]
    fn numeric_fields_need_leading_digits() {
        assert_eq!(
            parse_callback_query("id=abc&first_name=A&auth_date=2&hash=h"),
            Err(TelegramCallbackError::InvalidNumber("id"))
        );
        assert_eq!(
            parse_callback_query("id=1&first_name=A&auth_date=x12&hash=h"),
            Err(TelegramCallbackError::InvalidNumber("auth_date"))
        );
        assert_eq!(
            parse_callback_query("id=-&first_name=A&auth_date=2&hash=h"),
            Err(TelegramCallbackError::InvalidNumber("id"))
        );
    }

    #[test]
    fn numeric_fields_take_the_digit_prefix() {
        let auth =
            parse_callback_query("id=123abc&first_name=A&auth_date=1700000000.5&hash=h").unwrap();
        assert_eq!(auth.id, 123);
        assert_eq!(auth.auth_date, 1_700_000_000);

        let auth = parse_callback_query("id=%20%2B42&first_name=A&auth_date=-7z&hash=h").unwrap();
        assert_eq!(auth.id, 42);
        assert_eq!(auth.auth_date, -7);
    }

    #[test]
    fn data_check_string_is_sorted_and_skips_absent_fields() {
        let auth = TelegramWidgetAuth {
            id: 42,
            first_name: "Ann".to_string(),
            last_name: None,
            username: Some("ann".to_string()),
            photo_url: None,
            auth_date: 1700000000,
            hash: "ignored".to_string(),
        };
        assert_eq!(
            auth.data_check_string(),
            "auth_date=1700000000\nfirst_name=Ann\nid=42\nusername=ann"
        );
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let auth = parse_callback_query("id=1&first_name=A&auth_date=2&hash=h").unwrap();
        let json = serde_json::to_value(&auth).unwrap();
        assert!(json.get("last_name").is_none());
        assert_eq!(json["id"], 1);
    }
}
