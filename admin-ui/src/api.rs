use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_types::{
    ApiErrorBody, AuthConfigResponse, AuthResponse, Branding, MeResponse, SettingDefinition,
    TelegramWidgetAuth, ThemeColors, ThemeColorsUpdate, UpdateSettingRequest,
};
use std::fmt;
use std::sync::OnceLock;

/// Get the API base URL.
///
/// The admin server serves the WASM bundle itself, so requests go to the same
/// origin and carry the session cookie. `localStorage["admin_api_base"]`
/// overrides this for a proxied dev setup.
fn get_api_base() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("admin_api_base").ok().flatten())
        .map(|base| base.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Failed API call. `detail` is the server's `{"detail"}` text when it sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub detail: Option<String>,
    pub message: String,
}

impl ApiError {
    fn transport(message: String) -> Self {
        Self {
            status: 0,
            detail: None,
            message,
        }
    }

    /// Build from a non-2xx status and its raw body.
    pub fn from_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|b| b.detail)
            .filter(|d| !d.trim().is_empty());
        let message = match &detail {
            Some(detail) => format!("HTTP error: {status} ({detail})"),
            None if body.trim().is_empty() => format!("HTTP error: {status}"),
            None => format!("HTTP error: {status} ({})", body.trim()),
        };
        Self {
            status,
            detail,
            message,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => f.write_str(detail),
            None => f.write_str(&self.message),
        }
    }
}

async fn describe_http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_body(status, &body)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(describe_http_error(response).await);
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to parse JSON: {e}")))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = format!("{}{path}", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Request failed: {e}")))?;
    read_json(response).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = format!("{}{path}", api_base());
    let builder = match method {
        "PUT" => Request::put(&url),
        "PATCH" => Request::patch(&url),
        _ => Request::post(&url),
    };
    let response = builder
        .json(body)
        .map_err(|e| ApiError::transport(format!("Failed to encode request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Request failed: {e}")))?;
    read_json(response).await
}

async fn send_empty<T: DeserializeOwned>(method: &str, path: &str) -> Result<T, ApiError> {
    let url = format!("{}{path}", api_base());
    let builder = match method {
        "DELETE" => Request::delete(&url),
        _ => Request::post(&url),
    };
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Request failed: {e}")))?;
    read_json(response).await
}

// ── Auth ──────────────────────────────────────────────────────────────────────

pub async fn fetch_me() -> Result<MeResponse, ApiError> {
    get_json("/api/auth/me").await
}

pub async fn fetch_auth_config() -> Result<AuthConfigResponse, ApiError> {
    get_json("/api/auth/config").await
}

pub async fn telegram_widget_login(payload: &TelegramWidgetAuth) -> Result<AuthResponse, ApiError> {
    send_json("POST", "/api/auth/telegram/widget", payload).await
}

pub async fn logout() -> Result<(), ApiError> {
    let url = format!("{}/api/auth/logout", api_base());
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Request failed: {e}")))?;
    if !response.ok() {
        return Err(describe_http_error(response).await);
    }
    Ok(())
}

// ── Settings ──────────────────────────────────────────────────────────────────

pub async fn fetch_settings() -> Result<Vec<SettingDefinition>, ApiError> {
    get_json("/api/admin/settings").await
}

pub async fn update_setting(key: &str, value: Value) -> Result<SettingDefinition, ApiError> {
    send_json(
        "PUT",
        &format!("/api/admin/settings/{key}"),
        &UpdateSettingRequest { value },
    )
    .await
}

pub async fn reset_setting(key: &str) -> Result<SettingDefinition, ApiError> {
    send_empty("DELETE", &format!("/api/admin/settings/{key}")).await
}

// ── Theme & branding ──────────────────────────────────────────────────────────

pub async fn fetch_theme_colors() -> Result<ThemeColors, ApiError> {
    get_json("/api/theme/colors").await
}

pub async fn update_theme_colors(update: &ThemeColorsUpdate) -> Result<ThemeColors, ApiError> {
    send_json("PATCH", "/api/admin/theme/colors", update).await
}

pub async fn reset_theme_colors() -> Result<ThemeColors, ApiError> {
    send_empty("POST", "/api/admin/theme/colors/reset").await
}

pub async fn fetch_branding() -> Result<Branding, ApiError> {
    get_json("/api/branding").await
}

pub async fn update_branding(branding: &Branding) -> Result<Branding, ApiError> {
    send_json("PUT", "/api/admin/branding", branding).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_body_is_extracted() {
        let err = ApiError::from_body(401, r#"{"detail":"Invalid Telegram authentication data"}"#);
        assert_eq!(
            err.detail.as_deref(),
            Some("Invalid Telegram authentication data")
        );
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Invalid Telegram authentication data");
    }

    #[test]
    fn plain_body_has_no_detail() {
        let err = ApiError::from_body(502, "Bad Gateway");
        assert_eq!(err.detail, None);
        assert_eq!(err.message, "HTTP error: 502 (Bad Gateway)");

        let empty = ApiError::from_body(500, "  ");
        assert_eq!(empty.message, "HTTP error: 500");
    }
}
