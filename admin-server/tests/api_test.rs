//! Admin API Integration Tests
//!
//! Drives the full router (sessions included) against a temporary SQLite file.

use std::collections::HashSet;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use admin_server::auth::telegram::sign;
use admin_server::config::Config;
use admin_server::session_store::SqliteSessionStore;
use shared_types::TelegramWidgetAuth;

const BOT_TOKEN: &str = "987654:test-bot-token";
const ADMIN_ID: i64 = 1001;
const USER_ID: i64 = 2002;

fn test_config(database_url: String) -> Config {
    Config {
        port: 0,
        database_url,
        telegram_bot_token: Some(BOT_TOKEN.to_string()),
        telegram_bot_username: Some("admin_test_bot".to_string()),
        telegram_auth_max_age: Duration::from_secs(86_400),
        admin_telegram_ids: HashSet::from([ADMIN_ID]),
        session_secure: false,
        session_ttl: Duration::from_secs(3600),
    }
}

async fn setup_test_app() -> (axum::Router, tempfile::TempDir) {
    setup_with(|_| {}).await
}

async fn setup_with(tweak: impl FnOnce(&mut Config)) -> (axum::Router, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("admin.db");
    let mut config = test_config(format!("sqlite:{}", db_path.display()));
    tweak(&mut config);

    let db = admin_server::db::connect(&config.database_url)
        .await
        .expect("Failed to open database");
    let store = SqliteSessionStore::new(db.clone());
    let state = admin_server::build_state(&config, db);
    let dist = temp_dir.path().to_string_lossy().to_string();
    let app = admin_server::build_router(
        state,
        admin_server::session_layer(store, &config),
        &dist,
    );
    (app, temp_dir)
}

fn signed_payload(id: i64) -> TelegramWidgetAuth {
    let mut auth = TelegramWidgetAuth {
        id,
        first_name: "Test".to_string(),
        last_name: Some("Admin".to_string()),
        username: Some("test_admin".to_string()),
        photo_url: None,
        auth_date: chrono::Utc::now().timestamp(),
        hash: String::new(),
    };
    auth.hash = sign(&auth, BOT_TOKEN);
    auth
}

fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_response(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("Invalid JSON response")
    };
    (status, value)
}

/// Log in through the widget endpoint and return the session cookie.
async fn login(app: &axum::Router, id: i64) -> String {
    let payload = serde_json::to_value(signed_payload(id)).unwrap();
    let req = json_request("POST", "/api/auth/telegram/widget", None, Some(payload));
    let response = app.clone().oneshot(req).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set a session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _temp_dir) = setup_test_app().await;

    let (status, body) = json_response(&app, json_request("GET", "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "admin-server");
}

#[tokio::test]
async fn test_admin_routes_require_session() {
    let (app, _temp_dir) = setup_test_app().await;

    let (status, body) =
        json_response(&app, json_request("GET", "/api/admin/settings", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Not authenticated");
}

#[tokio::test]
async fn test_non_admin_is_forbidden() {
    let (app, _temp_dir) = setup_test_app().await;
    let cookie = login(&app, USER_ID).await;

    let (status, body) = json_response(
        &app,
        json_request("GET", "/api/admin/settings", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["detail"], "Admin access required");
}

#[tokio::test]
async fn test_widget_login_and_me() {
    let (app, _temp_dir) = setup_test_app().await;

    let payload = serde_json::to_value(signed_payload(ADMIN_ID)).unwrap();
    let (status, body) = json_response(
        &app,
        json_request("POST", "/api/auth/telegram/widget", None, Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_admin"], true);
    assert_eq!(body["user"]["display_name"], "Test Admin");

    let cookie = login(&app, ADMIN_ID).await;
    let (status, me) =
        json_response(&app, json_request("GET", "/api/auth/me", Some(&cookie), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["authenticated"], true);
    assert_eq!(me["user"]["telegram_id"], ADMIN_ID);
    assert_eq!(me["user"]["username"], "test_admin");
}

#[tokio::test]
async fn test_me_without_session() {
    let (app, _temp_dir) = setup_test_app().await;

    let (status, me) = json_response(&app, json_request("GET", "/api/auth/me", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["authenticated"], false);
    assert_eq!(me["is_admin"], false);
}

#[tokio::test]
async fn test_widget_login_rejects_bad_hash() {
    let (app, _temp_dir) = setup_test_app().await;

    let mut payload = signed_payload(ADMIN_ID);
    payload.first_name = "Someone else".to_string();
    let (status, body) = json_response(
        &app,
        json_request(
            "POST",
            "/api/auth/telegram/widget",
            None,
            Some(serde_json::to_value(payload).unwrap()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Invalid Telegram authentication data");
}

#[tokio::test]
async fn test_widget_login_rejects_outdated_payload() {
    let (app, _temp_dir) = setup_test_app().await;

    let mut payload = signed_payload(ADMIN_ID);
    payload.auth_date -= 2 * 86_400;
    payload.hash = sign(&payload, BOT_TOKEN);
    let (status, body) = json_response(
        &app,
        json_request(
            "POST",
            "/api/auth/telegram/widget",
            None,
            Some(serde_json::to_value(payload).unwrap()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Telegram authentication data is outdated");
}

#[tokio::test]
async fn test_widget_login_unconfigured() {
    let (app, _temp_dir) = setup_with(|c| c.telegram_bot_token = None).await;

    let payload = serde_json::to_value(signed_payload(ADMIN_ID)).unwrap();
    let (status, body) = json_response(
        &app,
        json_request("POST", "/api/auth/telegram/widget", None, Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"], "Telegram login is not configured");
}

#[tokio::test]
async fn test_auth_config_exposes_bot_username() {
    let (app, _temp_dir) = setup_test_app().await;

    let (status, body) =
        json_response(&app, json_request("GET", "/api/auth/config", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bot_username"], "admin_test_bot");
}

#[tokio::test]
async fn test_list_and_filter_settings() {
    let (app, _temp_dir) = setup_test_app().await;
    let cookie = login(&app, ADMIN_ID).await;

    let (status, all) = json_response(
        &app,
        json_request("GET", "/api/admin/settings", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let all = all.as_array().unwrap();
    assert!(all.len() > 30);
    assert!(all.iter().all(|s| s["has_override"] == false));

    let (status, trial) = json_response(
        &app,
        json_request("GET", "/api/admin/settings?category=TRIAL", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let trial = trial.as_array().unwrap();
    assert_eq!(trial.len(), 2);
    assert!(trial.iter().all(|s| s["category"]["key"] == "TRIAL"));

    let (status, categories) = json_response(
        &app,
        json_request("GET", "/api/admin/settings/categories", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(categories[0]["key"], "CORE");
}

#[tokio::test]
async fn test_update_and_reset_setting() {
    let (app, _temp_dir) = setup_test_app().await;
    let cookie = login(&app, ADMIN_ID).await;

    let (status, updated) = json_response(
        &app,
        json_request(
            "PUT",
            "/api/admin/settings/TRIAL_DURATION_DAYS",
            Some(&cookie),
            Some(json!({ "value": 7 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["current"], 7);
    assert_eq!(updated["original"], 3);
    assert_eq!(updated["has_override"], true);
    assert_eq!(updated["type"], "int");

    let (_, fetched) = json_response(
        &app,
        json_request("GET", "/api/admin/settings/TRIAL_DURATION_DAYS", Some(&cookie), None),
    )
    .await;
    assert_eq!(fetched["current"], 7);
    assert!(fetched["updated_at"].is_string());

    let (status, reset) = json_response(
        &app,
        json_request("DELETE", "/api/admin/settings/TRIAL_DURATION_DAYS", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reset["current"], 3);
    assert_eq!(reset["has_override"], false);
}

#[tokio::test]
async fn test_update_rejects_wrong_type() {
    let (app, _temp_dir) = setup_test_app().await;
    let cookie = login(&app, ADMIN_ID).await;

    let (status, body) = json_response(
        &app,
        json_request(
            "PUT",
            "/api/admin/settings/MAINTENANCE_MODE",
            Some(&cookie),
            Some(json!({ "value": "definitely" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("MAINTENANCE_MODE"));

    // integral but beyond i64: rejected, not clamped
    let (status, _) = json_response(
        &app,
        json_request(
            "PUT",
            "/api/admin/settings/TRIAL_DURATION_DAYS",
            Some(&cookie),
            Some(json!({ "value": 1e20 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = json_response(
        &app,
        json_request("GET", "/api/admin/settings/TRIAL_DURATION_DAYS", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current"], 3);
    assert_eq!(body["has_override"], false);
}

#[tokio::test]
async fn test_update_read_only_and_unknown() {
    let (app, _temp_dir) = setup_test_app().await;
    let cookie = login(&app, ADMIN_ID).await;

    let (status, _) = json_response(
        &app,
        json_request(
            "PUT",
            "/api/admin/settings/DATABASE_MODE",
            Some(&cookie),
            Some(json!({ "value": "sqlite" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = json_response(
        &app,
        json_request("GET", "/api/admin/settings/NO_SUCH_KEY", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Setting 'NO_SUCH_KEY' not found");
}

#[tokio::test]
async fn test_theme_colors_patch_and_reset() {
    let (app, _temp_dir) = setup_test_app().await;
    let cookie = login(&app, ADMIN_ID).await;

    let (status, colors) =
        json_response(&app, json_request("GET", "/api/theme/colors", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(colors["accent"], "#3b82f6");

    let (status, patched) = json_response(
        &app,
        json_request(
            "PATCH",
            "/api/admin/theme/colors",
            Some(&cookie),
            Some(json!({ "accent": "#FF0000" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["accent"], "#ff0000");
    assert_eq!(patched["background"], "#0a0f1a");

    let (_, public) =
        json_response(&app, json_request("GET", "/api/theme/colors", None, None)).await;
    assert_eq!(public["accent"], "#ff0000");

    let (status, body) = json_response(
        &app,
        json_request(
            "PATCH",
            "/api/admin/theme/colors",
            Some(&cookie),
            Some(json!({ "text": "white" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "text must be a hex color like #1a2b3c");

    let (status, reset) = json_response(
        &app,
        json_request("POST", "/api/admin/theme/colors/reset", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reset["accent"], "#3b82f6");
}

#[tokio::test]
async fn test_branding_update() {
    let (app, _temp_dir) = setup_test_app().await;
    let cookie = login(&app, ADMIN_ID).await;

    let (_, branding) = json_response(&app, json_request("GET", "/api/branding", None, None)).await;
    assert_eq!(branding["name"], "VPN Bot");

    let (status, saved) = json_response(
        &app,
        json_request(
            "PUT",
            "/api/admin/branding",
            Some(&cookie),
            Some(json!({ "name": "  Fast VPN ", "logo_letter": "F" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["name"], "Fast VPN");

    let (status, _) = json_response(
        &app,
        json_request(
            "PUT",
            "/api/admin/branding",
            Some(&cookie),
            Some(json!({ "name": "", "logo_letter": "F" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let (app, _temp_dir) = setup_test_app().await;
    let cookie = login(&app, ADMIN_ID).await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/auth/logout", Some(&cookie), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, _) = json_response(
        &app,
        json_request("GET", "/api/admin/settings", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let (app, _temp_dir) = setup_test_app().await;

    let (status, body) =
        json_response(&app, json_request("GET", "/api/nothing/here", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not found");
}
