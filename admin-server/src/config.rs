use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the admin server listens on
    pub port: u16,
    /// SQLite database holding overrides, users and sessions
    pub database_url: String,
    /// Bot token used to verify Telegram Login Widget signatures
    pub telegram_bot_token: Option<String>,
    /// Bot username the login page embeds in the widget
    pub telegram_bot_username: Option<String>,
    /// Widget payloads older than this are rejected
    pub telegram_auth_max_age: Duration,
    /// Telegram ids allowed into /api/admin
    pub admin_telegram_ids: HashSet<i64>,
    /// Mark the session cookie Secure (HTTPS only)
    pub session_secure: bool,
    /// Sessions expire after this much inactivity
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: env_parse("ADMIN_PORT", 9090)?,
            database_url: env_str("ADMIN_DATABASE_URL", "sqlite:./data/admin.db"),
            telegram_bot_token: env_opt("TELEGRAM_BOT_TOKEN"),
            telegram_bot_username: env_opt("TELEGRAM_BOT_USERNAME"),
            telegram_auth_max_age: Duration::from_secs(env_parse(
                "TELEGRAM_AUTH_MAX_AGE_SECS",
                86_400,
            )?),
            admin_telegram_ids: env_csv_parse("ADMIN_TELEGRAM_IDS")?,
            session_secure: env_parse("SESSION_SECURE", false)?,
            session_ttl: Duration::from_secs(env_parse::<u64>("SESSION_TTL_HOURS", 24)? * 3600),
        })
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse env var {key}={val}: {e}")),
        Err(_) => Ok(default),
    }
}

fn env_csv_parse(key: &str) -> anyhow::Result<HashSet<i64>> {
    match std::env::var(key) {
        Ok(raw) => parse_id_list(&raw).map_err(|e| anyhow::anyhow!("Failed to parse env var {key}: {e}")),
        Err(_) => Ok(HashSet::new()),
    }
}

fn parse_id_list(raw: &str) -> Result<HashSet<i64>, std::num::ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<i64>)
        .collect()
}

/// Resolve the Dioxus frontend dist directory.
///
/// If `FRONTEND_DIST` is set, that value is used as-is.
/// Otherwise resolve from the workspace root so this works whether the
/// server is launched from repository root or from `admin-server/`.
pub fn frontend_dist_from_env() -> String {
    if let Ok(path) = std::env::var("FRONTEND_DIST") {
        return path;
    }

    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    workspace_root
        .join("admin-ui/target/dx/admin-ui/debug/web/public")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_list_ignores_blanks() {
        let ids = parse_id_list(" 1, 22 ,,333").unwrap();
        assert_eq!(ids, HashSet::from([1, 22, 333]));
        assert!(parse_id_list("").unwrap().is_empty());
    }

    #[test]
    fn id_list_rejects_garbage() {
        assert!(parse_id_list("1,abc").is_err());
    }
}
