use std::collections::HashSet;

use sqlx::SqlitePool;

use crate::auth::telegram::TelegramVerifier;
use crate::settings::SettingsRegistry;

pub struct AppState {
    pub db: SqlitePool,
    pub settings: SettingsRegistry,
    pub telegram: TelegramVerifier,
    pub bot_username: Option<String>,
    pub admin_ids: HashSet<i64>,
}

impl AppState {
    pub fn is_admin(&self, telegram_id: i64) -> bool {
        self.admin_ids.contains(&telegram_id)
    }
}
