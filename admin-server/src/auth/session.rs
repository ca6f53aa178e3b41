use tower_sessions::Session;

pub const SESSION_TELEGRAM_ID_KEY: &str = "telegram_id";
pub const SESSION_DISPLAY_NAME_KEY: &str = "display_name";

/// Telegram id of the logged-in user, if any.
pub async fn get_telegram_id(session: &Session) -> Option<i64> {
    session
        .get::<i64>(SESSION_TELEGRAM_ID_KEY)
        .await
        .ok()
        .flatten()
}

pub async fn get_display_name(session: &Session) -> Option<String> {
    session
        .get::<String>(SESSION_DISPLAY_NAME_KEY)
        .await
        .ok()
        .flatten()
}

/// Write user identity into the session after a verified widget login.
pub async fn set_user(
    session: &Session,
    telegram_id: i64,
    display_name: &str,
) -> Result<(), tower_sessions::session::Error> {
    // new id on login so a pre-login cookie cannot be reused
    session.cycle_id().await?;
    session.insert(SESSION_TELEGRAM_ID_KEY, telegram_id).await?;
    session
        .insert(SESSION_DISPLAY_NAME_KEY, display_name.to_string())
        .await?;
    Ok(())
}

pub async fn clear(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
