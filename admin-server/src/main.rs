use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use admin_server::{config, db, session_store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_server=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    info!(port = config.port, "admin-server starting");
    if config.telegram_bot_token.is_none() {
        info!("TELEGRAM_BOT_TOKEN not set; widget login is disabled");
    }
    if config.admin_telegram_ids.is_empty() {
        info!("ADMIN_TELEGRAM_IDS is empty; nobody can reach /api/admin");
    }

    let db = db::connect(&config.database_url).await?;

    // Sessions share the database pool and survive restarts.
    let store = session_store::SqliteSessionStore::new(db.clone());
    tokio::spawn(session_store::run_expired_session_cleanup(
        store.clone(),
        Duration::from_secs(3600),
    ));

    let state = admin_server::build_state(&config, db);

    // Default matches `dx build` debug output. Override with FRONTEND_DIST in prod.
    let frontend_dist = config::frontend_dist_from_env();
    info!(path = %frontend_dist, "serving frontend assets from");

    let app = admin_server::build_router(
        state,
        admin_server::session_layer(store, &config),
        &frontend_dist,
    );

    let addr = format!("0.0.0.0:{}", config.port);
    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
