use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use server::config::{AppConfig, DEV_SECRET_KEY};
use server::database;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let config = AppConfig::load().context("Failed to load config")?;
    if config.session.secret_key == DEV_SECRET_KEY {
        warn!("Using the development session secret; set SCOREBOARD__SESSION__SECRET_KEY");
    }

    let db = database::init_db(&config.database.url)
        .await
        .context("Failed to initialize database")?;
    database::ensure_indexes(&db)
        .await
        .context("Failed to create indexes")?;

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?;
    info!("Server running at http://{}", listener.local_addr()?);

    let app = server::build_router(AppState::new(db, config));
    axum::serve(listener, app).await?;

    Ok(())
}
