use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use booking_intake::config::AppConfig;
use booking_intake::db;
use booking_intake::routes;
use booking_intake::services::notifier::Notifier;
use booking_intake::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let db = db::init_db(&config.database_url)?;
    tracing::info!("using database at {}", db.path());

    let notifier = Notifier::from_config(&config)?;

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
        notifier,
    });

    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
