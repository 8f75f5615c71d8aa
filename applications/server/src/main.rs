/// Attic Server - playlist and radio serving layer
use attic_core::{Catalog, User};
use attic_server::{create_router, AppState, ServerConfig};
use attic_storage::Database;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attic_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load()?;
    tracing::info!("starting attic server");
    tracing::info!("host: {}", config.server.host);
    tracing::info!("port: {}", config.server.port);

    let db = Arc::new(Database::new(&config.storage.database_url).await?);
    tracing::info!("database connected");

    // seed the built-in shared stations once
    if db.stations(&User::system()).await?.is_empty() {
        attic_radio::create_stations(db.as_ref(), &config.music).await?;
    }

    let config = Arc::new(config);
    let app = create_router(AppState::new(db, Arc::clone(&config)));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
