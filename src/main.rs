use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_server::{create_pool, router, AppState, Config, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Portfolio Server...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Open the database and prepare it for first use
    let pool = create_pool(&config.database_path).await?;
    let store = Store::new(pool);
    store.init_schema().await?;
    store.seed_defaults().await?;

    // The upload directory must exist before the first upload lands
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let state = AppState::new(store, config.clone());
    let app = router(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
