pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export service types
pub use logic::{
    PlayerService, RecordKind, ServiceError, ServiceResult, TeamService,
    DEFAULT_PROMOTION_COUNT, POOL_SIZE,
};

// Export all model types
pub use model::*;

// Export store types
pub use store::{MemoryStore, PostgresStore, Store};

use crate::config::{AppConfig, StoreBackend};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Initialise logging: `info` by default, sqlx kept at `warn`. `RUST_LOG` overrides.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,sqlx=warn"),
    )
    .try_init();
}

/// Connect the configured store and serve the API until the listener fails
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    match config.store.backend {
        StoreBackend::Postgres => {
            let database_url = config.database_url()?;
            log::info!("Connecting to PostgreSQL...");
            let store = PostgresStore::new(&database_url, config.max_connections()).await?;

            log::info!("Running database migrations...");
            store.migrate().await?;

            serve_store(Arc::new(store), &config).await
        }
        StoreBackend::Memory => {
            log::warn!("Using in-memory store; registrations are lost on exit");
            serve_store(Arc::new(MemoryStore::new()), &config).await
        }
    }
}

async fn serve_store<S: Store + 'static>(store: Arc<S>, config: &AppConfig) -> anyhow::Result<()> {
    if config.store.load_seed_data {
        log::info!("Loading seed data...");
        seed::load_seed_data(&*store).await?;
    }

    let static_dir = config.server.static_dir.as_deref().map(Path::new);
    let app = routes::create_app(store, static_dir);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Cricket championship server running on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
