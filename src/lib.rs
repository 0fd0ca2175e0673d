pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::{calculate_discount, map_outcome, CarService, LogTracer, Tracer};

// Export all model types
pub use model::*;

// Export store types
pub use store::{CarStore, MemoryStore, PostgresStore, StoreError};

use std::sync::Arc;

use crate::config::{AppConfig, StoreBackend};

/// Router with every car endpoint wired to a service over `store`
pub fn build_app<S: CarStore + 'static>(store: Arc<S>) -> axum::Router {
    api::routes::create_router().with_state(Arc::new(CarService::new(store)))
}

/// Open the configured store, optionally seed it, and serve until shutdown
pub async fn run_server(config: &AppConfig) -> anyhow::Result<()> {
    match config.database.backend {
        StoreBackend::Memory => {
            log::info!("Using in-memory car store");
            serve_store(Arc::new(MemoryStore::new()), config).await
        }
        StoreBackend::Postgres => {
            log::info!("Connecting to PostgreSQL...");
            let store =
                PostgresStore::new(&config.database_url(), config.max_connections()).await?;

            log::info!("Running database migrations...");
            store.migrate().await?;

            serve_store(Arc::new(store), config).await
        }
    }
}

async fn serve_store<S: CarStore + 'static>(store: Arc<S>, config: &AppConfig) -> anyhow::Result<()> {
    if config.seed.enabled {
        log::info!("Loading seed data...");
        seed::load_seed_data(&*store).await?;
    }

    let bind_address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log::info!("Cars dealer API running on http://{}", bind_address);
    log::info!("API documentation available at http://{}/docs", bind_address);

    axum::serve(listener, build_app(store)).await?;

    Ok(())
}
