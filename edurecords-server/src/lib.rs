//! edurecords-server: HTTP API over student education records
//!
//! CRUD over a single collection of records plus two aggregate reads:
//! a per-gender count and a best-score filter.

pub mod db;
pub mod http;
pub mod models;
pub mod service;
pub mod state;

use std::sync::Arc;

use db::{MemoryRecordStore, PgRecordStore, RecordStore};

pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;

/// Which record store backs the server
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// PostgreSQL at the given URL
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// In-process store; contents are lost on exit
    Memory,
}

/// Open the configured store, running migrations for Postgres.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn RecordStore>, ServerError> {
    match config {
        StoreConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = db::create_pool(database_url, *max_connections).await?;
            db::migrations::run(&pool).await?;
            Ok(Arc::new(PgRecordStore::new(pool)))
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory store - records are not persisted");
            Ok(Arc::new(MemoryRecordStore::new()))
        }
    }
}

/// Open the store and serve until shutdown.
pub async fn serve(store: StoreConfig, config: ServerConfig) -> Result<(), ServerError> {
    let store = open_store(&store).await?;
    let state = AppState::new(store, config.record_policy());
    run_server(state, config).await
}
