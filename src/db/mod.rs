//! Database module
//!
//! Connection management, migrations, the storage traits and their
//! Postgres and in-memory implementations.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use sqlx::PgPool;

use crate::{config::DatabaseConfig, constants::MEMORY_DATABASE_URL};

pub use connection::*;
pub use memory::MemoryStore;
pub use repositories::{AssignmentRepository, UserRepository};
pub use store::{AssignmentStore, StoreError, StoreResult, UserStore};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Handles to both stores
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub assignments: Arc<dyn AssignmentStore>,
}

impl Stores {
    /// Both stores backed by one shared in-process store
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            assignments: store,
        }
    }

    /// Both stores backed by one Postgres pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            assignments: Arc::new(AssignmentRepository::new(pool)),
        }
    }
}

/// Open the stores selected by `DATABASE_URL`, running migrations for Postgres
pub async fn open_stores(config: &DatabaseConfig) -> anyhow::Result<Stores> {
    if config.url == MEMORY_DATABASE_URL {
        tracing::warn!("Using in-memory store, data will not survive a restart");
        return Ok(Stores::in_memory());
    }

    tracing::info!("Connecting to database...");
    let pool = create_pool(config).await?;
    test_connection(&pool).await?;

    tracing::info!("Running database migrations...");
    run_migrations(&pool).await?;

    Ok(Stores::postgres(pool))
}
