use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repository;

use error::Result;
use repository::health_profile::PgHealthProfileStore;

pub use models::HealthProfile;
pub use repository::HealthProfileStore;
pub use repository::memory::MemoryHealthProfileStore;

/// Schema migrations shipped with this crate.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Handle to the Postgres connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    /// Record store for health profiles backed by this pool.
    pub fn health_profiles(&self) -> PgHealthProfileStore {
        PgHealthProfileStore::new(self.pool.clone())
    }
}
