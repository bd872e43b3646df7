pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::{SeaOrmPodReservationRepository, SeaOrmRepositoryProvider};

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./nova-gate.db?mode=rwc")
    pub url: String,
    /// Pool size cap; `None` keeps the driver default
    pub max_connections: Option<u32>,
}

impl DatabaseConfig {
    /// Private in-memory SQLite database. Pinned to one connection, since
    /// every SQLite connection to `:memory:` opens a separate database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options.sqlx_logging(false);
    if let Some(max) = config.max_connections {
        options
            .max_connections(max)
            .min_connections(max)
            .idle_timeout(Duration::from_secs(24 * 60 * 60));
    }

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}
