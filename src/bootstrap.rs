//! Process wiring: tracing setup and construction of the reservation service
//! on top of the configured database.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::application::PodReservationService;
use crate::config::AppConfig;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
use crate::shared::errors::AppError;

/// Initialise the tracing subscriber from the logging section.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Startup options
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub config: AppConfig,
    /// Run pending migrations after connecting
    pub auto_migrate: bool,
}

/// Connected application: the database handle and the services built on it.
pub struct AppContext {
    pub db: DatabaseConnection,
    pub reservations: PodReservationService,
}

impl AppContext {
    pub async fn start(options: AppOptions) -> Result<Self, AppError> {
        let db = init_database(&DatabaseConfig::from(&options.config.database)).await?;

        if options.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
        }

        let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let reservations = PodReservationService::new(repos)
            .with_retry(options.config.reservation.retry_config());

        Ok(Self { db, reservations })
    }
}
