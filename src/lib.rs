//! # Nova Gate
//!
//! Pod layout and reservation engine for space shuttle voyages.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Catalog, pod codes, layout generation and reservation rules
//! - **application**: Reservation service with conflict retry
//! - **infrastructure**: SeaORM storage and the in-memory store
//! - **shared**: Error types and retry helpers
//! - **config** / **bootstrap**: TOML configuration and process wiring

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use application::PodReservationService;
pub use bootstrap::{init_tracing, AppContext, AppOptions};
