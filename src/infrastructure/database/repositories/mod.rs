//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod pod_reservation_repository;
pub mod repository_provider;

pub use pod_reservation_repository::SeaOrmPodReservationRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
