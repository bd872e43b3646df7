//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::PodReservationRepository;

use super::pod_reservation_repository::SeaOrmPodReservationRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let taken = repos.pod_reservations().find_all_by_voyage("V-1").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    pod_reservations: SeaOrmPodReservationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            pod_reservations: SeaOrmPodReservationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn pod_reservations(&self) -> &dyn PodReservationRepository {
        &self.pod_reservations
    }
}
