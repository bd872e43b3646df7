//! SeaORM implementation of PodReservationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};
use tracing::debug;

use crate::domain::reservation::{PodReservation, PodReservationRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::pod_reservation;

pub struct SeaOrmPodReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmPodReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: pod_reservation::Model) -> DomainResult<PodReservation> {
    PodReservation::reconstruct(m.id, m.pod_code, m.creation_date, m.passenger_id, m.voyage_id)
}

fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

/// Map a failed insert to the domain conflict it stands for.
fn insert_err(e: DbErr, r: &PodReservation) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("passenger") => {
            DomainError::PassengerAlreadySeated {
                passenger_id: r.passenger_id.clone(),
            }
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::PodAlreadyReserved {
            voyage_id: r.voyage_id.clone(),
            pod_code: r.pod_code.clone(),
        },
        _ => db_err(e),
    }
}

// ── PodReservationRepository impl ───────────────────────────────

#[async_trait]
impl PodReservationRepository for SeaOrmPodReservationRepository {
    async fn save(&self, r: PodReservation) -> DomainResult<PodReservation> {
        debug!(
            voyage_id = r.voyage_id.as_str(),
            pod_code = r.pod_code.as_str(),
            "Saving pod reservation"
        );

        let model = pod_reservation::ActiveModel {
            id: Set(r.id.clone()),
            pod_code: Set(r.pod_code.clone()),
            creation_date: Set(r.creation_date),
            passenger_id: Set(r.passenger_id.clone()),
            voyage_id: Set(r.voyage_id.clone()),
        };
        let saved = model.insert(&self.db).await.map_err(|e| insert_err(e, &r))?;
        model_to_domain(saved)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<PodReservation>> {
        pod_reservation::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn find_all_by_voyage(&self, voyage_id: &str) -> DomainResult<Vec<PodReservation>> {
        pod_reservation::Entity::find()
            .filter(pod_reservation::Column::VoyageId.eq(voyage_id))
            .order_by_asc(pod_reservation::Column::CreationDate)
            .order_by_asc(pod_reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn find_by_passenger(&self, passenger_id: &str) -> DomainResult<Option<PodReservation>> {
        pod_reservation::Entity::find()
            .filter(pod_reservation::Column::PassengerId.eq(passenger_id))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn delete_by_passenger(&self, passenger_id: &str) -> DomainResult<bool> {
        let result = pod_reservation::Entity::delete_many()
            .filter(pod_reservation::Column::PassengerId.eq(passenger_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::{init_database, DatabaseConfig};

    async fn repo() -> SeaOrmPodReservationRepository {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmPodReservationRepository::new(db)
    }

    fn reservation(pod: &str, passenger: &str, voyage: &str) -> PodReservation {
        PodReservation::create(pod, passenger, voyage).unwrap()
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let repo = repo().await;
        let r = reservation("S100001", "P-1", "V-1");
        repo.save(r.clone()).await.unwrap();

        let loaded = repo.find_by_id(&r.id).await.unwrap().unwrap();
        assert_eq!(loaded.pod_code, "S100001");
        assert_eq!(loaded.passenger_id, "P-1");
        assert_eq!(loaded.creation_date.timestamp(), r.creation_date.timestamp());

        assert!(repo.find_by_passenger("P-1").await.unwrap().is_some());
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unique_pod_per_voyage() {
        let repo = repo().await;
        repo.save(reservation("S100001", "P-1", "V-1")).await.unwrap();

        let err = repo
            .save(reservation("S100001", "P-2", "V-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PodAlreadyReserved { .. }), "{err}");

        repo.save(reservation("S100001", "P-3", "V-2")).await.unwrap();
    }

    #[tokio::test]
    async fn unique_passenger() {
        let repo = repo().await;
        repo.save(reservation("S100001", "P-1", "V-1")).await.unwrap();

        let err = repo
            .save(reservation("S100002", "P-1", "V-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PassengerAlreadySeated { .. }), "{err}");
    }

    #[tokio::test]
    async fn voyage_listing_and_delete() {
        let repo = repo().await;
        repo.save(reservation("S100001", "P-1", "V-1")).await.unwrap();
        repo.save(reservation("S100002", "P-2", "V-1")).await.unwrap();
        repo.save(reservation("S100001", "P-3", "V-2")).await.unwrap();

        assert_eq!(repo.find_all_by_voyage("V-1").await.unwrap().len(), 2);

        assert!(repo.delete_by_passenger("P-1").await.unwrap());
        assert!(!repo.delete_by_passenger("P-1").await.unwrap());

        let left = repo.find_all_by_voyage("V-1").await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].pod_code, "S100002");
    }
}
