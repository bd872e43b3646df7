//! In-memory storage implementation

use std::sync::Mutex;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::reservation::{PodReservation, PodReservationRepository};
use crate::domain::{DomainResult, RepositoryProvider};
use crate::shared::errors::DomainError;

/// In-memory pod reservation store for development and testing.
///
/// Enforces the same uniqueness rules as the `pod_reservations` table:
/// one reservation per `(voyage, pod)` and one per passenger.
pub struct InMemoryPodReservationRepository {
    reservations: DashMap<String, PodReservation>,
    pods: DashMap<(String, String), String>,
    passengers: DashMap<String, String>,
    // serializes the check-then-insert of `save` and the removals of `delete_by_passenger`
    write_lock: Mutex<()>,
}

impl InMemoryPodReservationRepository {
    pub fn new() -> Self {
        Self {
            reservations: DashMap::new(),
            pods: DashMap::new(),
            passengers: DashMap::new(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

impl Default for InMemoryPodReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::Storage("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl PodReservationRepository for InMemoryPodReservationRepository {
    async fn save(&self, reservation: PodReservation) -> DomainResult<PodReservation> {
        let _guard = self.write_lock.lock().map_err(poisoned)?;

        if self.passengers.contains_key(&reservation.passenger_id) {
            return Err(DomainError::PassengerAlreadySeated {
                passenger_id: reservation.passenger_id,
            });
        }

        let pod_key = (reservation.voyage_id.clone(), reservation.pod_code.clone());
        if self.pods.contains_key(&pod_key) {
            return Err(DomainError::PodAlreadyReserved {
                voyage_id: reservation.voyage_id,
                pod_code: reservation.pod_code,
            });
        }

        self.pods.insert(pod_key, reservation.id.clone());
        self.passengers
            .insert(reservation.passenger_id.clone(), reservation.id.clone());
        self.reservations
            .insert(reservation.id.clone(), reservation.clone());
        Ok(reservation)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<PodReservation>> {
        Ok(self.reservations.get(id).map(|r| r.clone()))
    }

    async fn find_all_by_voyage(&self, voyage_id: &str) -> DomainResult<Vec<PodReservation>> {
        let mut found: Vec<PodReservation> = self
            .reservations
            .iter()
            .filter(|e| e.value().voyage_id == voyage_id)
            .map(|e| e.value().clone())
            .collect();
        found.sort_by(|a, b| {
            a.creation_date
                .cmp(&b.creation_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(found)
    }

    async fn find_by_passenger(&self, passenger_id: &str) -> DomainResult<Option<PodReservation>> {
        let Some(id) = self.passengers.get(passenger_id).map(|e| e.value().clone()) else {
            return Ok(None);
        };
        self.find_by_id(&id).await
    }

    async fn delete_by_passenger(&self, passenger_id: &str) -> DomainResult<bool> {
        let _guard = self.write_lock.lock().map_err(poisoned)?;

        let Some((_, id)) = self.passengers.remove(passenger_id) else {
            return Ok(false);
        };
        if let Some((_, r)) = self.reservations.remove(&id) {
            self.pods.remove(&(r.voyage_id, r.pod_code));
        }
        Ok(true)
    }
}

/// Repository provider over in-memory stores.
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    pod_reservations: InMemoryPodReservationRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn pod_reservations(&self) -> &dyn PodReservationRepository {
        &self.pod_reservations
    }
}
