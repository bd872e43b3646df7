//! Pod reservation repository interface

use async_trait::async_trait;

use super::model::PodReservation;
use crate::domain::DomainResult;

#[async_trait]
pub trait PodReservationRepository: Send + Sync {
    /// Insert a new reservation.
    ///
    /// Fails with `PodAlreadyReserved` when the voyage already has a
    /// reservation for the pod code and with `PassengerAlreadySeated` when the
    /// passenger already holds one. Check and insert are atomic.
    async fn save(&self, reservation: PodReservation) -> DomainResult<PodReservation>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<PodReservation>>;

    /// All reservations of a voyage, oldest first
    async fn find_all_by_voyage(&self, voyage_id: &str) -> DomainResult<Vec<PodReservation>>;

    /// The passenger's reservation, if any
    async fn find_by_passenger(&self, passenger_id: &str) -> DomainResult<Option<PodReservation>>;

    /// Remove the passenger's reservation. Returns whether one existed.
    async fn delete_by_passenger(&self, passenger_id: &str) -> DomainResult<bool>;
}
