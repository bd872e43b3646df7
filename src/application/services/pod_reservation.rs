//! Pod reservation service
//!
//! Runs "read the voyage's reservations → allocate → insert" and lets the
//! store's uniqueness rules arbitrate between concurrent writers. When an
//! auto-assigned pod is claimed by someone else between the read and the
//! insert, the whole cycle is retried with a fresh read.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::reservation::{PodRequest, PodReservation, ReservationAllocator};
use crate::domain::shuttle::ShuttleLayout;
use crate::domain::voyage::{Passenger, Voyage};
use crate::domain::{DomainResult, Pod, RepositoryProvider};
use crate::shared::errors::DomainError;
use crate::shared::utils::{retry_with_backoff, RetryConfig};

/// Service for pod reservation operations
pub struct PodReservationService {
    repos: Arc<dyn RepositoryProvider>,
    retry: RetryConfig,
}

impl PodReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Reserve a pod for a passenger joining a voyage.
    ///
    /// Explicit requests are never moved to another pod: if the pod is taken,
    /// the caller gets `PodAlreadyReserved`. Auto-assignment retries on that
    /// conflict and on transient storage errors.
    pub async fn reserve_pod_for_passenger(
        &self,
        voyage: &Voyage,
        passenger: &Passenger,
        request: PodRequest,
    ) -> DomainResult<PodReservation> {
        let layout = voyage.layout();
        let auto_assign = request.is_auto_assign();
        let path = if auto_assign { "auto" } else { "requested" };

        let result = retry_with_backoff(
            self.retry.clone(),
            || self.try_reserve(&layout, voyage, passenger, &request),
            |e: &DomainError| {
                e.is_transient()
                    || (auto_assign && matches!(e, DomainError::PodAlreadyReserved { .. }))
            },
            "reserve_pod",
        )
        .await;

        match &result {
            Ok(reservation) => {
                metrics::counter!("pod_reservations_total", "outcome" => "reserved", "path" => path)
                    .increment(1);
                info!(
                    voyage_id = voyage.id.as_str(),
                    passenger_id = passenger.id.as_str(),
                    pod_code = reservation.pod_code.as_str(),
                    path,
                    "Pod reserved"
                );
            }
            Err(e) => {
                metrics::counter!("pod_reservations_total", "outcome" => e.key(), "path" => path)
                    .increment(1);
                warn!(
                    voyage_id = voyage.id.as_str(),
                    passenger_id = passenger.id.as_str(),
                    error = %e,
                    "Failed to reserve a pod for a passenger"
                );
            }
        }

        result
    }

    async fn try_reserve(
        &self,
        layout: &ShuttleLayout,
        voyage: &Voyage,
        passenger: &Passenger,
        request: &PodRequest,
    ) -> DomainResult<PodReservation> {
        let existing = self
            .repos
            .pod_reservations()
            .find_all_by_voyage(&voyage.id)
            .await?;
        let reservation =
            ReservationAllocator::allocate_in(layout, voyage, passenger, request, &existing)?;
        self.repos.pod_reservations().save(reservation).await
    }

    pub async fn reservations_for_voyage(&self, voyage_id: &str) -> DomainResult<Vec<PodReservation>> {
        self.repos.pod_reservations().find_all_by_voyage(voyage_id).await
    }

    /// Every pod of the voyage's shuttle, annotated with availability.
    pub async fn pod_map(&self, voyage: &Voyage) -> DomainResult<Vec<Pod>> {
        let reservations = self.reservations_for_voyage(&voyage.id).await?;
        Ok(voyage.layout().all_pods_with_availability(&reservations))
    }

    /// One deck of the voyage's shuttle, annotated with availability.
    pub async fn deck_map(&self, voyage: &Voyage, deck: u32) -> DomainResult<Vec<Pod>> {
        let reservations = self.reservations_for_voyage(&voyage.id).await?;
        Ok(voyage
            .layout()
            .pods_on_deck_with_availability(deck, &reservations))
    }

    /// Drop the passenger's reservation, freeing the pod.
    pub async fn release_passenger(&self, passenger_id: &str) -> DomainResult<bool> {
        let released = self
            .repos
            .pod_reservations()
            .delete_by_passenger(passenger_id)
            .await?;
        if released {
            info!(passenger_id, "Pod reservation released");
        }
        Ok(released)
    }
}
