//! Pod reservation entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

/// Binding of one passenger to one pod code on one voyage.
///
/// Authored by [`ReservationAllocator`](super::ReservationAllocator), never
/// mutated afterwards. Storage guarantees that a `(voyage_id, pod_code)` pair
/// and a `passenger_id` each appear in at most one reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodReservation {
    pub id: String,
    pub pod_code: String,
    pub creation_date: DateTime<Utc>,
    pub passenger_id: String,
    pub voyage_id: String,
}

impl PodReservation {
    /// New reservation with a fresh id, created now.
    pub fn create(
        pod_code: impl Into<String>,
        passenger_id: impl Into<String>,
        voyage_id: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::reconstruct(
            Uuid::new_v4().to_string(),
            pod_code,
            Utc::now(),
            passenger_id,
            voyage_id,
        )
    }

    /// Rebuild a reservation loaded from storage.
    pub fn reconstruct(
        id: impl Into<String>,
        pod_code: impl Into<String>,
        creation_date: DateTime<Utc>,
        passenger_id: impl Into<String>,
        voyage_id: impl Into<String>,
    ) -> DomainResult<Self> {
        let reservation = Self {
            id: id.into(),
            pod_code: pod_code.into(),
            creation_date,
            passenger_id: passenger_id.into(),
            voyage_id: voyage_id.into(),
        };

        let missing = [
            ("id", &reservation.id),
            ("pod code", &reservation.pod_code),
            ("passenger", &reservation.passenger_id),
            ("voyage", &reservation.voyage_id),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

        if let Some((field, _)) = missing {
            return Err(DomainError::Validation(format!(
                "The {field} of the pod reservation is missing"
            )));
        }

        Ok(reservation)
    }
}

/// How a passenger's pod is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PodRequest {
    /// The passenger asked for this pod code.
    Requested(String),
    /// First available pod the passenger's package allows.
    AutoAssign,
}

impl PodRequest {
    /// Blank or absent codes mean auto-assignment.
    pub fn from_optional(code: Option<String>) -> Self {
        match code {
            Some(code) if !code.trim().is_empty() => Self::Requested(code.trim().to_string()),
            _ => Self::AutoAssign,
        }
    }

    pub fn is_auto_assign(&self) -> bool {
        matches!(self, Self::AutoAssign)
    }
}
