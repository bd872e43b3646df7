//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` - unified access to the per-aggregate repositories
//! - `DomainResult` - standard result type for domain operations

use super::reservation::PodReservationRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn seats(repos: &dyn RepositoryProvider) {
///     let taken = repos.pod_reservations().find_all_by_voyage("V-1").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn pod_reservations(&self) -> &dyn PodReservationRepository;
}
