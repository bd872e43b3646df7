pub mod catalog;
pub mod pod;
pub mod repositories;
pub mod reservation;
pub mod shuttle;
pub mod voyage;

// Re-export commonly used types
pub use catalog::{PackageType, PodType};
pub use pod::{Pod, PodStatus};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{PodRequest, PodReservation, PodReservationRepository, ReservationAllocator};
pub use shuttle::{LayoutFactory, ShuttleLayout, SpaceShuttleModel};
pub use voyage::{Passenger, Voyage};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
