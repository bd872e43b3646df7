//! Pod reservation aggregate
//!
//! Contains the PodReservation entity, the allocation procedure, and the
//! repository interface.

pub mod allocator;
pub mod model;
pub mod repository;

pub use allocator::ReservationAllocator;
pub use model::{PodRequest, PodReservation};
pub use repository::PodReservationRepository;
