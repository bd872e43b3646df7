//! In-memory storage implementation

mod memory;

pub use memory::{InMemoryPodReservationRepository, InMemoryRepositoryProvider};
