//! Application services

mod pod_reservation;

pub use pod_reservation::PodReservationService;
