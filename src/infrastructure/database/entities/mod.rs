//! Database entities module

pub mod pod_reservation;

pub use pod_reservation::Entity as PodReservation;
