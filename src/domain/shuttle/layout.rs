//! Query surface over a generated shuttle layout

use std::collections::{BTreeMap, HashSet};

use crate::domain::catalog::PackageType;
use crate::domain::pod::{Pod, PodStatus};
use crate::domain::reservation::PodReservation;

/// Deck number → pods on that deck, in generation order.
///
/// Never mutated after generation. Availability is never written back into
/// the layout; queries that take reservations return annotated copies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShuttleLayout {
    decks: BTreeMap<u32, Vec<Pod>>,
}

fn reserved_codes(reservations: &[PodReservation]) -> HashSet<&str> {
    reservations.iter().map(|r| r.pod_code.as_str()).collect()
}

impl ShuttleLayout {
    pub fn new(decks: BTreeMap<u32, Vec<Pod>>) -> Self {
        Self { decks }
    }

    /// All pods, decks ascending, pods in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Pod> {
        self.decks.values().flatten()
    }

    pub fn all_pods(&self) -> Vec<Pod> {
        self.iter().cloned().collect()
    }

    /// All pods, each marked unavailable when a reservation holds its code.
    pub fn all_pods_with_availability(&self, reservations: &[PodReservation]) -> Vec<Pod> {
        let reserved = reserved_codes(reservations);
        self.iter().map(|pod| annotate(pod, &reserved)).collect()
    }

    /// Pods on one deck; empty when the deck does not exist.
    pub fn pods_on_deck(&self, deck: u32) -> &[Pod] {
        self.decks.get(&deck).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn pods_on_deck_with_availability(
        &self,
        deck: u32,
        reservations: &[PodReservation],
    ) -> Vec<Pod> {
        let reserved = reserved_codes(reservations);
        self.pods_on_deck(deck)
            .iter()
            .map(|pod| annotate(pod, &reserved))
            .collect()
    }

    pub fn deck_numbers(&self) -> Vec<u32> {
        self.decks.keys().copied().collect()
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    pub fn pod_count(&self) -> usize {
        self.decks.values().map(Vec::len).sum()
    }

    pub fn find_pod(&self, pod_code: &str) -> Option<&Pod> {
        self.iter().find(|pod| pod.code == pod_code)
    }

    /// True iff the pod exists and no reservation holds its code.
    pub fn is_available(&self, pod_code: &str, reservations: &[PodReservation]) -> bool {
        self.find_pod(pod_code).is_some() && !reservations.iter().any(|r| r.pod_code == pod_code)
    }

    /// True iff the pod exists and its type is bookable with the package.
    pub fn is_eligible(&self, pod_code: &str, package_type: PackageType) -> bool {
        self.find_pod(pod_code)
            .is_some_and(|pod| pod.pod_type.is_bookable_with(package_type))
    }

    pub fn pods_for_package(&self, package_type: PackageType) -> Vec<Pod> {
        self.iter()
            .filter(|pod| pod.pod_type.is_bookable_with(package_type))
            .cloned()
            .collect()
    }

    /// First pod, decks ascending and pods in generation order, that is free
    /// and bookable with the package.
    pub fn first_available_for(
        &self,
        package_type: PackageType,
        reservations: &[PodReservation],
    ) -> Option<Pod> {
        let reserved = reserved_codes(reservations);
        self.iter()
            .find(|pod| {
                pod.pod_type.is_bookable_with(package_type)
                    && !reserved.contains(pod.code.as_str())
            })
            .cloned()
    }
}

fn annotate(pod: &Pod, reserved: &HashSet<&str>) -> Pod {
    if reserved.contains(pod.code.as_str()) {
        pod.with_status(PodStatus::Unavailable)
    } else {
        pod.with_status(PodStatus::Available)
    }
}
