//! Deterministic pod layout generation
//!
//! The layout is never stored: it is regenerated from the shuttle model's
//! capacity whenever it is needed, so identical capacities must always yield
//! identical layouts.

use std::collections::BTreeMap;

use crate::domain::catalog::PodType;
use crate::domain::pod::code::format_pod_code;
use crate::domain::pod::Pod;

use super::layout::ShuttleLayout;

pub struct LayoutFactory;

impl LayoutFactory {
    /// Number of pods of `pod_type` for a shuttle of `max_capacity`,
    /// `round(max_capacity × ratio)` with halves rounded up.
    pub fn pods_for_type(max_capacity: u32, pod_type: PodType) -> u32 {
        (f64::from(max_capacity) * pod_type.distribution_ratio()).round() as u32
    }

    /// Per-type pod totals in generation order.
    pub fn pods_per_type(max_capacity: u32) -> Vec<(PodType, u32)> {
        PodType::ALL
            .into_iter()
            .map(|t| (t, Self::pods_for_type(max_capacity, t)))
            .collect()
    }

    /// Generate the full deck → pods layout for a shuttle capacity.
    ///
    /// Types are placed in [`PodType::ALL`] order, each filling new decks of at
    /// most `max_pods_per_deck` pods. The deck counter runs across all types,
    /// so the first enhanced deck follows the last standard one.
    pub fn generate_layout(max_capacity: u32) -> ShuttleLayout {
        let mut decks: BTreeMap<u32, Vec<Pod>> = BTreeMap::new();
        let mut deck_number = 1;

        for pod_type in PodType::ALL {
            let mut remaining = Self::pods_for_type(max_capacity, pod_type);

            while remaining > 0 {
                let on_deck = remaining.min(pod_type.max_pods_per_deck());
                decks.insert(deck_number, Self::pods_for_deck(pod_type, deck_number, on_deck));
                deck_number += 1;
                remaining -= on_deck;
            }
        }

        ShuttleLayout::new(decks)
    }

    /// Pods `1..=count` of one deck. A pod's row is `index / width + 1`, so
    /// the pod closing a full row already counts towards the next one; the
    /// column wraps on `(index - 1) % width`.
    ///
    /// Codes go through [`format_pod_code`], the unchecked half of
    /// [`make_pod_code`](crate::domain::pod::make_pod_code): deck and index
    /// are positive here by construction.
    fn pods_for_deck(pod_type: PodType, deck: u32, count: u32) -> Vec<Pod> {
        let width = pod_type.max_rows_per_deck();

        (1..=count)
            .map(|index| {
                let row = index / width + 1;
                let column = (index - 1) % width + 1;
                let code = format_pod_code(pod_type.code_prefix(), deck, index);
                Pod::new(code, pod_type, deck, row, column)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::domain::pod::{make_pod_code, PodStatus};

    fn deck_sizes(layout: &ShuttleLayout) -> Vec<(u32, PodType, usize)> {
        layout
            .deck_numbers()
            .into_iter()
            .map(|d| {
                let pods = layout.pods_on_deck(d);
                (d, pods[0].pod_type, pods.len())
            })
            .collect()
    }

    #[test]
    fn small_shuttle_scenario() {
        let layout = LayoutFactory::generate_layout(100);

        assert_eq!(
            deck_sizes(&layout),
            vec![
                (1, PodType::Standard, 30),
                (2, PodType::Standard, 30),
                (3, PodType::Standard, 10),
                (4, PodType::Enhanced, 20),
                (5, PodType::Enhanced, 7),
                (6, PodType::PrivateSuite, 3),
            ]
        );
        assert_eq!(layout.pod_count(), 100);
    }

    #[test]
    fn first_pods_of_each_type() {
        let layout = LayoutFactory::generate_layout(100);

        let first = &layout.pods_on_deck(1)[0];
        assert_eq!(first.code, "S100001");
        assert_eq!((first.row, first.column), (1, 1));

        assert_eq!(layout.pods_on_deck(4)[0].code, "E400001");
        assert_eq!(layout.pods_on_deck(6)[2].code, "P600003");
        assert!(layout.all_pods().iter().all(|p| p.status == PodStatus::Available));
    }

    #[test]
    fn rows_advance_on_the_closing_pod_of_each_row() {
        let layout = LayoutFactory::generate_layout(100);
        let deck = layout.pods_on_deck(1);

        let positions: Vec<_> = deck.iter().take(7).map(|p| (p.row, p.column)).collect();
        assert_eq!(
            positions,
            vec![(1, 1), (1, 2), (2, 3), (2, 1), (2, 2), (3, 3), (3, 1)]
        );
        let last = deck.last().unwrap();
        assert_eq!((last.code.as_str(), last.row, last.column), ("S100030", 11, 3));

        // private suites are one pod wide
        let suites = layout.pods_on_deck(6);
        assert!(suites.iter().all(|p| p.column == 1));
        let rows: Vec<_> = suites.iter().map(|p| p.row).collect();
        assert_eq!(rows, vec![2, 3, 4]);
    }

    #[test]
    fn every_pod_matches_its_index_on_the_deck() {
        let layout = LayoutFactory::generate_layout(100);
        for deck in layout.deck_numbers() {
            for (k, pod) in layout.pods_on_deck(deck).iter().enumerate() {
                let index = k as u32 + 1;
                let width = pod.pod_type.max_rows_per_deck();
                assert_eq!(pod.row, index / width + 1, "pod {}", pod.code);
                assert_eq!(pod.column, (index - 1) % width + 1, "pod {}", pod.code);
                assert_eq!(
                    pod.code,
                    make_pod_code(pod.pod_type.code_prefix(), deck, index).unwrap()
                );
            }
        }
    }

    #[test]
    fn zero_capacity_yields_empty_layout() {
        let layout = LayoutFactory::generate_layout(0);
        assert_eq!(layout.deck_count(), 0);
        assert!(layout.all_pods().is_empty());
    }

    #[test]
    fn rounding_table() {
        // (capacity, standard, enhanced, private suite)
        let cases = [
            (1, 1, 0, 0),
            (2, 1, 1, 0),
            (10, 7, 3, 0),
            (17, 12, 5, 1),
            (50, 35, 14, 2),
            (100, 70, 27, 3),
            (250, 175, 68, 8),
        ];
        for (capacity, standard, enhanced, suites) in cases {
            assert_eq!(
                LayoutFactory::pods_per_type(capacity),
                vec![
                    (PodType::Standard, standard),
                    (PodType::Enhanced, enhanced),
                    (PodType::PrivateSuite, suites),
                ],
                "capacity {capacity}"
            );
        }
    }

    proptest! {
        #[test]
        fn generation_is_deterministic(capacity in 0u32..2_000) {
            prop_assert_eq!(
                LayoutFactory::generate_layout(capacity),
                LayoutFactory::generate_layout(capacity)
            );
        }

        #[test]
        fn codes_are_unique(capacity in 0u32..2_000) {
            let pods = LayoutFactory::generate_layout(capacity).all_pods();
            let codes: HashSet<_> = pods.iter().map(|p| p.code.as_str()).collect();
            prop_assert_eq!(codes.len(), pods.len());
        }

        #[test]
        fn capacity_is_conserved(capacity in 0u32..2_000) {
            let pods = LayoutFactory::generate_layout(capacity).all_pods();
            for pod_type in PodType::ALL {
                let expected = LayoutFactory::pods_for_type(capacity, pod_type) as usize;
                let actual = pods.iter().filter(|p| p.pod_type == pod_type).count();
                prop_assert_eq!(actual, expected);
            }
            let diff = (pods.len() as i64 - i64::from(capacity)).abs();
            prop_assert!(diff <= 2, "{} pods for capacity {}", pods.len(), capacity);
        }

        #[test]
        fn decks_respect_type_bounds(capacity in 1u32..2_000) {
            let layout = LayoutFactory::generate_layout(capacity);
            let decks = layout.deck_numbers();
            prop_assert_eq!(decks.clone(), (1..=decks.len() as u32).collect::<Vec<_>>());

            for deck in decks {
                let pods = layout.pods_on_deck(deck);
                let pod_type = pods[0].pod_type;
                let width = pod_type.max_rows_per_deck();

                prop_assert!(pods.iter().all(|p| p.pod_type == pod_type && p.deck == deck));
                prop_assert!(pods.len() as u32 <= pod_type.max_pods_per_deck());
                prop_assert!(pods.iter().all(|p| (1..=width).contains(&p.column) && p.row >= 1));

                let n = pods.len() as u32;
                let last = &pods[pods.len() - 1];
                prop_assert_eq!(last.row, n / width + 1);
            }
        }
    }
}
