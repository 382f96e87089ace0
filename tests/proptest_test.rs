//! Property-based tests for golfstat using proptest

use chrono::{TimeZone, Utc};
use golfstat::{
    aggregation::{Aggregator, Totals},
    scoring,
    types::{Category, LaunchMetrics, Lie, Shot},
};
use proptest::prelude::*;

// Strategies for generating test data

fn arb_lie() -> impl Strategy<Value = Lie> {
    prop_oneof![
        Just(Lie::Tee),
        Just(Lie::Fairway),
        Just(Lie::Rough),
        Just(Lie::DeepRough),
        Just(Lie::Sand),
        Just(Lie::Green),
        "[a-z]{3,10}".prop_map(Lie::Unrecognized),
    ]
}

prop_compose! {
    fn arb_shot()(
        secs in 1704067200i64..1767225600i64, // 2024-01-01 to 2026-01-01
        dated in any::<bool>(),
        starting_lie in arb_lie(),
        finishing_lie in arb_lie(),
        carry in 0.0f64..350.0,
        total in 0.0f64..400.0,
        finish_m in prop_oneof![Just(0.0f64), 0.1f64..300.0],
        gimme in any::<bool>(),
        hole in prop::option::of(1u32..19),
    ) -> Shot {
        Shot {
            timestamp: dated.then(|| Utc.timestamp_opt(secs, 0).unwrap()),
            starting_lie,
            finishing_lie,
            carry_yards: carry,
            total_yards: total,
            finish_to_pin_meters: finish_m,
            gimme,
            hole: hole.map(|h| h.to_string()),
            course: None,
            launch: LaunchMetrics::default(),
        }
    }
}

proptest! {
    #[test]
    fn prop_every_shot_gets_exactly_one_category(shot in arb_shot()) {
        let category = scoring::categorize(&shot);
        prop_assert!(Category::ALL.contains(&category));
    }

    #[test]
    fn prop_strokes_taken_bounds(shot in arb_shot()) {
        let strokes = scoring::strokes_taken(&shot);
        if shot.finish_to_pin_meters == 0.0 {
            prop_assert_eq!(strokes, 1.0);
        } else {
            prop_assert!(strokes > 1.0);
        }
    }

    #[test]
    fn prop_category_counts_partition_shots(shots in prop::collection::vec(arb_shot(), 0..50)) {
        let summaries = Aggregator::new().aggregate_categories(&shots);
        let total: usize = summaries.iter().map(|s| s.shot_count).sum();
        prop_assert_eq!(total, shots.len());
    }

    #[test]
    fn prop_category_summary_order_invariant(shots in prop::collection::vec(arb_shot(), 0..50)) {
        let aggregator = Aggregator::new();
        let forward = aggregator.aggregate_categories(&shots);

        let mut reversed = shots.clone();
        reversed.reverse();
        let backward = aggregator.aggregate_categories(&reversed);

        // Counts are exact; stroke sums only up to float reassociation
        for (f, b) in forward.iter().zip(&backward) {
            prop_assert_eq!(f.category, b.category);
            prop_assert_eq!(f.shot_count, b.shot_count);
            prop_assert!((f.strokes_gained - b.strokes_gained).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_totals_shot_count_matches(shots in prop::collection::vec(arb_shot(), 0..50)) {
        let summaries = Aggregator::new().aggregate_categories(&shots);
        let totals = Totals::from_categories(&summaries);
        prop_assert_eq!(totals.shot_count, shots.len());
    }

    #[test]
    fn prop_transition_rows_sum_to_hundred(shots in prop::collection::vec(arb_shot(), 1..50)) {
        let matrix = Aggregator::new().aggregate_transitions(&shots);
        for row in &matrix.rows {
            let sum: f64 = row.pct.iter().sum();
            prop_assert!((sum - 100.0).abs() < 1e-6, "row sums to {}", sum);
        }
    }

    #[test]
    fn prop_cumulative_volume_is_monotone(shots in prop::collection::vec(arb_shot(), 0..50)) {
        let volume = Aggregator::new().aggregate_volume(&shots);
        for window in volume.windows(2) {
            prop_assert!(window[0].date < window[1].date);
            prop_assert!(window[0].cumulative <= window[1].cumulative);
        }
        if let Some(last) = volume.last() {
            let dated = shots.iter().filter(|s| s.timestamp.is_some()).count();
            prop_assert_eq!(last.cumulative, dated);
        }
    }

    #[test]
    fn prop_proximity_bands_are_disjoint(carry in 50.0f64..1000.0) {
        let bands = golfstat::aggregation::approach_bands();
        let matching = bands.iter().filter(|b| b.contains(carry)).count();
        prop_assert_eq!(matching, 1);
    }

    #[test]
    fn prop_make_pct_in_range(shots in prop::collection::vec(arb_shot(), 0..50)) {
        for band in Aggregator::new().aggregate_putting(&shots) {
            prop_assert!(band.make_pct >= 0.0 && band.make_pct <= 100.0);
            prop_assert!(band.made <= band.attempts);
            prop_assert!(band.attempts > 0);
        }
    }
}
