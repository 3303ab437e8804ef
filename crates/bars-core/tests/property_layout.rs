// File: crates/bars-core/tests/property_layout.rs
// Purpose: Layout invariants over generated datasets.

use bars_core::{compute_geometry, ChartDataset, LayoutConfig, LayoutError, Series};
use proptest::prelude::*;

fn dataset_strategy() -> impl Strategy<Value = ChartDataset> {
    (0usize..8, 0usize..14).prop_flat_map(|(labels, series)| {
        prop::collection::vec(prop::collection::vec(0.0f64..5_000.0, labels), series).prop_map(
            move |rows| {
                let mut ds = ChartDataset::new((0..labels).map(|i| format!("L{i}")));
                for (i, values) in rows.into_iter().enumerate() {
                    ds.add_series(Series::new(format!("S{i}"), values));
                }
                ds
            },
        )
    })
}

/// Values spanning everyday magnitudes up to the edge of the finite range.
fn wide_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0f64..5_000.0,
        2 => 0.0f64..1e12,
        1 => 0.0f64..f64::MAX,
        1 => Just(f64::MAX),
    ]
}

fn wide_dataset_strategy() -> impl Strategy<Value = ChartDataset> {
    (1usize..6, 1usize..5).prop_flat_map(|(labels, series)| {
        prop::collection::vec(prop::collection::vec(wide_value(), labels), series).prop_map(
            move |rows| {
                let mut ds = ChartDataset::new((0..labels).map(|i| format!("L{i}")));
                for (i, values) in rows.into_iter().enumerate() {
                    ds.add_series(Series::new(format!("S{i}"), values));
                }
                ds
            },
        )
    })
}

proptest! {
    #[test]
    fn any_finite_values_lay_out_or_fail_typed(ds in wide_dataset_strategy()) {
        match compute_geometry(&ds, &LayoutConfig::default()) {
            Ok(g) => {
                prop_assert!(g.coordinates().iter().all(|v| v.is_finite()));
                prop_assert!(g.bars.iter().all(|b| b.width >= 0.0));
            }
            Err(LayoutError::TooManyTicks { .. }) => {
                prop_assert!(ds.max_value() > 1e6);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn bar_count_matches_value_count(ds in dataset_strategy()) {
        let g = compute_geometry(&ds, &LayoutConfig::default()).expect("layout");
        let values: usize = ds.series.iter().map(|s| s.values.len()).sum();
        prop_assert_eq!(g.bars.len(), values);
    }

    #[test]
    fn coordinates_are_finite_and_widths_non_negative(ds in dataset_strategy()) {
        let g = compute_geometry(&ds, &LayoutConfig::default()).expect("layout");
        prop_assert!(g.coordinates().iter().all(|v| v.is_finite()));
        prop_assert!(g.bars.iter().all(|b| b.width >= 0.0 && b.height > 0.0));
    }

    #[test]
    fn layout_is_idempotent(ds in dataset_strategy()) {
        let cfg = LayoutConfig::default();
        let a = compute_geometry(&ds, &cfg).expect("layout");
        let b = compute_geometry(&ds, &cfg).expect("layout");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn legend_follows_series_order(ds in dataset_strategy()) {
        let g = compute_geometry(&ds, &LayoutConfig::default()).expect("layout");
        prop_assert_eq!(g.legend.len(), ds.series.len());
        for pair in g.legend.windows(2) {
            prop_assert!(pair[1].y > pair[0].y);
            prop_assert!((pair[1].y - pair[0].y - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn axis_max_is_next_hundred_plus_margin(max in 0.0f64..100_000.0) {
        let ds = ChartDataset::new(["A"]).with_series(Series::new("s", vec![max]));
        let g = compute_geometry(&ds, &LayoutConfig::default()).expect("layout");
        prop_assert!(g.axis_max_value > max);
        prop_assert!(g.axis_max_value - max <= 200.0);
        prop_assert_eq!(g.axis_max_value % 100.0, 0.0);
        prop_assert_eq!(g.axis_max_value, (max / 100.0).ceil() * 100.0 + 100.0);
    }

    #[test]
    fn larger_values_give_wider_bars(a in 0.0f64..1_000.0, b in 0.0f64..1_000.0) {
        let ds = ChartDataset::new(["A", "B"]).with_series(Series::new("s", vec![a, b]));
        let g = compute_geometry(&ds, &LayoutConfig::default()).expect("layout");
        if a + 1.0 < b {
            prop_assert!(g.bars[0].width < g.bars[1].width);
        } else if a <= b {
            prop_assert!(g.bars[0].width <= g.bars[1].width);
        }
        // bars never overrun the value axis
        prop_assert!(g.bars.iter().all(|r| r.right() <= g.value_axis.x2 + 1e-9));
    }

    #[test]
    fn bars_stay_inside_their_band(ds in dataset_strategy()) {
        let g = compute_geometry(&ds, &LayoutConfig::default()).expect("layout");
        let labels = ds.labels.len();
        for (k, bar) in g.bars.iter().enumerate() {
            let label = k % labels.max(1);
            let tick_y = g.category_axis.ticks[label].tick_y;
            // the stack for a label is centred on its tick
            let half_stack = 30.0 * ds.series.len() as f64 / 2.0;
            prop_assert!(bar.y >= tick_y - half_stack - 1e-9);
            prop_assert!(bar.bottom() <= tick_y + half_stack + 1e-9);
        }
    }
}
