use occuviz_chart::{build_employment_hierarchy, packing, FilterController, FilterState};
use occuviz_data::{Dataset, Metric, OccupationRecord};
use occuviz_scales::ColorAssigner;
use proptest::prelude::*;

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(
        (
            "[A-Z][a-z]{0,12}( [A-Z][a-z]{0,12})?",
            0u64..5_000_000,
            0.0f64..300.0,
            0.0f64..700_000.0,
        )
            .prop_map(|(name, employment, hourly, annual)| {
                OccupationRecord::new(name, employment, hourly, annual)
            }),
        0..30,
    )
    .prop_map(|records| Dataset::from_records(records).expect("generated records are valid"))
}

fn arb_metric() -> impl Strategy<Value = Metric> {
    prop_oneof![Just(Metric::HourlyWage), Just(Metric::AnnualWage)]
}

fn expected_max(dataset: &Dataset, metric: Metric) -> f64 {
    dataset
        .iter()
        .map(|r| match metric {
            Metric::HourlyWage => r.hourly_wage,
            Metric::AnnualWage => r.annual_wage,
        })
        .fold(0.0, f64::max)
}

proptest! {
    #[test]
    fn prop_hierarchy_sum_matches_dataset(dataset in arb_dataset()) {
        let root = build_employment_hierarchy(&dataset.employment_view());
        let leaf_sum: u64 = root.children.iter().filter_map(|c| c.value).sum();
        let record_sum: u64 = dataset.iter().map(|r| r.employment).sum();
        prop_assert_eq!(leaf_sum, record_sum);
        prop_assert_eq!(root.total(), record_sum);
        prop_assert_eq!(root.children.len(), dataset.len());
        prop_assert!(root.children.iter().all(|c| c.is_leaf()));
    }

    #[test]
    fn prop_packing_preserves_leaf_order(dataset in arb_dataset()) {
        let root = build_employment_hierarchy(&dataset.employment_view());
        let spec = packing(&root, &ColorAssigner::default());
        let names: Vec<_> = spec.data.children.iter().map(|c| c.name.clone()).collect();
        let expected: Vec<_> = dataset.iter().map(|r| r.occupation.clone()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn prop_bounds_reset_after_metric_change(
        dataset in arb_dataset(),
        metrics in prop::collection::vec(arb_metric(), 1..10),
        narrow in (0.0f64..1.0, 0.0f64..1.0),
    ) {
        let mut controller = FilterController::new(dataset.wage_view());
        for metric in metrics {
            // Narrowing between switches must not leak into the next metric
            let limit = controller.limit();
            let (a, b) = narrow;
            let _ = controller.narrow_range(a.min(b) * limit, a.max(b) * limit);

            let switched = controller.metric() != metric;
            controller.select_metric(metric);
            if switched {
                prop_assert_eq!(
                    controller.state(),
                    FilterState { metric, range_min: 0.0, range_max: expected_max(&dataset, metric) }
                );
            }
            let state = controller.state();
            prop_assert!(state.range_min >= 0.0);
            prop_assert!(state.range_max <= expected_max(&dataset, metric));
        }
    }
}
