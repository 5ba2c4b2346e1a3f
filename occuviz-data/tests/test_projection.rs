use float_cmp::assert_approx_eq;
use occuviz_data::{
    to_employment_view, to_wage_view, Dataset, EmploymentView, Metric, OccupationRecord,
};
use proptest::prelude::*;

fn sample() -> Dataset {
    Dataset::from_records(vec![
        OccupationRecord::new("Nurse", 1000, 40.0, 83200.0),
        OccupationRecord::new("Pilot", 200, 80.0, 166400.0),
        OccupationRecord::new("Dentist", 150, 85.5, 177840.0),
    ])
    .unwrap()
}

#[test]
fn test_employment_view_preserves_order() {
    let view = sample().employment_view();
    assert_eq!(
        view,
        vec![
            EmploymentView {
                occupation: "Nurse".to_string(),
                employment: 1000
            },
            EmploymentView {
                occupation: "Pilot".to_string(),
                employment: 200
            },
            EmploymentView {
                occupation: "Dentist".to_string(),
                employment: 150
            },
        ]
    );
}

#[test]
fn test_wage_view_fields() {
    let view = sample().wage_view();
    assert_eq!(view.len(), 3);
    assert_eq!(view[2].occupation, "Dentist");
    assert_approx_eq!(f64, view[2].hourly_wage, 85.5);
    assert_approx_eq!(f64, view[2].metric_value(Metric::AnnualWage).unwrap(), 177840.0);
}

#[test]
fn test_empty_dataset_projects_to_empty() {
    let dataset = Dataset::default();
    assert!(dataset.employment_view().is_empty());
    assert!(dataset.wage_view().is_empty());
}

fn arb_records() -> impl Strategy<Value = Vec<OccupationRecord>> {
    prop::collection::vec(
        ("[A-Za-z ]{0,24}", 0u64..10_000_000, 0.0f64..500.0, 0.0f64..1_000_000.0).prop_map(
            |(name, employment, hourly, annual)| {
                OccupationRecord::new(name, employment, hourly, annual)
            },
        ),
        0..40,
    )
}

proptest! {
    #[test]
    fn prop_employment_projection_is_idempotent(records in arb_records()) {
        let once = to_employment_view(&records);
        let twice = to_employment_view(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_wage_projection_is_idempotent(records in arb_records()) {
        let once = to_wage_view(&records);
        let twice = to_wage_view(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_projection_keeps_every_record(records in arb_records()) {
        let dataset = Dataset::from_records(records.clone()).unwrap();
        let view = dataset.employment_view();
        prop_assert_eq!(view.len(), records.len());
        for (v, r) in view.iter().zip(&records) {
            prop_assert_eq!(&v.occupation, &r.occupation);
            prop_assert_eq!(v.employment, r.employment);
        }
    }
}
