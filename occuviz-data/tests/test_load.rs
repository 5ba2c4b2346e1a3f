use occuviz_data::{load, Dataset, LoadError, OccupationRecord};
use rstest::rstest;
use serde_json::{json, Value};

fn nurse() -> Value {
    json!({"occupation": "Nurse", "employment": 1000, "hourly_wage": 40, "annual_wage": 83200})
}

fn pilot() -> Value {
    json!({"occupation": "Pilot", "employment": 200, "hourly_wage": 80, "annual_wage": 166400})
}

#[test]
fn test_load_worked_example() {
    let source = serde_json::to_string(&json!([nurse(), pilot()])).unwrap();
    let dataset = load(source.as_bytes()).unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(
        dataset.records(),
        &[
            OccupationRecord::new("Nurse", 1000, 40.0, 83200.0),
            OccupationRecord::new("Pilot", 200, 80.0, 166400.0),
        ]
    );
}

#[test]
fn test_load_empty_array() {
    let dataset = Dataset::from_json_str("[]").unwrap();
    assert!(dataset.is_empty());
}

#[rstest]
#[case("occupation")]
#[case("employment")]
#[case("hourly_wage")]
#[case("annual_wage")]
fn test_missing_field_fails_entire_load(#[case] field: &str) {
    let mut broken = pilot();
    broken.as_object_mut().unwrap().remove(field);

    let err = Dataset::from_value(&json!([nurse(), broken, nurse()])).unwrap_err();
    match err {
        LoadError::MissingField { index, field: f } => {
            assert_eq!(index, 1);
            assert_eq!(f, field);
        }
        other => panic!("Expected MissingField, got {other:?}"),
    }
}

#[rstest]
#[case("employment", json!(-1))]
#[case("employment", json!("1000"))]
#[case("employment", json!(1.25))]
#[case("hourly_wage", json!(-0.5))]
#[case("hourly_wage", json!(true))]
#[case("annual_wage", json!([83200]))]
#[case("occupation", json!(42))]
fn test_malformed_field_reports_index(#[case] field: &str, #[case] value: Value) {
    let mut broken = nurse();
    broken[field] = value;

    let err = Dataset::from_value(&json!([pilot(), pilot(), broken])).unwrap_err();
    assert_eq!(err.offending_index(), Some(2));
    assert!(
        matches!(err, LoadError::InvalidField { field: f, .. } if f == field),
        "unexpected error {err:?}"
    );
}

#[rstest]
#[case("{\"occupation\": \"Nurse\"}")]
#[case("\"records\"")]
#[case("null")]
fn test_non_array_source_rejected(#[case] source: &str) {
    let err = Dataset::from_json_str(source).unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray { .. }));
    assert_eq!(err.offending_index(), None);
}

#[test]
fn test_non_object_element_rejected() {
    let err = Dataset::from_value(&json!([nurse(), "Pilot"])).unwrap_err();
    assert!(matches!(
        err,
        LoadError::NotAnObject {
            index: 1,
            found: "string"
        }
    ));
}

#[test]
fn test_malformed_json_rejected() {
    let err = Dataset::from_json_str("[{\"occupation\": ").unwrap_err();
    assert!(matches!(err, LoadError::MalformedJson(_)));
    assert_eq!(err.offending_index(), None);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Dataset::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_load_bundled_sample() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/occupations.json");
    let dataset = Dataset::from_path(path).unwrap();
    assert!(!dataset.is_empty());
    assert!(dataset.iter().all(|r| r.hourly_wage >= 0.0 && r.annual_wage >= 0.0));
}
