use sch_basis::{from_json, to_json, BasisPreset, CompositeBasis, ContinuousAxis, DiscreteAxis};
use sch_core::SchError;

#[test]
fn basis_round_trip_json() {
    let basis = CompositeBasis::with_preset(
        BasisPreset::Cylindrical,
        vec![
            ContinuousAxis::linspace(0.0, 2.0, 3).unwrap(),
            ContinuousAxis::new(vec![0.1, 0.2]).unwrap(),
        ],
        vec![DiscreteAxis::range(-2, 2).unwrap()],
    )
    .unwrap();
    let json = to_json(&basis).expect("serialize");
    let decoded = from_json(&json).expect("deserialize");
    assert_eq!(decoded, basis);
}

#[test]
fn empty_axis_in_snapshot_is_rejected() {
    let json = r#"{
        "schema_version": {"major": 1, "minor": 0, "patch": 0},
        "preset": "custom",
        "boundary": "zero-edge",
        "continuous": [[]],
        "discrete": []
    }"#;
    let err = from_json(json).unwrap_err();
    assert!(matches!(err, SchError::Serde(_)));
}

#[test]
fn future_major_schema_is_rejected() {
    let json = r#"{
        "schema_version": {"major": 2, "minor": 0, "patch": 0},
        "preset": "custom",
        "boundary": "zero-edge",
        "continuous": [[1.0]],
        "discrete": []
    }"#;
    let err = from_json(json).unwrap_err();
    assert_eq!(err.info().code, "schema-version");
}

#[test]
fn accumulated_basis_round_trips() {
    let mut basis = CompositeBasis::with_preset(
        BasisPreset::Spherical,
        vec![
            ContinuousAxis::new(vec![0.5, 1.0]).unwrap(),
            ContinuousAxis::new(vec![0.0, 1.5]).unwrap(),
        ],
        vec![DiscreteAxis::range(0, 1).unwrap()],
    )
    .unwrap();
    basis += &CompositeBasis::from_continuous(vec![9.0]).unwrap();
    let decoded = from_json(&to_json(&basis).expect("serialize")).expect("deserialize");
    assert_eq!(decoded, basis);
    assert_eq!(decoded.preset(), BasisPreset::Custom);
}
