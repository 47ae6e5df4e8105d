use sch_basis::{BasisPreset, CompositeBasis, ContinuousAxis, DiscreteAxis};
use sch_core::SchError;

#[test]
fn single_continuous_axis_is_returned_unchanged() {
    let basis = CompositeBasis::from_continuous(vec![1.5, 2.5]).expect("basis");
    assert_eq!(basis.dimensions(), 1);
    assert_eq!(basis.coords().expect("coords"), vec![1.5, 2.5]);
}

#[test]
fn single_discrete_axis_is_converted() {
    let basis = CompositeBasis::with_preset(
        BasisPreset::Cartesian,
        Vec::new(),
        vec![DiscreteAxis::new(vec![1, 2, 3]).unwrap()],
    )
    .expect("basis");
    assert_eq!(basis.coords().expect("coords"), vec![1.0, 2.0, 3.0]);
}

#[test]
fn two_axes_are_ambiguous() {
    let mixed = CompositeBasis::with_preset(
        BasisPreset::Custom,
        vec![ContinuousAxis::new(vec![0.0]).unwrap()],
        vec![DiscreteAxis::new(vec![1]).unwrap()],
    )
    .unwrap();
    let two_continuous = CompositeBasis::with_preset(
        BasisPreset::Custom,
        vec![
            ContinuousAxis::new(vec![0.0]).unwrap(),
            ContinuousAxis::new(vec![1.0]).unwrap(),
        ],
        Vec::new(),
    )
    .unwrap();
    for basis in [mixed, two_continuous] {
        let err = basis.coords().unwrap_err();
        assert!(matches!(err, SchError::State(_)));
        assert_eq!(err.info().code, "basis_coords");
    }
}

#[test]
fn empty_basis_has_no_coords() {
    let err = CompositeBasis::default().coords().unwrap_err();
    assert!(matches!(err, SchError::State(_)));
}

#[test]
fn empty_axes_are_rejected() {
    assert!(ContinuousAxis::new(Vec::new()).is_err());
    assert!(DiscreteAxis::new(Vec::new()).is_err());
    assert!(DiscreteAxis::range(3, 1).is_err());
    assert!(CompositeBasis::from_continuous(Vec::new()).is_err());
}

#[test]
fn axis_helpers_sample_evenly() {
    let axis = ContinuousAxis::linspace(-1.0, 1.0, 5).expect("linspace");
    assert_eq!(axis.coords(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
    assert_eq!(ContinuousAxis::linspace(2.0, 3.0, 1).unwrap().coords(), &[2.0]);
    assert!(ContinuousAxis::linspace(1.0, -1.0, 3).is_err());
    assert_eq!(DiscreteAxis::range(-1, 2).unwrap().coords(), &[-1, 0, 1, 2]);
}

#[test]
fn linspace_without_points_is_a_configuration_error() {
    let err = ContinuousAxis::linspace(0.0, 1.0, 0).unwrap_err();
    assert!(matches!(err, SchError::Config(_)));
    assert_eq!(err.info().code, "axis_linspace");
    assert_eq!(err.info().context.get("points").map(String::as_str), Some("0"));
}
