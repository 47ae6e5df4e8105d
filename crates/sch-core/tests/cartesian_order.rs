use proptest::prelude::*;
use sch_core::{
    cartesian_len, cartesian_rows, cartesian_sums, checked_cartesian_len, CartesianIndices, SchError,
};

#[test]
fn last_axis_varies_fastest() {
    let arrays = vec![vec![1, 2], vec![10, 20]];
    let rows: Vec<Vec<i32>> = cartesian_rows(&arrays).collect();
    assert_eq!(rows, vec![vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20]]);
}

#[test]
fn indices_for_uneven_lengths() {
    let indices: Vec<Vec<usize>> = CartesianIndices::new(vec![2, 3]).collect();
    assert_eq!(
        indices,
        vec![
            vec![0, 0],
            vec![0, 1],
            vec![0, 2],
            vec![1, 0],
            vec![1, 1],
            vec![1, 2],
        ]
    );
}

#[test]
fn empty_axis_produces_nothing() {
    assert_eq!(CartesianIndices::new(vec![3, 0, 2]).count(), 0);
    let arrays: Vec<Vec<f64>> = vec![vec![1.0, 2.0], Vec::new()];
    assert!(cartesian_sums(&arrays).unwrap().is_empty());
}

#[test]
fn no_axes_produces_nothing() {
    assert_eq!(CartesianIndices::new(Vec::new()).count(), 0);
    assert_eq!(cartesian_len(&[]), Some(0));
    assert!(cartesian_sums(&[]).unwrap().is_empty());
}

#[test]
fn single_axis_is_identity() {
    let arrays = vec![vec![0.5, -1.5, 2.0]];
    assert_eq!(cartesian_sums(&arrays).unwrap(), vec![0.5, -1.5, 2.0]);
}

#[test]
fn sums_follow_enumeration_order() {
    let arrays = vec![vec![1.0, 2.0], vec![10.0, 20.0]];
    assert_eq!(cartesian_sums(&arrays).unwrap(), vec![11.0, 21.0, 12.0, 22.0]);
}

#[test]
fn restart_replays_the_sequence() {
    let mut walk = CartesianIndices::new(vec![2, 2]);
    let first: Vec<_> = walk.by_ref().take(3).collect();
    let replay: Vec<_> = walk.restart().take(3).collect();
    assert_eq!(first, replay);
    assert_eq!(walk.size_hint(), (1, Some(1)));
    assert_eq!(walk.next(), Some(vec![1, 1]));
    assert_eq!(walk.next(), None);
    assert_eq!(walk.next(), None);
}

#[test]
fn overflowing_product_is_lazy_and_unbounded() {
    let mut walk = CartesianIndices::new(vec![2usize; 64]);
    assert_eq!(walk.total(), None);
    assert_eq!(walk.size_hint(), (usize::MAX, None));
    assert_eq!(walk.next(), Some(vec![0; 64]));
    let mut second = vec![0; 64];
    second[63] = 1;
    assert_eq!(walk.next(), Some(second));
}

#[test]
fn overflowing_length_is_reported() {
    assert_eq!(cartesian_len(&[usize::MAX, 2]), None);
    assert_eq!(cartesian_len(&[usize::MAX, 1]), Some(usize::MAX));
    assert_eq!(cartesian_len(&[usize::MAX, 2, 0]), Some(0));
    let err = checked_cartesian_len(&[usize::MAX, 2]).unwrap_err();
    assert!(matches!(err, SchError::State(_)));
    assert_eq!(err.info().code, "cartesian_overflow");
}

proptest! {
    #[test]
    fn length_matches_product(lengths in proptest::collection::vec(0usize..5, 0..4)) {
        let walk = CartesianIndices::new(lengths.clone());
        let expected = cartesian_len(&lengths).unwrap();
        prop_assert_eq!(walk.size_hint(), (expected, Some(expected)));
        prop_assert_eq!(walk.count(), expected);
    }

    #[test]
    fn tuples_are_strictly_increasing(lengths in proptest::collection::vec(1usize..4, 1..4)) {
        let tuples: Vec<Vec<usize>> = CartesianIndices::new(lengths.clone()).collect();
        for pair in tuples.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for tuple in &tuples {
            for (index, len) in tuple.iter().zip(&lengths) {
                prop_assert!(index < len);
            }
        }
    }
}
