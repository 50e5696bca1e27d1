//! Round-trip properties of the transform operators

use polyburst_core::Matrix;
use polyburst_core::transform::{rotation, scaling, translation};
use proptest::prelude::*;
use std::f64::consts::FRAC_PI_2;

const EPSILON: f64 = 1e-6;

fn point_set() -> impl Strategy<Value = Matrix> {
    prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..40).prop_map(|pairs| {
        let xs: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();
        Matrix::from_rows(&[xs.as_slice(), ys.as_slice()]).unwrap()
    })
}

proptest! {
    #[test]
    fn rotation_then_inverse_is_identity(a in point_set(), theta in -10.0f64..10.0) {
        let there = &rotation(theta) * &a;
        let back = &rotation(-theta) * &there;
        prop_assert!(back.approx_eq(&a, EPSILON));
    }

    #[test]
    fn scaling_then_reciprocal_is_identity(a in point_set(), c in 0.01f64..100.0) {
        let there = &scaling(c) * &a;
        let back = &scaling(1.0 / c) * &there;
        prop_assert!(back.approx_eq(&a, EPSILON));
    }

    #[test]
    fn quarter_turn_swaps_axes(a in point_set()) {
        let rotated = &rotation(FRAC_PI_2) * &a;
        for j in 0..a.cols() {
            prop_assert!((rotated[(0, j)] + a[(1, j)]).abs() < EPSILON);
            prop_assert!((rotated[(1, j)] - a[(0, j)]).abs() < EPSILON);
        }
    }

    #[test]
    fn translation_adds_shift(a in point_set(), dx in -500.0f64..500.0, dy in -500.0f64..500.0) {
        let moved = &translation(dx, dy, a.cols()) + &a;
        for j in 0..a.cols() {
            prop_assert!((moved[(0, j)] - a[(0, j)] - dx).abs() < EPSILON);
            prop_assert!((moved[(1, j)] - a[(1, j)] - dy).abs() < EPSILON);
        }
    }

    #[test]
    fn rotation_preserves_distance_to_origin(a in point_set(), theta in -10.0f64..10.0) {
        let rotated = &rotation(theta) * &a;
        for (before, after) in a.columns().zip(rotated.columns()) {
            prop_assert!((before.length() - after.length()).abs() < EPSILON);
        }
    }
}

#[test]
fn test_incompatible_multiply_is_dimension_error() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(2, 3);
    let err = a.multiply(&b).unwrap_err();
    assert!(err.to_string().starts_with("Dimension error"));
}

#[test]
fn test_incompatible_add_is_dimension_error() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(3, 2);
    assert!(a.add(&b).is_err());
}
