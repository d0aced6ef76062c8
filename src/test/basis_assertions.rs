//! A set of functions for testing polynomial bases.
use crate::{assert_close, basis::Basis, value::Value};

/// Asserts that a basis correctly fills a matrix row with expected values.
///
/// Also verifies that the `start_index` parameter is respected by filling the row
/// multiple times with increasing offsets.
///
/// # Panics
/// Panics if any filled matrix value deviates from the expected value.
pub fn assert_basis_matrix_row<B: Basis<T>, T: Value>(basis: &B, x: T, expected: &[T], tol: T) {
    let x = basis.normalize_x(x);
    for zeros in 0..=expected.len() {
        let mut matrix = nalgebra::DMatrix::<T>::zeros(1, expected.len());
        basis.fill_matrix_row(zeros, x, matrix.row_mut(0));

        // Make sure the first zeros elements are untouched
        for i in 0..zeros {
            assert_eq!(matrix[(0, i)], T::zero(), "Matrix col {i} should be zero");
        }

        basis.fill_matrix_row(0, x, matrix.row_mut(0));
        for i in 0..expected.len() {
            assert_close!(matrix[(0, i)], expected[i], tol = tol, "Matrix col {}", i);
        }
    }
}

/// Asserts that a basis evaluates to expected values at a given x.
///
/// # Panics
/// Panics if any basis function value deviates from the expected value by more than `tol`
pub fn assert_basis_functions_close<B: Basis<T>, T: Value>(
    basis: &B,
    x: T,
    expected: &[T],
    tol: T,
) {
    let x = basis.normalize_x(x);
    let actual: Vec<T> = (0..expected.len()).map(|i| basis.solve_function(i, x)).collect();

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        if a.abs_sub(e) > tol {
            eprintln!("Expected ∑{expected:?}");
            eprintln!("Got      ∑{actual:?}");
            panic!("Basis function {i} differs: {a:?} != {e:?} (tol {tol:?})");
        }
    }
}
