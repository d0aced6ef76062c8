//! Testing utilities for approximations.
//!
//! # Macros
//!
//! ### [`crate::assert_close`]
//! Asserts that two floating-point values are approximately equal.
//! - Uses the machine epsilon for the floating-point type as the tolerance by default.
//! - `tol = …` overrides the tolerance.
//! - `assert_eq!` equivalent for floats.
//!
//! ### [`crate::assert_all_close`]
//! Element-wise [`crate::assert_close`] over two slices of the same length.
//!
//! # Functions
//!
//! ### [`assert_interpolates`]
//! Asserts that an approximation reproduces its target at a set of nodes.
//! This is the defining property of the node-interpolation methods.
//! ```rust
//! # use expapprox::{method::{interpolate, NodeSet}, target::TargetFunction, test::assert_interpolates};
//! let (poly, nodes) = interpolate::<f64>(TargetFunction::Exp, 4, NodeSet::Chebyshev).unwrap();
//! assert_interpolates(&poly, TargetFunction::Exp, &nodes, 1e-9);
//! ```
use crate::{basis::Basis, display::PolynomialDisplay, target::TargetFunction, value::Value, Polynomial};

#[macro_use]
#[cfg(test)]
pub mod basis_assertions;


/// Asserts that `poly` matches `target` at every one of `nodes` within `tol`.
///
/// # Panics
/// Panics on the first node where `|f(x) - P(x)| > tol`, or if any value is not finite.
pub fn assert_interpolates<B, T>(poly: &Polynomial<B, T>, target: TargetFunction, nodes: &[T], tol: T)
where
    B: Basis<T> + PolynomialDisplay<T>,
    T: Value,
{
    for (i, &x) in nodes.iter().enumerate() {
        let expected = target.y(x);
        let actual = poly.y(x);
        let err = expected.abs_sub(actual);

        assert!(
            actual.is_finite_value() && err <= tol,
            "Node {i} (x = {x}): f(x) = {expected} but P(x) = {actual}; |error| = {err:e} > {tol:e}\n{}",
            poly.equation()
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_all_close, assert_close};

    #[test]
    fn test_assert_close_macro() {
        assert_close!(1.0 + 1e-16, 1.0, "Values should be close");
        assert_close!(1.0 + 1e-10, 1.0, tol = 1e-9);
        assert_close!(2.0, 2.0 + 1e-12, tol = 1e-9, "Index {}", 3);
    }

    #[test]
    #[should_panic(expected = "Values not close")]
    fn test_assert_close_fails() {
        assert_close!(1.0, 1.1, tol = 1e-3);
    }

    #[test]
    fn test_assert_all_close_macro() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0 + 1e-16, 2.0, 3.0];
        assert_all_close!(a, b, "Vectors must match");
        assert_all_close!(a, [1.0 + 1e-12, 2.0, 3.0], tol = 1e-9);
    }
}
