//! Polynomial basis functions
//!
//! This module defines the [`Basis`] trait, which abstracts the polynomial basis
//! an approximation's coefficients are expressed in, and the [`evaluate`] function
//! that turns a coefficient vector back into values.
//!
//! # Provided Bases
//! - [`MonomialBasis`]: Powers of `(x - center)`, i.e., 1, (x - x₀), (x - x₀)², …
//!   With the default center of zero this is the plain power basis. Used by the
//!   Taylor and node-interpolation methods.
//! - [`ChebyshevBasis`]: Chebyshev polynomials of the first kind on [-1, 1],
//!   evaluated as `cos(k·arccos(x))`. Used by the least-squares method.
//!
//! Also contains [`IntoMonomialBasis`], for bases which can be converted to the
//! plain power basis.

use nalgebra::MatrixViewMut;

use crate::{error::Result, value::Value};

pub(crate) mod monomial;
pub use monomial::MonomialBasis;

pub(crate) mod chebyshev;
pub use chebyshev::ChebyshevBasis;

/// A trait representing a polynomial basis.
///
/// Assumes a Vandermonde structure for the basis functions.
///
/// # Type Parameters
/// - `T`: The numeric type used for coefficients and evaluation (e.g., `f64`).
pub trait Basis<T: Value>: Sized + Clone + std::fmt::Debug + Send + Sync {
    /// Returns the number of basis functions needed for a polynomial of a given degree.
    #[inline(always)]
    fn k(&self, degree: usize) -> usize {
        degree + 1
    }

    /// Returns the polynomial degree corresponding to a given number of basis functions.
    ///
    /// Returns `None` if the number of functions does not correspond to a valid degree.
    #[inline(always)]
    fn degree(&self, k: usize) -> Option<usize> {
        if k > 0 {
            Some(k - 1)
        } else {
            None
        }
    }

    /// The closed domain the basis is defined on, if it has one.
    ///
    /// Evaluating outside this domain is allowed, but the result is unspecified
    /// (NaN for the Chebyshev basis).
    fn domain(&self) -> Option<(T, T)> {
        None
    }

    /// Populates a row of a Vandermonde matrix with this basis evaluated at `x`.
    ///
    /// All basis functions are written into `row` starting at column
    /// `start_index`.
    ///
    /// `x` will be normalized by the caller using the `normalize_x` method.
    fn fill_matrix_row<R: nalgebra::Dim, C: nalgebra::Dim, RS: nalgebra::Dim, CS: nalgebra::Dim>(
        &self,
        start_index: usize,
        x: T,
        mut row: MatrixViewMut<T, R, C, RS, CS>,
    ) {
        for j in start_index..row.ncols() {
            row[j] = self.solve_function(j, x);
        }
    }

    /// Maps an input value into the coordinate the basis functions expect.
    ///
    /// For a centered monomial basis this is `x - center`.
    fn normalize_x(&self, x: T) -> T;

    /// Evaluates the jth function of this basis at a (normalized) point.
    ///
    /// Formally, the basis provides functions φ₀, φ₁, …, φₙ, and solves `φⱼ(x)`
    fn solve_function(&self, j: usize, x: T) -> T;
}

/// A trait for converting polynomial representations into the plain power basis.
///
/// # Behavior
/// - The given `coefficients` slice is mutated in place to represent the same
///   polynomial expressed as `Σ aₖ xᵏ`.
/// - Implementations must overwrite the entire slice.
///
/// # Errors
/// Returns an error if the conversion is not supported for the given basis
/// or coefficients.
pub trait IntoMonomialBasis<T: Value>: Basis<T> {
    /// Converts this polynomial representation into power-basis form.
    ///
    /// # Errors
    /// Returns an error if the coefficients cannot be converted.
    fn as_monomial(&self, coefficients: &mut [T]) -> Result<()>;
}

/// Evaluates a polynomial given by `coefficients` in `basis` at each of `xs`.
///
/// ```math
/// y = Σ cₖ · φₖ(x)
/// ```
///
/// There are no checks on the domain: the Chebyshev basis yields NaN for `|x| > 1`.
///
/// # Example
/// ```
/// # use expapprox::basis::{evaluate, MonomialBasis};
/// let ys = evaluate(&MonomialBasis::default(), &[1.0, 2.0, 3.0], &[0.0, 2.0]);
/// assert_eq!(ys, vec![1.0, 17.0]);
/// ```
pub fn evaluate<B: Basis<T>, T: Value>(basis: &B, coefficients: &[T], xs: &[T]) -> Vec<T> {
    xs.iter()
        .map(|&x| {
            let x = basis.normalize_x(x);
            coefficients
                .iter()
                .enumerate()
                .fold(T::zero(), |y, (j, &c)| y + c * basis.solve_function(j, x))
        })
        .collect()
}
