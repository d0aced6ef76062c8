use nalgebra::{DMatrix, DVector};

use crate::{
    basis::{Basis, ChebyshevBasis},
    error::{Error, Result},
    method::NodeSet,
    target::TargetFunction,
    value::Value,
    ChebyshevPolynomial, Polynomial,
};

/// Number of Chebyshev-Gauss sample nodes used by [`chebyshev_least_squares`].
pub const DEFAULT_SAMPLES: usize = 1000;

/// Degree-`n` Chebyshev series of `target`, projected on [`DEFAULT_SAMPLES`] nodes.
///
/// See [`chebyshev_least_squares_with_samples`].
///
/// # Errors
/// See [`chebyshev_least_squares_with_samples`].
///
/// # Example
/// ```
/// # use expapprox::{method::chebyshev_least_squares, target::TargetFunction};
/// // The constant term is the mean of e^x under the Chebyshev weight, I₀(1)
/// let p = chebyshev_least_squares::<f64>(TargetFunction::Exp, 0).unwrap();
/// assert!((p.coefficients()[0] - 1.266_065_9).abs() < 1e-3);
/// ```
pub fn chebyshev_least_squares<T: Value>(
    target: TargetFunction,
    n: usize,
) -> Result<ChebyshevPolynomial<T>> {
    chebyshev_least_squares_with_samples(target, n, DEFAULT_SAMPLES)
}

/// Degree-`n` Chebyshev series of `target`, projected on `samples`
/// Chebyshev-Gauss nodes `xᵢ = cos(π(i + 0.5) / samples)`.
///
/// ```math
/// cₖ = (2 / N) Σᵢ f(xᵢ) Tₖ(xᵢ),   c₀ halved
/// ```
///
/// The discrete orthogonality of `Tₖ` on these nodes makes the projection the
/// least-squares fit on them, with no linear system to solve. For `n < samples`
/// the result matches the continuous Chebyshev series to within aliasing.
///
/// # Errors
/// Returns an error if `samples` is zero.
pub fn chebyshev_least_squares_with_samples<T: Value>(
    target: TargetFunction,
    n: usize,
    samples: usize,
) -> Result<ChebyshevPolynomial<T>> {
    if samples == 0 {
        return Err(Error::Algebra("at least one sample node is required"));
    }

    let basis = ChebyshevBasis;
    let k = Basis::<T>::k(&basis, n);
    let xs = NodeSet::Chebyshev.nodes::<T>(samples);

    // Rows are the basis evaluated at one node
    let mut design = DMatrix::<T>::zeros(samples, k);
    for (i, &x) in xs.iter().enumerate() {
        basis.fill_matrix_row(0, x, design.row_mut(i));
    }
    let ys = DVector::from_iterator(samples, xs.iter().map(|&x| target.y(x)));

    let scale = T::two() / T::from_positive_int(samples);
    let projection = design.transpose() * ys * scale;

    let mut coefficients: Vec<T> = projection.data.into();
    coefficients[0] /= T::two();

    log::debug!("Chebyshev projection of {target} on {samples} nodes, n = {n}: {coefficients:?}");
    Polynomial::from_basis(basis, coefficients)
}
