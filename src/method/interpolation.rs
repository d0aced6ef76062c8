use nalgebra::{DMatrix, DVector};

use crate::{
    basis::{Basis, MonomialBasis},
    error::{Error, Result},
    target::TargetFunction,
    value::{Linspace, Value},
    MonomialPolynomial, Polynomial,
};

/// Condition number above which an interpolation system is reported as ill-conditioned.
///
/// Equidistant Vandermonde systems cross it from around degree 25.
pub const ILL_CONDITIONED: f64 = 1e12;

/// Where the interpolation nodes are placed on [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeSet {
    /// Roots of `T_count`: `xᵢ = cos(π(i + 0.5) / count)`.
    ///
    /// Clustered towards the endpoints, which keeps the interpolation error
    /// close to minimax.
    Chebyshev,

    /// `count` equally spaced points, endpoints included.
    Equidistant,
}
impl NodeSet {
    /// Generates `count` nodes.
    ///
    /// Chebyshev nodes are produced in decreasing order, equidistant nodes in
    /// increasing order.
    ///
    /// # Example
    /// ```
    /// # use expapprox::method::NodeSet;
    /// assert_eq!(NodeSet::Equidistant.nodes::<f64>(3), vec![-1.0, 0.0, 1.0]);
    ///
    /// let nodes = NodeSet::Chebyshev.nodes::<f64>(2);
    /// assert!((nodes[0] - 0.5f64.sqrt()).abs() < 1e-15);
    /// ```
    #[must_use]
    pub fn nodes<T: Value>(self, count: usize) -> Vec<T> {
        match self {
            Self::Chebyshev => {
                let half = T::one() / T::two();
                let count_t = T::from_positive_int(count);
                (0..count)
                    .map(|i| (T::pi() * (T::from_positive_int(i) + half) / count_t).cos())
                    .collect()
            }
            Self::Equidistant => Linspace::new(-T::one(), T::one(), count).collect(),
        }
    }
}

/// The 2-norm condition number of `matrix`, the ratio of its largest and
/// smallest singular values.
///
/// Infinite for a singular matrix.
pub fn condition_number<T: Value>(matrix: &DMatrix<T>) -> T {
    let singular_values = matrix.clone().svd(false, false).singular_values;
    let sigma_max = singular_values.max();
    let sigma_min = singular_values.min();

    if sigma_min <= T::zero() {
        T::infinity()
    } else {
        sigma_max / sigma_min
    }
}

/// Interpolates `target` with a degree-`n` power-basis polynomial through
/// `n + 1` nodes of the given set.
///
/// The Vandermonde system `V c = y`, with `V[i][j] = xᵢʲ`, is solved by LU
/// decomposition with partial pivoting. Ill-conditioning is reported but not
/// corrected: the condition number is logged at `debug`, and a warning is
/// logged when it exceeds [`ILL_CONDITIONED`].
///
/// Returns the polynomial together with the nodes it passes through.
///
/// # Errors
/// Returns [`Error::SingularMatrix`] if the system cannot be solved, or if the
/// solution is not finite.
///
/// # Example
/// ```
/// # use expapprox::{method::{interpolate, NodeSet}, target::TargetFunction};
/// let (p, nodes) = interpolate::<f64>(TargetFunction::ExpNeg, 2, NodeSet::Equidistant).unwrap();
/// assert_eq!(nodes, vec![-1.0, 0.0, 1.0]);
/// assert!((p.y(0.0) - 1.0).abs() < 1e-12);
/// ```
pub fn interpolate<T: Value>(
    target: TargetFunction,
    n: usize,
    nodes: NodeSet,
) -> Result<(MonomialPolynomial<T>, Vec<T>)> {
    let basis = MonomialBasis::<T>::default();
    let k = basis.k(n);
    let xs = nodes.nodes::<T>(k);

    let mut vandermonde = DMatrix::<T>::zeros(k, k);
    for (i, &x) in xs.iter().enumerate() {
        basis.fill_matrix_row(0, basis.normalize_x(x), vandermonde.row_mut(i));
    }
    let ys = DVector::from_iterator(k, xs.iter().map(|&x| target.y(x)));

    let condition = condition_number(&vandermonde);
    log::debug!("{nodes:?} interpolation of {target}, n = {n}: cond(V) = {condition:e}");
    if condition > T::try_cast(ILL_CONDITIONED)? {
        log::warn!(
            "{nodes:?} Vandermonde system for {target}, n = {n} is ill-conditioned (cond = {condition:e}); coefficients may be inaccurate"
        );
    }

    let solution = vandermonde
        .lu()
        .solve(&ys)
        .ok_or(Error::SingularMatrix { n: k })?;
    let coefficients: Vec<T> = solution.data.into();
    if coefficients.iter().any(|c| !c.is_finite_value()) {
        return Err(Error::SingularMatrix { n: k });
    }

    let polynomial = Polynomial::from_basis(basis, coefficients)?;
    Ok((polynomial, xs))
}

#[cfg(test)]
mod tests {
    use crate::{assert_all_close, assert_close, basis, test::assert_interpolates};

    use super::*;

    #[test]
    fn test_nodes() {
        let nodes = NodeSet::Chebyshev.nodes::<f64>(5);
        assert_eq!(nodes.len(), 5);
        assert_close!(nodes[2], 0.0, tol = 1e-15);
        assert!(nodes.windows(2).all(|w| w[0] > w[1]));
        assert!(nodes.iter().all(|x| x.abs() < 1.0));

        let nodes = NodeSet::Equidistant.nodes::<f64>(5);
        assert_all_close!(nodes, [-1.0, -0.5, 0.0, 0.5, 1.0], tol = 1e-15);

        assert_eq!(NodeSet::Equidistant.nodes::<f64>(1), vec![-1.0]);
        assert!(NodeSet::Chebyshev.nodes::<f64>(0).is_empty());
    }

    #[test]
    fn test_reproduces_nodes() {
        for target in TargetFunction::ALL {
            for set in [NodeSet::Chebyshev, NodeSet::Equidistant] {
                for n in 0..=10 {
                    let (p, nodes) = interpolate::<f64>(target, n, set).unwrap();
                    assert_eq!(nodes.len(), n + 1);
                    assert_interpolates(&p, target, &nodes, 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_evaluate_round_trip() {
        // Coefficients fed back through the evaluator reproduce the node samples
        for target in TargetFunction::ALL {
            for set in [NodeSet::Chebyshev, NodeSet::Equidistant] {
                for n in 0..=10 {
                    let (p, nodes) = interpolate::<f64>(target, n, set).unwrap();
                    let ys = basis::evaluate(&MonomialBasis::default(), p.coefficients(), &nodes);
                    let expected: Vec<f64> = target.solve(nodes.iter().copied()).into_iter().map(|(_, y)| y).collect();
                    assert_all_close!(ys, expected, tol = 1e-9, "{target} {set:?} n = {}", n);
                }
            }
        }
    }

    #[test]
    fn test_equidistant_exp_neg() {
        let (p, _) = interpolate::<f64>(TargetFunction::ExpNeg, 2, NodeSet::Equidistant).unwrap();
        assert_close!(p.y(-1.0), std::f64::consts::E, tol = 1e-9);
        assert_close!(p.y(0.0), 1.0, tol = 1e-9);
        assert_close!(p.y(1.0), 1.0 / std::f64::consts::E, tol = 1e-9);
    }

    #[test]
    fn test_degree_zero() {
        // A single Chebyshev node sits at cos(π/2) = 0
        let (p, nodes) = interpolate::<f64>(TargetFunction::Exp, 0, NodeSet::Chebyshev).unwrap();
        assert_close!(nodes[0], 0.0, tol = 1e-15);
        assert_close!(p.coefficients()[0], 1.0, tol = 1e-15);

        // A single equidistant node sits at the left end
        let (p, nodes) = interpolate::<f64>(TargetFunction::Exp, 0, NodeSet::Equidistant).unwrap();
        assert_eq!(nodes, vec![-1.0]);
        assert_close!(p.coefficients()[0], 1.0 / std::f64::consts::E, tol = 1e-15);

        let (p, _) = interpolate::<f64>(TargetFunction::ExpNeg, 0, NodeSet::Equidistant).unwrap();
        assert_close!(p.coefficients()[0], std::f64::consts::E, tol = 1e-15);
    }

    #[test]
    fn test_condition_number() {
        let identity = DMatrix::<f64>::identity(3, 3);
        assert_close!(condition_number(&identity), 1.0, tol = 1e-12);

        let singular = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert!(condition_number(&singular) > ILL_CONDITIONED);

        // Equidistant nodes condition worse than Chebyshev nodes
        let build = |set: NodeSet| {
            let xs = set.nodes::<f64>(11);
            DMatrix::from_fn(11, 11, |i, j| xs[i].powi(j as i32))
        };
        assert!(condition_number(&build(NodeSet::Equidistant)) > condition_number(&build(NodeSet::Chebyshev)));
    }
}
