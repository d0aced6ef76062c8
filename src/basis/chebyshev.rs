use crate::{
    basis::{Basis, IntoMonomialBasis},
    display::{self, Sign, DEFAULT_PRECISION},
    error::Result,
    value::Value,
    Polynomial,
};

/// Chebyshev basis of the first kind on [-1, 1].
///
/// The basis functions are evaluated through the trigonometric definition
///
/// ```text
/// Tₖ(x) = cos(k · arccos(x))
/// ```
///
/// rather than the three-term recurrence. The two agree on [-1, 1]; outside it,
/// `arccos` has no real value and the evaluation yields NaN instead of
/// extrapolating. Callers must keep inputs within the interval, or use
/// [`Polynomial::solve_checked`] to get an error instead.
///
/// # Why Chebyshev?
/// - The basis is orthogonal under the Chebyshev weight, so series coefficients
///   can be computed by projection, without solving a linear system.
/// - Truncated Chebyshev series are near-best uniform approximations; their
///   error equioscillates across the interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChebyshevBasis;
impl ChebyshevBasis {
    /// Creates a new Chebyshev polynomial with the given coefficients.
    ///
    /// # Errors
    /// Returns an error if no coefficients are given.
    ///
    /// # Example
    /// ```rust
    /// use expapprox::basis::ChebyshevBasis;
    /// let poly = ChebyshevBasis::new_polynomial(vec![1.0f64, 0.0, -0.5]).unwrap();
    /// assert!((poly.y(0.0) - 1.5).abs() < 1e-15);
    /// ```
    pub fn new_polynomial<T: Value>(coefficients: Vec<T>) -> Result<Polynomial<Self, T>> {
        Polynomial::from_basis(Self, coefficients)
    }
}
impl<T: Value> Basis<T> for ChebyshevBasis {
    fn domain(&self) -> Option<(T, T)> {
        Some((-T::one(), T::one()))
    }

    #[inline(always)]
    fn normalize_x(&self, x: T) -> T {
        x
    }

    #[inline(always)]
    fn solve_function(&self, j: usize, x: T) -> T {
        (T::from_positive_int(j) * x.acos()).cos()
    }
}

impl<T: Value> IntoMonomialBasis<T> for ChebyshevBasis {
    fn as_monomial(&self, coefficients: &mut [T]) -> Result<()> {
        if coefficients.is_empty() {
            return Ok(());
        }
        let n = coefficients.len() - 1;

        let mut monomial = vec![T::zero(); n + 1];
        let mut tkm1 = vec![T::one()]; // T0 = 1
        let mut tk = vec![T::zero(), T::one()]; // T1 = x

        monomial[0] = coefficients[0];
        if n >= 1 {
            monomial[1] = coefficients[1];
        }

        for &c in coefficients.iter().skip(2) {
            // Tk+1 = 2x*Tk - T_{k-1}
            let mut tk1 = vec![T::zero(); tk.len() + 1];
            for (i, &coef) in tk.iter().enumerate() {
                tk1[i + 1] += coef * T::two();
            }
            for (i, &coef) in tkm1.iter().enumerate() {
                tk1[i] -= coef;
            }

            for (i, &coef) in tk1.iter().enumerate() {
                monomial[i] += c * coef;
            }

            tkm1 = tk;
            tk = tk1;
        }

        coefficients.copy_from_slice(&monomial);
        Ok(())
    }
}

impl<T: Value> display::PolynomialDisplay<T> for ChebyshevBasis {
    fn format_term(&self, degree: i32, coef: T) -> Option<display::Term> {
        let sign = Sign::from_coef(coef);

        let rank = display::unicode::subscript(&degree.to_string());
        let func = if degree > 0 {
            format!("T{rank}(x)")
        } else {
            String::new()
        };
        let coef = display::format_coefficient(coef, degree, DEFAULT_PRECISION)?;

        let glue = if coef.is_empty() || func.is_empty() {
            ""
        } else {
            "·"
        };

        let body = format!("{coef}{glue}{func}");
        Some(display::Term::new(sign, body))
    }
}

/// A polynomial expressed as a truncated Chebyshev series, `y = Σ cₖ Tₖ(x)`.
pub type ChebyshevPolynomial<T = f64> = Polynomial<ChebyshevBasis, T>;
