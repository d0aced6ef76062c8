use crate::{
    basis::{Basis, IntoMonomialBasis},
    display::{self, Sign, DEFAULT_PRECISION},
    error::Result,
    value::Value,
    Polynomial,
};

/// Power basis, optionally shifted to a center.
///
/// The basis functions are powers of the offset from the center:
///
/// ```text
/// 1, (x - x₀), (x - x₀)², …, (x - x₀)ⁿ
/// ```
///
/// With the default center of zero this is the familiar `1, x, x², …` basis,
/// used by the node-interpolation methods. A nonzero center is what a Taylor
/// polynomial expanded around `x₀` is naturally expressed in.
///
/// The basis is **not normalized**, so the Vandermonde systems it produces
/// grow badly conditioned with the degree, especially on equidistant nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonomialBasis<T: Value = f64> {
    center: T,
}
impl<T: Value> MonomialBasis<T> {
    /// Creates a plain power basis, centered at zero.
    #[must_use]
    pub fn default() -> Self {
        Self { center: T::zero() }
    }

    /// Creates a power basis in `(x - center)`.
    #[must_use]
    pub fn centered(center: T) -> Self {
        Self { center }
    }

    /// The expansion point of the basis.
    #[must_use]
    pub fn center(&self) -> T {
        self.center
    }

    /// Creates a new power-basis polynomial centered at zero.
    ///
    /// # Errors
    /// Returns an error if no coefficients are given.
    ///
    /// # Example
    /// ```rust
    /// use expapprox::basis::MonomialBasis;
    /// let poly = MonomialBasis::new_polynomial(vec![1.0f64, 0.0, -0.5]).unwrap();
    /// assert_eq!(poly.y(2.0), -1.0);
    /// ```
    pub fn new_polynomial(coefficients: Vec<T>) -> Result<Polynomial<Self, T>> {
        Polynomial::from_basis(Self::default(), coefficients)
    }
}
impl<T: Value> Basis<T> for MonomialBasis<T> {
    #[inline(always)]
    fn normalize_x(&self, x: T) -> T {
        x - self.center
    }

    #[inline(always)]
    fn fill_matrix_row<R: nalgebra::Dim, C: nalgebra::Dim, RS: nalgebra::Dim, CS: nalgebra::Dim>(
        &self,
        start_index: usize,
        x: T,
        mut row: nalgebra::MatrixViewMut<T, R, C, RS, CS>,
    ) {
        for j in start_index..row.ncols() {
            row[j] = self.solve_function(j, x);
        }
    }

    #[inline(always)]
    fn solve_function(&self, j: usize, x: T) -> T {
        match j {
            0 => T::one(),
            1 => x,
            _ => Value::powi(x, i32::try_from(j).unwrap_or(i32::MAX)),
        }
    }
}

impl<T: Value> IntoMonomialBasis<T> for MonomialBasis<T> {
    /// Expands `Σ cₖ (x - x₀)ᵏ` into `Σ aⱼ xʲ` with the binomial theorem.
    fn as_monomial(&self, coefficients: &mut [T]) -> Result<()> {
        if self.center == T::zero() {
            return Ok(());
        }

        let neg_center = -self.center;
        let mut expanded = vec![T::zero(); coefficients.len()];
        for (k, &c) in coefficients.iter().enumerate() {
            // (x - x0)^k = Σ_j C(k, j) x^j (-x0)^(k-j)
            let mut binomial = T::one();
            for j in 0..=k {
                if j > 0 {
                    binomial = binomial * T::try_cast(k + 1 - j)? / T::try_cast(j)?;
                }
                let power = i32::try_from(k - j).map_err(|_| crate::error::Error::CastFailed)?;
                expanded[j] += c * binomial * Value::powi(neg_center, power);
            }
        }

        coefficients.copy_from_slice(&expanded);
        Ok(())
    }
}

impl<T: Value> display::PolynomialDisplay<T> for MonomialBasis<T> {
    fn format_term(&self, degree: i32, coef: T) -> Option<display::Term> {
        let sign = Sign::from_coef(coef);

        let variable = if self.center == T::zero() {
            "x".to_string()
        } else {
            let sign = Sign::from_coef(-self.center).char();
            let center = display::unicode::float(
                Value::abs(self.center),
                display::default_fixed_range(),
                DEFAULT_PRECISION,
            );
            format!("(x {sign} {center})")
        };

        let base = display::format_variable(&variable, None, degree);
        let coef = display::format_coefficient(coef, degree, DEFAULT_PRECISION)?;

        let body = format!("{coef}{base}");
        Some(display::Term::new(sign, body))
    }
}

/// A polynomial in the power basis, `y = aₙ(x - x₀)ⁿ + … + a₁(x - x₀) + a₀`.
///
/// # Type Parameters
/// - `T`: Numeric type (default `f64`).
pub type MonomialPolynomial<T = f64> = Polynomial<MonomialBasis<T>, T>;

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::test::basis_assertions::{assert_basis_functions_close, assert_basis_matrix_row};

    use super::*;

    #[test]
    fn test_monomial() {
        let basis = MonomialBasis::<f64>::default();

        assert_basis_matrix_row(&basis, 2.0, &[1.0, 2.0, 4.0, 8.0], f64::EPSILON);
        assert_basis_functions_close(&basis, 0.5, &[1.0, 0.5, 0.25, 0.125], f64::EPSILON);
        assert_basis_functions_close(&basis, -1.0, &[1.0, -1.0, 1.0, -1.0], f64::EPSILON);

        assert_eq!(basis.normalize_x(1.0), 1.0);
        assert_eq!(basis.k(3), 4);
        assert_eq!(basis.k(0), 1);
        assert_eq!(basis.degree(0), None);
        assert_eq!(basis.degree(4), Some(3));
    }

    #[test]
    fn test_centered() {
        let basis = MonomialBasis::centered(0.5f64);
        assert_eq!(basis.normalize_x(1.5), 1.0);
        assert_basis_functions_close(&basis, 2.5, &[1.0, 2.0, 4.0], f64::EPSILON);

        // 1 + 2(x - 0.5) + 3(x - 0.5)^2 = 3x^2 - x + 0.75
        let mut coefs = vec![1.0, 2.0, 3.0];
        basis.as_monomial(&mut coefs).unwrap();
        crate::assert_all_close!(coefs, [0.75, -1.0, 3.0], tol = 1e-12);

        let poly = Polynomial::from_basis(basis, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(poly.equation(), "y(x) = 3.00(x - 0.50)² + 2.00(x - 0.50) + 1.00");
    }

    #[test]
    fn test_plain_display() {
        let poly = MonomialBasis::new_polynomial(vec![1.0f64, -3.0, 0.0, 4.0]).unwrap();
        assert_eq!(poly.equation(), "y(x) = 4.00x³ - 3.00x + 1.00");
    }
}
