use crate::{
    basis::{self, Basis, IntoMonomialBasis},
    display::PolynomialDisplay,
    error::{Error, Result},
    value::Value,
    MonomialPolynomial,
};

/// A polynomial function in a given basis.
///
/// Holds exactly [`Basis::k`]`(degree)` coefficients; the `j`th coefficient
/// multiplies the `j`th basis function. Polynomials are immutable once built:
/// each approximation method produces a fresh one per call.
///
/// # Type Parameters
/// - `B`: The polynomial basis (e.g., [`crate::basis::MonomialBasis`], [`crate::basis::ChebyshevBasis`]).
/// - `T`: Numeric type for the coefficients, default is `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<B, T: Value = f64>
where
    B: Basis<T>,
    B: PolynomialDisplay<T>,
{
    degree: usize,
    basis: B,
    coefficients: Vec<T>,
}
impl<B, T: Value> Polynomial<B, T>
where
    B: Basis<T>,
    B: PolynomialDisplay<T>,
{
    /// Creates a new polynomial from a basis and coefficients, inferring the degree.
    ///
    /// # Errors
    /// Returns an error if the number of coefficients does not correspond to a valid degree for the given basis.
    pub fn from_basis(basis: B, coefficients: Vec<T>) -> Result<Self> {
        let degree = basis
            .degree(coefficients.len())
            .ok_or(Error::InvalidNumberOfParameters(coefficients.len()))?;
        Ok(Self {
            degree,
            basis,
            coefficients,
        })
    }

    /// Decomposes the polynomial into its basis, coefficients, and degree.
    pub fn into_inner(self) -> (B, Vec<T>, usize) {
        (self.basis, self.coefficients, self.degree)
    }

    /// Returns a reference to the polynomial's basis.
    pub fn basis(&self) -> &B {
        &self.basis
    }

    /// Returns the polynomial's coefficients, one per basis function.
    ///
    /// For example in a power-basis expression `y(x) = 2x^2 - 3x + 1`;
    /// coefficients = [1.0, -3.0, 2.0]
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Evaluates the polynomial at a given x-value.
    ///
    /// ```math
    /// y(x) = Σ (c_j * B_j(x))
    /// ```
    ///
    /// No domain checks are made; see [`Polynomial::solve_checked`].
    ///
    /// # Example
    /// ```
    /// # use expapprox::basis::MonomialBasis;
    /// let poly = MonomialBasis::new_polynomial(vec![1.0f64, 2.0, 3.0]).unwrap(); // 1 + 2x + 3x^2
    /// assert_eq!(poly.y(2.0), 17.0);
    /// ```
    pub fn y(&self, x: T) -> T {
        let x = self.basis.normalize_x(x);
        self.coefficients
            .iter()
            .enumerate()
            .fold(T::zero(), |y, (j, &c)| y + c * self.basis.solve_function(j, x))
    }

    /// Evaluates the polynomial at multiple x-values, returning `(x, y)` pairs.
    pub fn solve(&self, x: impl IntoIterator<Item = T>) -> Vec<(T, T)> {
        x.into_iter().map(|x| (x, self.y(x))).collect()
    }

    /// Evaluates the polynomial at each of `xs`, returning only the y-values.
    ///
    /// Equivalent to [`crate::basis::evaluate`] with this polynomial's basis.
    pub fn y_values(&self, xs: &[T]) -> Vec<T> {
        basis::evaluate(&self.basis, &self.coefficients, xs)
    }

    /// Evaluates the polynomial at multiple x-values, rejecting any x outside
    /// the basis domain.
    ///
    /// # Errors
    /// Returns [`Error::DataRange`] for the first x outside [`Basis::domain`].
    pub fn solve_checked(&self, x: impl IntoIterator<Item = T>) -> Result<Vec<(T, T)>> {
        let domain = self.basis.domain();
        x.into_iter()
            .map(|x| match domain {
                Some((min, max)) if !(min <= x && x <= max) => Err(Error::DataRange(
                    x.to_string(),
                    min.to_string(),
                    max.to_string(),
                )),
                _ => Ok((x, self.y(x))),
            })
            .collect()
    }

    /// Converts this polynomial into the plain power basis, `Σ aₖ xᵏ`.
    ///
    /// # Errors
    /// Returns an error if the basis conversion fails.
    pub fn as_monomial(&self) -> Result<MonomialPolynomial<T>>
    where
        B: IntoMonomialBasis<T>,
    {
        let mut coefficients = self.coefficients.clone();
        self.basis.as_monomial(&mut coefficients)?;
        MonomialPolynomial::from_basis(crate::basis::MonomialBasis::default(), coefficients)
    }

    /// Returns a human-readable string of the polynomial equation.
    ///
    /// # Example
    /// ```
    /// # use expapprox::basis::MonomialBasis;
    /// let poly = MonomialBasis::new_polynomial(vec![1.0f64, 2.0, 3.0]).unwrap();
    /// assert_eq!(poly.equation(), "y(x) = 3.00x² + 2.00x + 1.00");
    /// ```
    #[must_use]
    pub fn equation(&self) -> String {
        let mut output = String::new();
        if self
            .basis
            .format_polynomial(&mut output, &self.coefficients)
            .is_err()
        {
            output.clear();
        }
        output
    }
}

impl<B, T: Value> std::fmt::Display for Polynomial<B, T>
where
    B: Basis<T>,
    B: PolynomialDisplay<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.basis.format_polynomial(f, &self.coefficients)
    }
}
