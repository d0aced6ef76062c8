use crate::{
    basis::MonomialBasis, error::Result, target::TargetFunction, value::Value, MonomialPolynomial,
    Polynomial,
};

/// Truncated Taylor series of `target` around `x0`.
///
/// ```math
/// P(x) = Σₖ f⁽ᵏ⁾(x0) / k! · (x - x0)ᵏ,   k = 0..=n
/// ```
///
/// The result lives in a [`MonomialBasis`] centered at `x0`, so evaluation is
/// `Σ cₖ (x - x0)ᵏ` without an explicit re-expansion.
///
/// # Errors
/// Only fails if the coefficients cannot form a polynomial, which cannot happen
/// for `n + 1 >= 1` coefficients.
///
/// # Example
/// ```
/// # use expapprox::{method::taylor, target::TargetFunction};
/// let p = taylor(TargetFunction::Exp, 2, 0.0f64).unwrap();
/// assert_eq!(p.coefficients(), &[1.0, 1.0, 0.5]);
/// ```
pub fn taylor<T: Value>(target: TargetFunction, n: usize, x0: T) -> Result<MonomialPolynomial<T>> {
    let coefficients = (0..=n)
        .map(|k| target.derivative(k, x0) / T::factorial(k))
        .collect();

    Polynomial::from_basis(MonomialBasis::centered(x0), coefficients)
}
