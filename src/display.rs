//! Utilities for displaying and formatting polynomials
//!
//! Approximations are printed in legends and CLI reports as equations such as
//! `y(x) = 0.04x⁴ + 0.18x³ + 0.50x² + x + 1.00`.
//!
//! # Key Concepts
//! - **[`PolynomialDisplay`]**: How a basis renders a single term.
//! - **[`Term`]**: A polynomial term with a sign and body.
//! - **[`Sign`]**: Whether a term is joined with `+` or `-`.
//!
//! # Helpers
//! - [`format_coefficient`]: Formats a numeric coefficient, skipping zeros.
//! - [`format_variable`]: Adds subscripts and superscript exponents to a variable.
#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]

use crate::value::Value;

pub mod unicode;

/// Default precision for formatting used by the provided implementations of [`PolynomialDisplay`]
pub const DEFAULT_PRECISION: usize = 2;

/// Range in which a value printed with `precision` decimals keeps a significant digit.
///
/// Below `10^-precision` fixed point would print as zero, so scientific notation is used instead.
///
/// ```
/// # use expapprox::display::fixed_range;
/// assert_eq!(fixed_range::<f64>(2), Some(0.01..1e3));
/// ```
#[must_use]
pub fn fixed_range<T: Value>(precision: usize) -> Option<std::ops::Range<T>> {
    let exponent = i32::try_from(precision).ok()?;
    let s = T::try_cast(10f64.powi(-exponent)).ok()?;
    let e = T::try_cast(1e3).ok()?;
    Some(s..e)
}

/// [`fixed_range`] at [`DEFAULT_PRECISION`]
#[must_use]
pub fn default_fixed_range<T: Value>() -> Option<std::ops::Range<T>> {
    fixed_range(DEFAULT_PRECISION)
}

/// Trait for formatting polynomial expressions, implemented by each basis.
///
/// Implementors decide how one term looks (`3x²`, `0.50·T₂(x)`, `(x - 0.50)³`);
/// [`PolynomialDisplay::format_polynomial`] assembles the terms into `y(x) = …`.
pub trait PolynomialDisplay<T: Value> {
    /// Formats a single polynomial term for display.
    ///
    /// Returning `None` indicates the term should be skipped
    /// (typically when the coefficient is zero).
    fn format_term(&self, degree: i32, coef: T) -> Option<Term>;

    /// Writes the full polynomial expression into the provided buffer.
    ///
    /// `coefficients[i]` is the coefficient of the `i`th basis function; terms
    /// are written from the highest degree down, zero terms skipped.
    ///
    /// # Errors
    /// Returns an error if writing to `buffer` fails.
    fn format_polynomial<B: std::fmt::Write>(
        &self,
        buffer: &mut B,
        coefficients: &[T],
    ) -> std::fmt::Result {
        let mut terms = coefficients
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(i, &coef)| self.format_term(i as i32, coef));

        write!(buffer, "y(x) = ")?;

        // The first term carries its sign without padding
        let Some(first) = terms.next() else {
            return write!(buffer, "0");
        };
        if first.sign == Sign::Negative {
            write!(buffer, "{}", first.sign.char())?;
        }
        write!(buffer, "{}", first.body)?;

        for term in terms {
            write!(buffer, " {} {}", term.sign.char(), term.body)?;
        }

        Ok(())
    }
}

/// The sign of a polynomial term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Positive sign (`+` when displayed).
    Positive,

    /// Negative sign (`-` when displayed).
    Negative,
}

impl Sign {
    /// Determines the sign from a numeric coefficient.
    ///
    /// # Example
    /// ```
    /// # use expapprox::display::Sign;
    /// assert_eq!(Sign::from_coef(3.0), Sign::Positive);
    /// assert_eq!(Sign::from_coef(-2.0), Sign::Negative);
    /// ```
    pub fn from_coef<T: Value>(coef: T) -> Self {
        if coef.is_sign_negative() {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns `+` for `Positive`, `-` for `Negative`.
    #[must_use]
    pub fn char(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// A single term of a polynomial, ready to be joined into an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The sign of the term.
    pub sign: Sign,

    /// The unsigned body of the term (e.g., `"2x²"`, `"3.14"`, `"x"`).
    pub body: String,
}

impl Term {
    /// Creates a new polynomial term with the given sign and body.
    #[must_use]
    pub fn new(sign: Sign, body: String) -> Self {
        Self { sign, body }
    }
}

/// Formats the magnitude of a coefficient for display in a polynomial term.
///
/// - Returns `None` if the coefficient is zero or effectively zero (≤ epsilon).
/// - Returns an empty string for a unit coefficient on a non-constant term.
/// - Formats as a decimal within [`fixed_range`] for `precision`, in scientific notation otherwise.
///
/// # Example
/// ```
/// # use expapprox::display::format_coefficient;
/// assert_eq!(format_coefficient(0.0, 1, 2), None);
/// assert_eq!(format_coefficient(2.5, 1, 2), Some("2.50".to_string()));
/// assert_eq!(format_coefficient(1e5, 1, 2), Some("1.00e5".to_string()));
/// ```
pub fn format_coefficient<T: Value>(coef: T, degree: i32, precision: usize) -> Option<String> {
    let abs = Value::abs(coef);

    if coef.is_zero() || abs <= T::epsilon() {
        return None;
    }

    if abs.abs_sub(T::one()) <= T::epsilon() && degree != 0 {
        return Some(String::new());
    }

    Some(unicode::float(abs, fixed_range(precision), precision))
}

/// Formats the variable part of a polynomial term.
///
/// - `exp == 0` gives an empty string.
/// - `exp == 1` gives the base unchanged.
/// - Otherwise the subscript and superscript exponent are appended.
///
/// # Examples
/// ```
/// # use expapprox::display::format_variable;
/// assert_eq!(format_variable("x", None, 0), "");
/// assert_eq!(format_variable("x", None, 1), "x");
/// assert_eq!(format_variable("x", Some("1"), 2), "x₁²");
/// ```
#[must_use]
pub fn format_variable(base: &str, subscript: Option<&str>, exp: i32) -> String {
    match exp {
        0 => String::new(),
        1 => base.to_string(),
        _ => {
            let lbl = unicode::subscript(subscript.unwrap_or_default());
            let sup = unicode::superscript(&exp.to_string());
            format!("{base}{lbl}{sup}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PowerTerms;
    impl PolynomialDisplay<f64> for PowerTerms {
        fn format_term(&self, degree: i32, coef: f64) -> Option<Term> {
            let sign = Sign::from_coef(coef);
            let coef_str = format_coefficient(coef, degree, DEFAULT_PRECISION)?;
            let body = format!("{coef_str}{}", format_variable("x", None, degree));
            Some(Term::new(sign, body))
        }
    }

    fn render(coefficients: &[f64]) -> String {
        let mut buf = String::new();
        PowerTerms.format_polynomial(&mut buf, coefficients).unwrap();
        buf
    }

    #[test]
    fn test_sign() {
        assert_eq!(Sign::from_coef(1.0), Sign::Positive);
        assert_eq!(Sign::from_coef(-1.0), Sign::Negative);
        assert_eq!(Sign::from_coef(0.0), Sign::Positive);
        assert_eq!(Sign::Negative.char(), '-');
    }

    #[test]
    fn test_format_coefficient() {
        assert_eq!(format_coefficient(-2.5, 1, 2), Some("2.50".to_string()));
        assert_eq!(format_coefficient(1e-20, 1, 2), None);
        assert_eq!(format_coefficient(1e-5, 2, 2), Some("1.00e-5".to_string()));
        assert_eq!(format_coefficient(-1.0, 3, 2), Some(String::new()));
        assert_eq!(format_coefficient(1.0, 0, 2), Some("1.00".to_string()));

        // Small coefficients keep their digits instead of printing as 0.00
        assert_eq!(format_coefficient(1.388_9e-3, 6, 2), Some("1.39e-3".to_string()));
        assert_eq!(format_coefficient(0.0125, 5, 2), Some("0.01".to_string()));
        assert_eq!(format_coefficient(1.5e-3, 2, 3), Some("0.002".to_string()));
    }

    #[test]
    fn test_format_variable() {
        assert_eq!(format_variable("T", None, 3), "T³");
        assert_eq!(format_variable("x", None, -2), "x⁻²");
    }

    #[test]
    fn test_format_polynomial() {
        assert_eq!(render(&[2.0, -3.0, 0.0, 4.0]), "y(x) = 4.00x³ - 3.00x + 2.00");
        assert_eq!(render(&[0.0, 0.0, 0.0]), "y(x) = 0");
        assert_eq!(render(&[-1.0, 2.0]), "y(x) = 2.00x - 1.00");
        assert_eq!(render(&[1.0, 1.0, 0.5]), "y(x) = 0.50x² + x + 1.00");
        assert_eq!(render(&[0.0, -1.0]), "y(x) = -x");
    }
}
