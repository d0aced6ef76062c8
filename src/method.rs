//! The approximation methods being compared
//!
//! Every method turns a [`TargetFunction`] and an order `n` into a degree-`n`
//! polynomial on [-1, 1]:
//!
//! - [`taylor`]: Truncated Taylor series around `x0`.
//! - [`chebyshev_least_squares`]: Discrete Chebyshev series projection.
//! - [`interpolate`]: Interpolation through [`NodeSet::Chebyshev`] or
//!   [`NodeSet::Equidistant`] nodes.
//!
//! [`Method`] is the registry both front ends draw from; it pairs each method
//! with its display name and line style, and produces an [`Approximation`].
use std::str::FromStr;

use crate::{
    error::{Error, Result},
    target::TargetFunction,
    value::Value,
    ChebyshevPolynomial, MonomialPolynomial,
};

mod interpolation;
pub use interpolation::{condition_number, interpolate, NodeSet, ILL_CONDITIONED};

mod least_squares;
pub use least_squares::{
    chebyshev_least_squares, chebyshev_least_squares_with_samples, DEFAULT_SAMPLES,
};

mod taylor;
pub use taylor::taylor;

/// How a method's error curve is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Continuous line
    Solid,

    /// Long dashes
    Dashed,

    /// Alternating dashes and dots
    DashDot,

    /// Dots
    Dotted,
}

/// One of the four approximation methods.
///
/// Variants are listed in registry order, which is also the order curves are
/// drawn and legends are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Method {
    /// Truncated Taylor series at 0
    #[serde(rename = "taylor")]
    Taylor,

    /// Interpolation through Chebyshev nodes
    #[serde(rename = "chebyshev-nodes")]
    ChebyshevNodes,

    /// Discrete Chebyshev series projection
    #[serde(rename = "least-squares")]
    ChebyshevLeastSquares,

    /// Interpolation through equally spaced nodes
    #[serde(rename = "equidistant")]
    EquidistantNodes,
}
impl Method {
    /// Every method, in registry order.
    pub const ALL: [Self; 4] = [
        Self::Taylor,
        Self::ChebyshevNodes,
        Self::ChebyshevLeastSquares,
        Self::EquidistantNodes,
    ];

    /// The identifier used on the command line and in serialized summaries.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Taylor => "taylor",
            Self::ChebyshevNodes => "chebyshev-nodes",
            Self::ChebyshevLeastSquares => "least-squares",
            Self::EquidistantNodes => "equidistant",
        }
    }

    /// The legend label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Taylor => "Taylor",
            Self::ChebyshevNodes => "Chebyshev-optimized Taylor",
            Self::ChebyshevLeastSquares => "Chebyshev least squares",
            Self::EquidistantNodes => "Equidistant-node Taylor",
        }
    }

    /// Stroke of the method's error curve.
    #[must_use]
    pub fn line_style(self) -> LineStyle {
        match self {
            Self::Taylor => LineStyle::Solid,
            Self::ChebyshevNodes => LineStyle::Dashed,
            Self::ChebyshevLeastSquares => LineStyle::DashDot,
            Self::EquidistantNodes => LineStyle::Dotted,
        }
    }

    /// Color of the method's error curve, as `0xRRGGBB`.
    #[must_use]
    pub fn color(self) -> u32 {
        match self {
            Self::Taylor => 0x00D6_2728,
            Self::ChebyshevNodes => 0x002C_A02C,
            Self::ChebyshevLeastSquares => 0x001F_77B4,
            Self::EquidistantNodes => 0x0094_67BD,
        }
    }

    /// [`Method::color`] split into its red, green and blue channels.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.color().to_be_bytes();
        (r, g, b)
    }

    /// Builds this method's degree-`n` approximation of `target`.
    ///
    /// Taylor expansions are taken at `x0 = 0`; use [`taylor`] directly for
    /// another expansion point.
    ///
    /// # Errors
    /// Returns [`Error::SingularMatrix`] if an interpolation system cannot be solved.
    ///
    /// # Example
    /// ```
    /// # use expapprox::{method::Method, target::TargetFunction};
    /// let p = Method::Taylor.approximate::<f64>(TargetFunction::Exp, 4).unwrap();
    /// assert!((p.y(1.0) - 2.708_333).abs() < 1e-6);
    /// ```
    pub fn approximate<T: Value>(self, target: TargetFunction, n: usize) -> Result<Approximation<T>> {
        let approximation = match self {
            Self::Taylor => Approximation::Power(taylor(target, n, T::zero())?),
            Self::ChebyshevNodes => Approximation::Power(interpolate(target, n, NodeSet::Chebyshev)?.0),
            Self::ChebyshevLeastSquares => {
                Approximation::Chebyshev(chebyshev_least_squares(target, n)?)
            }
            Self::EquidistantNodes => {
                Approximation::Power(interpolate(target, n, NodeSet::Equidistant)?.0)
            }
        };

        log::debug!(
            "{} of {target}, n = {n}: {}",
            self.name(),
            approximation.equation()
        );
        Ok(approximation)
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The polynomial produced by one [`Method`].
///
/// Taylor and node interpolation work in the power basis; least squares in the
/// Chebyshev basis. Both evaluate the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum Approximation<T: Value = f64> {
    /// Power-basis polynomial, possibly centered
    Power(MonomialPolynomial<T>),

    /// Truncated Chebyshev series
    Chebyshev(ChebyshevPolynomial<T>),
}
impl<T: Value> Approximation<T> {
    /// Evaluates the approximation at `x`.
    ///
    /// A Chebyshev series yields NaN for `|x| > 1`.
    pub fn y(&self, x: T) -> T {
        match self {
            Self::Power(p) => p.y(x),
            Self::Chebyshev(p) => p.y(x),
        }
    }

    /// Evaluates the approximation at each of `xs`.
    pub fn solve(&self, xs: impl IntoIterator<Item = T>) -> Vec<(T, T)> {
        match self {
            Self::Power(p) => p.solve(xs),
            Self::Chebyshev(p) => p.solve(xs),
        }
    }

    /// Evaluates the approximation at each of `xs`, returning only y-values.
    pub fn y_values(&self, xs: &[T]) -> Vec<T> {
        match self {
            Self::Power(p) => p.y_values(xs),
            Self::Chebyshev(p) => p.y_values(xs),
        }
    }

    /// Coefficients in the approximation's own basis.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        match self {
            Self::Power(p) => p.coefficients(),
            Self::Chebyshev(p) => p.coefficients(),
        }
    }

    /// Degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        match self {
            Self::Power(p) => p.degree(),
            Self::Chebyshev(p) => p.degree(),
        }
    }

    /// Human readable equation in the approximation's own basis.
    #[must_use]
    pub fn equation(&self) -> String {
        match self {
            Self::Power(p) => p.equation(),
            Self::Chebyshev(p) => p.equation(),
        }
    }

    /// The same polynomial in the plain power basis, `Σ aₖ xᵏ`.
    ///
    /// # Errors
    /// Returns an error if the basis conversion fails.
    pub fn as_monomial(&self) -> Result<MonomialPolynomial<T>> {
        match self {
            Self::Power(p) => p.as_monomial(),
            Self::Chebyshev(p) => p.as_monomial(),
        }
    }
}

impl<T: Value> From<MonomialPolynomial<T>> for Approximation<T> {
    fn from(p: MonomialPolynomial<T>) -> Self {
        Self::Power(p)
    }
}

impl<T: Value> From<ChebyshevPolynomial<T>> for Approximation<T> {
    fn from(p: ChebyshevPolynomial<T>) -> Self {
        Self::Chebyshev(p)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_close,
        error_curve::{ErrorCurve, SampleGrid},
    };

    use super::*;

    #[test]
    fn test_registry() {
        assert_eq!(Method::ALL.len(), 4);
        assert_eq!(Method::Taylor.line_style(), LineStyle::Solid);
        assert_eq!(Method::ChebyshevNodes.line_style(), LineStyle::Dashed);
        assert_eq!(Method::ChebyshevLeastSquares.line_style(), LineStyle::DashDot);
        assert_eq!(Method::EquidistantNodes.line_style(), LineStyle::Dotted);

        assert_eq!(Method::Taylor.rgb(), (0xD6, 0x27, 0x28));
        assert_eq!(Method::EquidistantNodes.rgb(), (0x94, 0x67, 0xBD));
    }

    #[test]
    fn test_parse() {
        for method in Method::ALL {
            assert_eq!(method.id().parse::<Method>().unwrap(), method);
        }
        assert_eq!(" Least-Squares ".parse::<Method>().unwrap(), Method::ChebyshevLeastSquares);

        let err = "pade".parse::<Method>().unwrap_err();
        assert!(matches!(err, Error::UnknownMethod(ref s) if s == "pade"));
    }

    #[test]
    fn test_serde_ids() {
        let json = serde_json::to_string(&Method::ChebyshevNodes).unwrap();
        assert_eq!(json, "\"chebyshev-nodes\"");

        let method: Method = serde_json::from_str("\"least-squares\"").unwrap();
        assert_eq!(method, Method::ChebyshevLeastSquares);
    }

    #[test]
    fn test_approximate_all() {
        for target in TargetFunction::ALL {
            for method in Method::ALL {
                let p = method.approximate::<f64>(target, 4).unwrap();
                assert_eq!(p.degree(), 4);
                assert_eq!(p.coefficients().len(), 5);

                // Every method is a decent approximation at order 4
                let curve = ErrorCurve::new(target, &p, &SampleGrid::default());
                assert!(curve.max_abs_error() < 0.05, "{method} on {target}");
            }
        }
    }

    #[test]
    fn test_as_monomial_agrees() {
        let grid = SampleGrid::new(11);
        for method in Method::ALL {
            let p = method.approximate::<f64>(TargetFunction::ExpNeg, 5).unwrap();
            let m = p.as_monomial().unwrap();
            for &x in grid.xs() {
                assert_close!(p.y(x), m.y(x), tol = 1e-10);
            }
        }
    }
}
