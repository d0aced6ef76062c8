//! Sampling the error of an approximation
//!
//! An [`ErrorCurve`] is the signed error `f(x) - P(x)` of one approximation,
//! sampled on a [`SampleGrid`], together with the summary numbers the plots and
//! reports use.
use crate::{
    method::Approximation,
    target::TargetFunction,
    value::{Linspace, Value},
};

/// Number of points in the default sample grid.
pub const DEFAULT_GRID_POINTS: usize = 1000;

/// Y-axis limits are the largest error scaled by this factor.
pub const DEFAULT_LIMIT_FACTOR: f64 = 1.2;

/// Equally spaced evaluation points on [-1, 1], endpoints included.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid<T: Value = f64> {
    xs: Vec<T>,
}
impl<T: Value> SampleGrid<T> {
    /// A grid of `count` points.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            xs: Linspace::new(-T::one(), T::one(), count).collect(),
        }
    }

    /// The grid points, in increasing order.
    #[must_use]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Number of points in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True for a grid with no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}
impl<T: Value> Default for SampleGrid<T> {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_POINTS)
    }
}

/// Signed error `f(x) - P(x)` of one approximation, sampled on a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCurve<T: Value = f64> {
    xs: Vec<T>,
    errors: Vec<T>,
    max_abs_error: T,
    argmax: Option<T>,
}
impl<T: Value> ErrorCurve<T> {
    /// Samples the error of `approximation` against `target` on `grid`.
    ///
    /// A NaN anywhere in the curve makes the maximum NaN as well.
    ///
    /// # Example
    /// ```
    /// # use expapprox::{error_curve::{ErrorCurve, SampleGrid}, method::Method, target::TargetFunction};
    /// let p = Method::Taylor.approximate::<f64>(TargetFunction::Exp, 4).unwrap();
    /// let curve = ErrorCurve::new(TargetFunction::Exp, &p, &SampleGrid::default());
    ///
    /// // Taylor is worst at the far end of the interval
    /// assert_eq!(curve.argmax(), Some(1.0));
    /// assert!((curve.max_abs_error() - (std::f64::consts::E - 2.708_333_333)).abs() < 1e-9);
    /// ```
    pub fn new(target: TargetFunction, approximation: &Approximation<T>, grid: &SampleGrid<T>) -> Self {
        let xs = grid.xs().to_vec();
        let errors: Vec<T> = xs
            .iter()
            .zip(approximation.y_values(&xs))
            .map(|(&x, p)| target.y(x) - p)
            .collect();

        let mut max_abs_error = T::zero();
        let mut argmax = None;
        for (&x, &e) in xs.iter().zip(&errors) {
            let abs = Value::abs(e);
            if abs.is_nan() {
                max_abs_error = T::nan();
                argmax = Some(x);
                break;
            }

            if argmax.is_none() || abs > max_abs_error {
                max_abs_error = abs;
                argmax = Some(x);
            }
        }

        Self {
            xs,
            errors,
            max_abs_error,
            argmax,
        }
    }

    /// The sample locations.
    #[must_use]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// The signed errors, one per sample.
    #[must_use]
    pub fn errors(&self) -> &[T] {
        &self.errors
    }

    /// `(x, f(x) - P(x))` pairs.
    #[must_use]
    pub fn points(&self) -> Vec<(T, T)> {
        self.xs.iter().copied().zip(self.errors.iter().copied()).collect()
    }

    /// The largest `|f(x) - P(x)|` on the grid; zero for an empty grid, NaN if
    /// any error is NaN.
    #[must_use]
    pub fn max_abs_error(&self) -> T {
        self.max_abs_error
    }

    /// Where [`ErrorCurve::max_abs_error`] is attained, if the grid is not empty.
    #[must_use]
    pub fn argmax(&self) -> Option<T> {
        self.argmax
    }

    /// Root mean square of the errors; zero for an empty grid.
    #[must_use]
    pub fn rms_error(&self) -> T {
        if self.errors.is_empty() {
            return T::zero();
        }

        let sum = self.errors.iter().fold(T::zero(), |acc, &e| acc + e * e);
        (sum / T::from_positive_int(self.errors.len())).sqrt()
    }
}

/// Symmetric axis limits `(-m·factor, m·factor)` around zero.
///
/// ```
/// # use expapprox::error_curve::symmetric_limits;
/// let (lo, hi) = symmetric_limits(0.5f64, 1.2);
/// assert!((lo + 0.6).abs() < 1e-15 && (hi - 0.6).abs() < 1e-15);
/// ```
#[must_use]
pub fn symmetric_limits<T: Value>(max_abs: T, factor: T) -> (T, T) {
    let m = max_abs * factor;
    (-m, m)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::{assert_close, basis::ChebyshevBasis, basis::MonomialBasis, method::Method};

    use super::*;

    #[test]
    fn test_grid() {
        let grid = SampleGrid::<f64>::default();
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid.xs()[0], -1.0);
        assert_eq!(grid.xs()[999], 1.0);
        assert!(SampleGrid::<f64>::new(0).is_empty());
    }

    #[test]
    fn test_constant_approximation() {
        // Constant 1 only matches e^x at 0
        let p = Approximation::Power(MonomialBasis::new_polynomial(vec![1.0f64]).unwrap());
        let curve = ErrorCurve::new(TargetFunction::Exp, &p, &SampleGrid::new(3));
        assert_eq!(curve.errors().len(), 3);
        assert_close!(curve.errors()[1], 0.0);
        assert_close!(curve.max_abs_error(), std::f64::consts::E - 1.0, tol = 1e-15);
        assert_eq!(curve.argmax(), Some(1.0));

        let rms = ((1.0 / std::f64::consts::E - 1.0).powi(2) + (std::f64::consts::E - 1.0).powi(2)) / 3.0;
        assert_close!(curve.rms_error(), rms.sqrt(), tol = 1e-15);
    }

    #[test]
    fn test_signed_errors() {
        let p = Method::Taylor.approximate::<f64>(TargetFunction::ExpNeg, 1).unwrap();
        let curve = ErrorCurve::new(TargetFunction::ExpNeg, &p, &SampleGrid::new(5));

        // e^-x lies above its tangent line everywhere
        assert!(curve.errors().iter().all(|&e| e >= 0.0));
        assert_eq!(curve.points().len(), 5);
        assert_eq!(curve.points()[0].0, -1.0);
    }

    #[test]
    fn test_nan_propagates() {
        // A Chebyshev series sampled past its domain
        let p = Approximation::Chebyshev(ChebyshevBasis::new_polynomial(vec![1.0f64, 1.0]).unwrap());
        let grid: SampleGrid<f64> = SampleGrid {
            xs: vec![0.0, 0.5, 1.5, 0.9],
        };
        let curve = ErrorCurve::new(TargetFunction::Exp, &p, &grid);
        assert!(curve.max_abs_error().is_nan());
        assert_eq!(curve.argmax(), Some(1.5));
    }

    #[test]
    fn test_limits() {
        assert_eq!(symmetric_limits(0.0f64, 1.2), (-0.0, 0.0));
        let (lo, hi) = symmetric_limits(2.0f64, 1.2);
        assert_close!(lo, -2.4, tol = 1e-15);
        assert_close!(hi, 2.4, tol = 1e-15);
    }
}
