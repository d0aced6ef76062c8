//! Side-by-side error curves of several methods
//!
//! A [`Comparison`] evaluates a set of [`Method`]s on one target at one order.
//! It is what both front ends render: the batch driver builds one per target
//! and each of [`BATCH_ORDERS`], and a [`ViewRequest`] builds a single one from
//! user-selected parameters.
//!
//! With the `parallel` feature, methods are evaluated concurrently with `rayon`;
//! the curves keep the order the methods were selected in either way.
use crate::{
    error::{Error, Result},
    error_curve::{symmetric_limits, ErrorCurve, SampleGrid, DEFAULT_LIMIT_FACTOR},
    method::{Approximation, Method},
    target::TargetFunction,
    value::Value,
};

/// Orders rendered by the batch driver.
pub const BATCH_ORDERS: [usize; 4] = [3, 4, 5, 6];

/// Smallest order a [`ViewRequest`] accepts.
pub const MIN_ORDER: usize = 1;

/// Largest order a [`ViewRequest`] accepts.
pub const MAX_ORDER: usize = 10;

/// Order of a default [`ViewRequest`].
pub const DEFAULT_ORDER: usize = 4;

/// One method's approximation and its sampled error.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCurve<T: Value = f64> {
    /// The method that produced the approximation
    pub method: Method,

    /// The approximating polynomial
    pub approximation: Approximation<T>,

    /// Its error against the target
    pub curve: ErrorCurve<T>,
}

/// Error curves of several methods on the same target and order.
#[derive(Debug)]
pub struct Comparison<T: Value = f64> {
    target: TargetFunction,
    order: usize,
    curves: Vec<MethodCurve<T>>,
    failures: Vec<(Method, Error)>,
}
impl<T: Value> Comparison<T> {
    /// Evaluates each of `methods` at `order` on `grid`.
    ///
    /// Duplicate methods are evaluated once. A method that fails, such as an
    /// interpolation with a singular system, is logged and recorded in
    /// [`Comparison::failures`]; the remaining methods are still evaluated.
    ///
    /// # Example
    /// ```
    /// # use expapprox::{comparison::Comparison, error_curve::SampleGrid, method::Method, target::TargetFunction};
    /// let cmp = Comparison::<f64>::new(TargetFunction::Exp, 4, &Method::ALL, &SampleGrid::default());
    /// assert_eq!(cmp.curves().len(), 4);
    ///
    /// let (lo, hi) = cmp.y_limits();
    /// assert!((hi - 1.2 * cmp.max_abs_error()).abs() < 1e-15 && lo == -hi);
    /// ```
    pub fn new(target: TargetFunction, order: usize, methods: &[Method], grid: &SampleGrid<T>) -> Self {
        let mut selected: Vec<Method> = Vec::with_capacity(methods.len());
        for &method in methods {
            if !selected.contains(&method) {
                selected.push(method);
            }
        }

        #[cfg(not(feature = "parallel"))]
        let results: Vec<(Method, Result<Approximation<T>>)> = selected
            .into_iter()
            .map(|method| (method, method.approximate(target, order)))
            .collect();

        #[cfg(feature = "parallel")]
        let results: Vec<(Method, Result<Approximation<T>>)> = {
            use rayon::prelude::*;

            selected
                .into_par_iter()
                .map(|method| (method, method.approximate(target, order)))
                .collect()
        };

        let mut curves = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (method, result) in results {
            match result {
                Ok(approximation) => {
                    let curve = ErrorCurve::new(target, &approximation, grid);
                    log::debug!(
                        "{method} on {target}, n = {order}: max |error| = {:e}",
                        curve.max_abs_error()
                    );
                    curves.push(MethodCurve {
                        method,
                        approximation,
                        curve,
                    });
                }

                Err(e) => {
                    log::error!("{method} on {target}, n = {order} failed: {e}");
                    failures.push((method, e));
                }
            }
        }

        Self {
            target,
            order,
            curves,
            failures,
        }
    }

    /// The target function being approximated.
    #[must_use]
    pub fn target(&self) -> TargetFunction {
        self.target
    }

    /// The approximation order.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The evaluated methods, in selection order.
    #[must_use]
    pub fn curves(&self) -> &[MethodCurve<T>] {
        &self.curves
    }

    /// The methods that could not be evaluated, with their errors.
    #[must_use]
    pub fn failures(&self) -> &[(Method, Error)] {
        &self.failures
    }

    /// The largest `|f(x) - P(x)|` over every curve; zero if there are none.
    ///
    /// NaN if any curve's maximum is NaN.
    #[must_use]
    pub fn max_abs_error(&self) -> T {
        let mut max = T::zero();
        for curve in &self.curves {
            let m = curve.curve.max_abs_error();
            if m.is_nan() {
                return m;
            }
            if m > max {
                max = m;
            }
        }
        max
    }

    /// Y-axis limits: `±1.2` times [`Comparison::max_abs_error`].
    ///
    /// Falls back to `(-1, 1)` when the maximum is zero or not finite, so the
    /// axis range is always valid.
    #[must_use]
    pub fn y_limits(&self) -> (T, T) {
        let max = self.max_abs_error();
        if max.is_zero() || !max.is_finite_value() {
            return (-T::one(), T::one());
        }

        let factor = T::try_cast(DEFAULT_LIMIT_FACTOR).unwrap_or(T::one());
        symmetric_limits(max, factor)
    }

    /// A serializable report of the comparison.
    ///
    /// # Errors
    /// Returns an error if a value cannot be represented as `f64`.
    pub fn summary(&self) -> Result<ComparisonSummary> {
        let cast = |v: T| v.as_f64().ok_or(Error::CastFailed);

        let methods = self
            .curves
            .iter()
            .map(|c| {
                Ok(MethodSummary {
                    method: c.method,
                    name: c.method.name().to_string(),
                    max_abs_error: cast(c.curve.max_abs_error())?,
                    rms_error: cast(c.curve.rms_error())?,
                    argmax: c.curve.argmax().map(cast).transpose()?,
                    equation: c.approximation.equation(),
                    coefficients: c
                        .approximation
                        .coefficients()
                        .iter()
                        .map(|&v| cast(v))
                        .collect::<Result<_>>()?,
                })
            })
            .collect::<Result<_>>()?;

        let failures = self
            .failures
            .iter()
            .map(|(method, e)| MethodFailure {
                method: *method,
                error: e.to_string(),
            })
            .collect();

        Ok(ComparisonSummary {
            target: self.target,
            order: self.order,
            max_abs_error: cast(self.max_abs_error())?,
            methods,
            failures,
        })
    }
}

/// Serializable report of one [`Comparison`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonSummary {
    /// The approximated function
    pub target: TargetFunction,

    /// Approximation order
    pub order: usize,

    /// Largest error over every method
    pub max_abs_error: f64,

    /// One entry per evaluated method
    pub methods: Vec<MethodSummary>,

    /// Methods that failed to evaluate
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<MethodFailure>,
}

/// Serializable report of one method's error curve.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MethodSummary {
    /// The method
    pub method: Method,

    /// Its legend label
    pub name: String,

    /// Largest `|f(x) - P(x)|` on the grid
    pub max_abs_error: f64,

    /// Root mean square error on the grid
    pub rms_error: f64,

    /// Where the largest error occurs
    pub argmax: Option<f64>,

    /// The polynomial, in its own basis
    pub equation: String,

    /// Coefficients in the polynomial's own basis
    pub coefficients: Vec<f64>,
}

/// A method that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MethodFailure {
    /// The method
    pub method: Method,

    /// What went wrong
    pub error: String,
}

/// Parameters of a single on-demand comparison view.
///
/// The defaults are `exp` at order 4 with every method on a linear axis.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewRequest {
    /// Function to approximate
    pub target: TargetFunction,

    /// Approximation order, [`MIN_ORDER`]..=[`MAX_ORDER`]
    pub order: usize,

    /// Methods to compare; at least one
    pub methods: Vec<Method>,

    /// Plot the error on a symmetric log axis
    pub log_scale: bool,
}
impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            target: TargetFunction::Exp,
            order: DEFAULT_ORDER,
            methods: Method::ALL.to_vec(),
            log_scale: false,
        }
    }
}
impl ViewRequest {
    /// Checks the order range and that at least one method is selected.
    ///
    /// # Errors
    /// - [`Error::OrderOutOfRange`] if the order is outside [`MIN_ORDER`]..=[`MAX_ORDER`]
    /// - [`Error::NoMethods`] if no method is selected
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ORDER..=MAX_ORDER).contains(&self.order) {
            return Err(Error::OrderOutOfRange {
                order: self.order,
                min: MIN_ORDER,
                max: MAX_ORDER,
            });
        }

        if self.methods.is_empty() {
            return Err(Error::NoMethods);
        }

        Ok(())
    }

    /// Validates the request, then builds its comparison on the default grid.
    ///
    /// # Errors
    /// See [`ViewRequest::validate`].
    ///
    /// # Example
    /// ```
    /// # use expapprox::{comparison::ViewRequest, method::Method};
    /// let request = ViewRequest { order: 6, methods: vec![Method::ChebyshevLeastSquares], ..Default::default() };
    /// let cmp = request.comparison::<f64>().unwrap();
    /// assert!(cmp.max_abs_error() < 1e-5);
    /// ```
    pub fn comparison<T: Value>(&self) -> Result<Comparison<T>> {
        self.validate()?;
        log::info!(
            "Comparing {} methods on {} at order {}",
            self.methods.len(),
            self.target,
            self.order
        );
        Ok(Comparison::new(
            self.target,
            self.order,
            &self.methods,
            &SampleGrid::default(),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::assert_close;

    use super::*;

    fn compare(target: TargetFunction, order: usize, methods: &[Method]) -> Comparison {
        Comparison::new(target, order, methods, &SampleGrid::default())
    }

    #[test]
    fn test_selection_order() {
        let methods = [Method::EquidistantNodes, Method::Taylor, Method::EquidistantNodes];
        let cmp = compare(TargetFunction::ExpNeg, 3, &methods);
        let order: Vec<_> = cmp.curves().iter().map(|c| c.method).collect();
        assert_eq!(order, vec![Method::EquidistantNodes, Method::Taylor]);
        assert!(cmp.failures().is_empty());
    }

    #[test]
    fn test_no_methods() {
        let cmp = compare(TargetFunction::Exp, 4, &[]);
        assert!(cmp.curves().is_empty());
        assert_eq!(cmp.max_abs_error(), 0.0);
        assert_eq!(cmp.y_limits(), (-1.0, 1.0));
    }

    #[test]
    fn test_limits() {
        let cmp = compare(TargetFunction::Exp, 3, &Method::ALL);

        // Taylor dominates the error at every order
        let taylor = cmp.curves()[0].curve.max_abs_error();
        assert_eq!(cmp.max_abs_error(), taylor);

        let (lo, hi) = cmp.y_limits();
        assert_close!(hi, 1.2 * taylor, tol = 1e-15);
        assert_eq!(lo, -hi);
    }

    #[test]
    fn test_chebyshev_beats_taylor() {
        for target in TargetFunction::ALL {
            for order in BATCH_ORDERS {
                let cmp = compare(target, order, &[Method::Taylor, Method::ChebyshevLeastSquares]);
                let taylor = cmp.curves()[0].curve.max_abs_error();
                let chebyshev = cmp.curves()[1].curve.max_abs_error();
                assert!(chebyshev < taylor, "{target} n = {order}");
            }
        }
    }

    #[test]
    fn test_summary() {
        let cmp = compare(TargetFunction::Exp, 4, &[Method::Taylor, Method::ChebyshevNodes]);
        let summary = cmp.summary().unwrap();
        assert_eq!(summary.target, TargetFunction::Exp);
        assert_eq!(summary.order, 4);
        assert_eq!(summary.methods.len(), 2);
        assert_eq!(summary.methods[0].name, "Taylor");
        assert_eq!(summary.methods[0].coefficients.len(), 5);
        assert_eq!(summary.methods[0].argmax, Some(1.0));

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"target\":\"exp\""));
        assert!(json.contains("\"method\":\"chebyshev-nodes\""));
        assert!(!json.contains("failures"));

        let back: ComparisonSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.methods[1].method, Method::ChebyshevNodes);
        assert_eq!(back.methods[1].equation, summary.methods[1].equation);
        assert_close!(back.max_abs_error, summary.max_abs_error, tol = 1e-15);
    }

    #[test]
    fn test_view_request() {
        let request = ViewRequest::default();
        assert_eq!(request.target, TargetFunction::Exp);
        assert_eq!(request.order, 4);
        assert_eq!(request.methods, Method::ALL.to_vec());
        assert!(!request.log_scale);
        assert!(request.validate().is_ok());

        for order in [0, 11] {
            let request = ViewRequest {
                order,
                ..Default::default()
            };
            let err = request.comparison::<f64>().unwrap_err();
            assert!(matches!(err, Error::OrderOutOfRange { min: 1, max: 10, .. }));
        }

        let request = ViewRequest {
            methods: vec![],
            ..Default::default()
        };
        assert!(matches!(request.validate(), Err(Error::NoMethods)));

        let request: ViewRequest = serde_json::from_str(r#"{"target": "exp_neg", "log_scale": true}"#).unwrap();
        assert_eq!(request.target, TargetFunction::ExpNeg);
        assert_eq!(request.order, DEFAULT_ORDER);
        assert!(request.log_scale);
    }
}
