//! Error types for building and evaluating approximations
//!
//! This module defines the failure modes of the approximation methods and the
//! comparison layer built on top of them, along with a convenient `Result` alias.

/// Errors that can occur while building or evaluating an approximation.
///
/// Every failure is local to a single evaluation; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested target function tag is not one of `exp` or `exp_neg`.
    #[error("Unknown target function `{0}`; expected `exp` or `exp_neg`")]
    UnknownFunction(String),

    /// The requested approximation method id is not in the registry.
    #[error("Unknown approximation method `{0}`")]
    UnknownMethod(String),

    /// The specified basis cannot have the given number of coefficients.
    #[error("Specified basis cannot have exactly {0} coefficients")]
    InvalidNumberOfParameters(usize),

    /// The interpolation system built from the nodes is singular.
    ///
    /// Usually two nodes coincide, or the order is so high the Vandermonde
    /// matrix is numerically rank deficient.
    #[error("Vandermonde matrix is singular; cannot interpolate through {n} nodes")]
    SingularMatrix {
        /// Number of interpolation nodes
        n: usize,
    },

    /// The approximation order is outside what the caller accepts.
    #[error("Approximation order {order} is outside {min}..={max}")]
    OrderOutOfRange {
        /// Requested order
        order: usize,
        /// Smallest accepted order
        min: usize,
        /// Largest accepted order
        max: usize,
    },

    /// A comparison was requested without any methods selected.
    #[error("At least one approximation method must be selected")]
    NoMethods,

    /// The input x-value is outside the stable domain of the basis.
    ///
    /// The Chebyshev basis is only defined on [-1, 1]; unchecked evaluation
    /// returns NaN instead of this error.
    #[error("x = {0} is outside the basis domain {1}..={2}")]
    DataRange(String, String, String),

    /// A numeric value could not be cast to the target type.
    #[error("Failed to cast value to target type")]
    CastFailed,

    /// Failed to solve the algebraic system.
    ///
    /// Contains a static string describing the solver error.
    #[error("Failed to solve: {0}")]
    Algebra(&'static str),
}

/// Result type for approximation operations
pub type Result<T> = std::result::Result<T, Error>;
