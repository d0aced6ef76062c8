//! # Expapprox
//! ## How wrong is your polynomial, and where?
//!
//! Four classic ways to approximate `e^x` and `e^-x` by a polynomial of order `n` on `[-1, 1]`,
//! and the tools to compare how far each one strays from the real thing.
//!
//! I provide a set of tools designed to help you:
//! - Build an approximation with any of the four methods
//! - Sample its signed error `f(x) - Pₙ(x)` over a dense grid
//! - Compare methods side by side, as numbers or as a PNG plot (`plotting` feature)
//!
//! ```rust
//! # use expapprox::{comparison::Comparison, error_curve::SampleGrid, method::Method, target::TargetFunction};
//! let comparison = Comparison::<f64>::new(TargetFunction::Exp, 4, &Method::ALL, &SampleGrid::default());
//!
//! for curve in comparison.curves() {
//!     println!("{:<28} {:.3e}", curve.method.name(), curve.curve.max_abs_error());
//! }
//!
//! // Interpolating at Chebyshev nodes is close to minimax; Taylor is not
//! let error = |m: Method| comparison.curves().iter().find(|c| c.method == m).unwrap().curve.max_abs_error();
//! assert!(error(Method::ChebyshevNodes) < error(Method::Taylor));
//! ```
//!
//! # Core Concepts
//! - A [`target::TargetFunction`] is the function being approximated: `e^x` or `e^-x`.
//! - A [`method::Method`] is one of the approximation strategies:
//!     - [`method::Method::Taylor`]: the truncated Maclaurin series. Exact at 0, worst at the ends.
//!     - [`method::Method::ChebyshevNodes`]: interpolation at the Chebyshev nodes.
//!     - [`method::Method::ChebyshevLeastSquares`]: a discrete least-squares projection onto `T₀..Tₙ`.
//!     - [`method::Method::EquidistantNodes`]: interpolation at evenly spaced nodes.
//! - A [`Polynomial`] holds the result, in either the [`MonomialPolynomial`] or [`ChebyshevPolynomial`] form.
//! - An [`error_curve::ErrorCurve`] is the signed error of one approximation over a [`error_curve::SampleGrid`].
//! - A [`comparison::Comparison`] runs several methods for one target and order.
//!
//! # Implementation Details
//!
//! Linear systems and conditioning estimates use the `nalgebra` library.
//! All routines are generic over [`value::Value`], with `f64` as the default.
//!
//! # Testing utilities
//!
//! See [`test`] for the assertion macros and helpers used throughout this crate.
//!
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod test;

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub mod plotting;

pub mod basis;
pub mod comparison;
pub mod display;
pub mod error;
pub mod error_curve;
pub mod method;
pub mod target;
pub mod value;

mod polynomial;

pub use basis::chebyshev::ChebyshevPolynomial;
pub use basis::monomial::MonomialPolynomial;
pub use error::{Error, Result};
pub use polynomial::Polynomial;

pub use nalgebra;

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub use plotters;
