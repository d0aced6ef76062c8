//! Numeric types and iteration utilities for approximations.
//!
//! This module defines the [`Value`] trait, which abstracts the numeric
//! types that can be used for building and evaluating approximations, ensuring
//! compatibility with nalgebra, floating-point operations, and formatting.
//!
//! # Traits
//!
//! - [`Value`]: Extends `RealField`, `Scalar`, and `FloatCore` to provide:
//!   - A canonical `two()` constant.
//!   - `try_cast` for safe type conversion with error handling.
//!   - `powi` and `abs` without trait ambiguity.
//!   - An exact-as-possible `factorial`.
//!
//! # Iterators
//!
//! - [`Linspace`]: A fixed-count evenly spaced iterator, endpoints included,
//!   used for sample grids and equidistant nodes.
//!
//! # Example
//!
//! ```rust
//! use expapprox::value::{Linspace, Value};
//!
//! // Five points from -1 to 1: -1.0, -0.5, 0.0, 0.5, 1.0
//! let grid: Vec<f64> = Linspace::new(-1.0, 1.0, 5).collect();
//! assert_eq!(grid.len(), 5);
//!
//! let f4 = f64::factorial(4);
//! assert_eq!(f4, 24.0);
//! ```
use crate::error::Error;

/// Numeric type for approximations
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::LowerExp
{
    /// Returns the value 2.0
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Converts the value to `f64`
    fn as_f64(&self) -> Option<f64> {
        num_traits::cast(*self)
    }

    /// Raises the value to the power of an integer
    #[must_use]
    fn powi(self, n: i32) -> Self {
        nalgebra::ComplexField::powi(self, n)
    }

    /// Get the absolute value for a numeric type
    #[must_use]
    fn abs(self) -> Self {
        nalgebra::ComplexField::abs(self)
    }

    /// Returns the absolute difference between two values.
    #[must_use]
    fn abs_sub(self, other: Self) -> Self {
        nalgebra::ComplexField::abs(self - other)
    }

    /// Check if the value is negative
    fn is_sign_negative(&self) -> bool {
        self < &Self::zero()
    }

    /// True if the value is neither NaN nor infinite
    fn is_finite_value(&self) -> bool {
        num_traits::float::FloatCore::is_finite(*self)
    }

    /// Computes the factorial of a non-negative integer `n`.
    ///
    /// The product is accumulated in integers while it fits in a `u64`
    /// (`n <= 20`), so the result is exact wherever the float can hold it.
    #[must_use]
    fn factorial(n: usize) -> Self {
        let mut exact: u64 = 1;
        let mut i = 2;
        while i <= n {
            match exact.checked_mul(i as u64) {
                Some(next) => exact = next,
                None => break,
            }
            i += 1;
        }

        let mut result = Self::try_cast(exact).unwrap_or(Self::infinity());
        for j in i..=n {
            result *= Self::from_positive_int(j);
        }
        result
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::try_cast(n).unwrap_or(Self::infinity())
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::LowerExp
{
}

/// Iterator over `count` evenly spaced values from `start` to `end`, inclusive.
///
/// - `count == 0` yields nothing
/// - `count == 1` yields only `start`
/// - The last value is exactly `end`, not an accumulated approximation of it
#[derive(Debug, Clone)]
pub struct Linspace<T: Value> {
    start: T,
    end: T,
    step: T,
    count: usize,
    index: usize,
}
impl<T: Value> Linspace<T> {
    /// Creates a new evenly spaced iterator
    pub fn new(start: T, end: T, count: usize) -> Self {
        let step = if count > 1 {
            (end - start) / T::from_positive_int(count - 1)
        } else {
            T::zero()
        };

        Self {
            start,
            end,
            step,
            count,
            index: 0,
        }
    }
}
impl<T: Value> Iterator for Linspace<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let value = if self.count > 1 && self.index == self.count - 1 {
            self.end
        } else {
            self.start + T::from_positive_int(self.index) * self.step
        };
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}
impl<T: Value> ExactSizeIterator for Linspace<T> {}

/// Extension trait for accessing the `x` and `y` coordinates of a set of points.
///
/// # Examples
///
/// ```
/// # use expapprox::value::CoordExt;
/// let data = vec![(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
/// assert_eq!(data.y(), vec![-2.0, 3.0, 1.0]);
/// ```
pub trait CoordExt<T: Value> {
    /// Returns an iterator over the x-coordinates.
    fn x_iter(&self) -> impl Iterator<Item = T>;

    /// Returns an iterator over the y-coordinates.
    fn y_iter(&self) -> impl Iterator<Item = T>;

    /// Returns the x-coordinates.
    fn x(&self) -> Vec<T> {
        self.x_iter().collect()
    }

    /// Returns the y-coordinates.
    fn y(&self) -> Vec<T> {
        self.y_iter().collect()
    }

    /// Converts the coordinates to `f64` pairs.
    ///
    /// # Errors
    /// Returns an error if any value cannot be represented as `f64`.
    fn as_f64(&self) -> Result<Vec<(f64, f64)>, Error> {
        self.x_iter()
            .zip(self.y_iter())
            .map(|(x, y)| Ok((x.as_f64().ok_or(Error::CastFailed)?, y.as_f64().ok_or(Error::CastFailed)?)))
            .collect()
    }
}
impl<T: Value> CoordExt<T> for [(T, T)] {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}
impl<T: Value> CoordExt<T> for Vec<(T, T)> {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}
