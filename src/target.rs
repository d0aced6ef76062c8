//! The functions being approximated
//!
//! Only two targets exist: `e^x` and `e^-x`. Both are smooth on [-1, 1] and
//! have closed-form derivatives of every order, which is what the Taylor method
//! relies on.
use std::str::FromStr;

use crate::{
    display::unicode,
    error::{Error, Result},
    value::Value,
};

/// A target function, selected by its tag (`exp` or `exp_neg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetFunction {
    /// f(x) = e^x
    Exp,

    /// f(x) = e^-x
    ExpNeg,
}
impl TargetFunction {
    /// Every target, in the order the batch driver renders them
    pub const ALL: [Self; 2] = [Self::Exp, Self::ExpNeg];

    /// Evaluates the target at `x`.
    pub fn y<T: Value>(self, x: T) -> T {
        match self {
            Self::Exp => x.exp(),
            Self::ExpNeg => (-x).exp(),
        }
    }

    /// Evaluates the target at each of `xs`.
    pub fn solve<T: Value>(self, xs: impl IntoIterator<Item = T>) -> Vec<(T, T)> {
        xs.into_iter().map(|x| (x, self.y(x))).collect()
    }

    /// The `k`-th derivative of the target, evaluated at `x0`.
    ///
    /// - `exp`: `e^x0` for every `k`
    /// - `exp_neg`: `(-1)^k e^-x0`
    pub fn derivative<T: Value>(self, k: usize, x0: T) -> T {
        match self {
            Self::Exp => x0.exp(),
            Self::ExpNeg if k % 2 == 0 => (-x0).exp(),
            Self::ExpNeg => -(-x0).exp(),
        }
    }

    /// The tag used on the command line and in serialized summaries.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::ExpNeg => "exp_neg",
        }
    }

    /// A formula label, such as `y = e^x` or `y = eˣ`.
    #[must_use]
    pub fn label(self, unicode_math: bool) -> String {
        let exponent = match self {
            Self::Exp => "x",
            Self::ExpNeg => "-x",
        };

        if unicode_math {
            format!("y = e{}", unicode::superscript(exponent))
        } else {
            format!("y = e^{exponent}")
        }
    }
}

impl FromStr for TargetFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "exp" => Ok(Self::Exp),
            "exp_neg" => Ok(Self::ExpNeg),
            other => Err(Error::UnknownFunction(other.to_string())),
        }
    }
}

impl std::fmt::Display for TargetFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("exp".parse::<TargetFunction>().unwrap(), TargetFunction::Exp);
        assert_eq!(
            " exp_neg ".parse::<TargetFunction>().unwrap(),
            TargetFunction::ExpNeg
        );

        let err = "sin".parse::<TargetFunction>().unwrap_err();
        assert!(matches!(err, Error::UnknownFunction(ref s) if s == "sin"));
    }

    #[test]
    fn test_values() {
        assert_eq!(TargetFunction::Exp.y(0.0), 1.0);
        assert_eq!(TargetFunction::ExpNeg.y(0.0), 1.0);
        assert!((TargetFunction::Exp.y(1.0) - std::f64::consts::E).abs() < 1e-15);
        assert!((TargetFunction::ExpNeg.y(1.0) - 1.0 / std::f64::consts::E).abs() < 1e-15);
    }

    #[test]
    fn test_derivatives() {
        for k in 0..6 {
            assert_eq!(TargetFunction::Exp.derivative(k, 0.0), 1.0);
        }

        assert_eq!(TargetFunction::ExpNeg.derivative(0, 0.0), 1.0);
        assert_eq!(TargetFunction::ExpNeg.derivative(1, 0.0), -1.0);
        assert_eq!(TargetFunction::ExpNeg.derivative(2, 0.0), 1.0);
        assert_eq!(TargetFunction::ExpNeg.derivative(3, 0.0), -1.0);

        let d = TargetFunction::ExpNeg.derivative(3, 0.5);
        assert!((d + (-0.5f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TargetFunction::Exp.label(false), "y = e^x");
        assert_eq!(TargetFunction::ExpNeg.label(false), "y = e^-x");
        assert_eq!(TargetFunction::Exp.label(true), "y = eˣ");
        assert_eq!(TargetFunction::ExpNeg.label(true), "y = e⁻ˣ");
        assert_eq!(TargetFunction::ExpNeg.to_string(), "exp_neg");
    }
}
