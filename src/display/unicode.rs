//! Unicode formatting utilities
//!
//! Only the characters that appear in exponents, Chebyshev ranks and axis
//! labels are mapped: digits, signs, parentheses, and the letters `n` and `x`.
use std::ops::Range;

use crate::value::Value;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Formats a number in fixed point inside `fixed_range`, in scientific notation outside it.
///
/// `precision` is the number of decimal places in either form.
///
/// ```
/// # use expapprox::display::unicode::float;
/// assert_eq!(float(0.5, Some(1e-3..1e3), 2), "0.50");
/// assert_eq!(float(2.5e-5, Some(1e-3..1e3), 1), "2.5e-5");
/// assert_eq!(float(0.5, None, 2), "5.00e-1");
/// ```
pub fn float<T: Value>(n: T, fixed_range: Option<Range<T>>, precision: usize) -> String {
    match fixed_range {
        Some(range) if range.contains(&n) => format!("{n:.precision$}"),
        _ => format!("{n:.precision$e}"),
    }
}

/// Converts a string into superscript, dropping characters with no superscript form.
///
/// ```
/// # use expapprox::display::unicode::superscript;
/// assert_eq!(superscript("-x"), "⁻ˣ");
/// assert_eq!(superscript("12"), "¹²");
/// ```
pub fn superscript(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '0'..='9' => digit(c).map(|d| SUPERSCRIPT_DIGITS[d]),
            '+' => Some('⁺'),
            '-' | '\u{2212}' => Some('⁻'),
            '(' => Some('⁽'),
            ')' => Some('⁾'),
            'n' => Some('ⁿ'),
            'x' => Some('ˣ'),
            _ => None,
        })
        .collect()
}

/// Converts a string into subscript, dropping characters with no subscript form.
///
/// ```
/// # use expapprox::display::unicode::subscript;
/// assert_eq!(subscript("n"), "ₙ");
/// assert_eq!(subscript("10"), "₁₀");
/// ```
pub fn subscript(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '0'..='9' => digit(c).map(|d| SUBSCRIPT_DIGITS[d]),
            '+' => Some('₊'),
            '-' | '\u{2212}' => Some('₋'),
            '(' => Some('₍'),
            ')' => Some('₎'),
            'n' => Some('ₙ'),
            'x' => Some('ₓ'),
            _ => None,
        })
        .collect()
}

fn digit(c: char) -> Option<usize> {
    c.to_digit(10).map(|d| d as usize)
}
