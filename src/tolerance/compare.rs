//! Three-way number comparison with an optional tolerance band.

use num_traits::Float;
use std::cmp::Ordering;

/// Number of decimal places used by every `round = true` entry point.
pub const ROUND_DECIMALS: i32 = 2;

/// Compares two numbers, treating values within `epsilon` as equal.
///
/// Without an epsilon this is the standard ordering. With one, values
/// whose absolute difference is at most `epsilon` (inclusive) compare
/// `Equal`; otherwise the standard ordering applies. Incomparable values
/// (NaN) compare `Equal` rather than panicking.
///
/// # Example
///
/// ```
/// use polyset::tolerance::compare_numbers;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_numbers(1.0, 1.25, Some(0.25)), Ordering::Equal);
/// assert_eq!(compare_numbers(1.0, 1.5, Some(0.25)), Ordering::Less);
/// assert_eq!(compare_numbers(2.0, 1.0, None), Ordering::Greater);
/// ```
#[inline]
pub fn compare_numbers<F: Float>(n1: F, n2: F, epsilon: Option<F>) -> Ordering {
    if let Some(eps) = epsilon {
        if (n1 - n2).abs() <= eps {
            return Ordering::Equal;
        }
    }
    n1.partial_cmp(&n2).unwrap_or(Ordering::Equal)
}

/// Rounds `value` to `places` decimal places, halves away from zero.
#[inline]
pub fn round_to<F: Float>(value: F, places: i32) -> F {
    let ten = F::from(10.0).unwrap_or_else(F::one);
    let factor = ten.powi(places);
    (value * factor).round() / factor
}

/// Rounds to [`ROUND_DECIMALS`] places.
#[inline]
pub(crate) fn round_default<F: Float>(value: F) -> F {
    round_to(value, ROUND_DECIMALS)
}
