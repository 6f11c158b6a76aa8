//! Point equality under rounding or integer truncation.
//!
//! Three notions of "same point" are used throughout the crate:
//!
//! - **full**: same dimension and every coordinate equal
//! - **planar**: x and y equal, anything beyond is ignored
//! - **truncated**: x and y equal after truncation to integers, which is
//!   how the clip engine sees them
//!
//! The first two optionally round each coordinate to
//! [`ROUND_DECIMALS`](super::ROUND_DECIMALS) places before comparing.

use super::compare::round_default;
use crate::primitives::Point;
use num_traits::Float;

#[inline]
fn coord_equal<F: Float>(a: F, b: F, round: bool) -> bool {
    if round {
        round_default(a) == round_default(b)
    } else {
        a == b
    }
}

/// Returns true if both points have the same dimension and every
/// coordinate matches, optionally after rounding to 2 decimals.
#[inline]
pub fn point_equal<F: Float>(p1: &Point<F>, p2: &Point<F>, round: bool) -> bool {
    let z_equal = match (p1.z, p2.z) {
        (None, None) => true,
        (Some(a), Some(b)) => coord_equal(a, b, round),
        _ => false,
    };
    z_equal && coord_equal(p1.x, p2.x, round) && coord_equal(p1.y, p2.y, round)
}

/// Returns true if x and y match, optionally after rounding to 2 decimals.
/// The z coordinate is ignored.
#[inline]
pub fn point2d_equal<F: Float>(p1: &Point<F>, p2: &Point<F>, round: bool) -> bool {
    coord_equal(p1.x, p2.x, round) && coord_equal(p1.y, p2.y, round)
}

/// Returns true if x and y match after truncation toward zero.
///
/// No rounding happens: `1.99` and `1.01` are equal, `1.99` and `2.0` are not.
#[inline]
pub fn clipper_point_equal<F: Float>(p1: &Point<F>, p2: &Point<F>) -> bool {
    p1.x.trunc() == p2.x.trunc() && p1.y.trunc() == p2.y.trunc()
}

/// Returns true if any two points are equal under `eq`.
///
/// O(n²) pairwise scan; empty and single-point inputs have no duplicates.
pub fn has_duplicate_by<F, E>(points: &[Point<F>], eq: E) -> bool
where
    F: Float,
    E: Fn(&Point<F>, &Point<F>) -> bool,
{
    points
        .iter()
        .enumerate()
        .any(|(i, p)| points[i + 1..].iter().any(|q| eq(p, q)))
}

/// Returns true if `points` contains two points equal under [`point_equal`].
pub fn has_duplicate<F: Float>(points: &[Point<F>], round: bool) -> bool {
    has_duplicate_by(points, |a, b| point_equal(a, b, round))
}

/// Returns true if `points` contains two points equal under [`point2d_equal`].
///
/// # Example
///
/// ```
/// use polyset::tolerance::has2d_duplicate;
/// use polyset::Point;
///
/// let points = vec![
///     Point::new(1.0, 1.0),
///     Point::new(2.0, 2.0),
///     Point::new(1.001, 1.001),
/// ];
/// assert!(has2d_duplicate(&points, true));
/// assert!(!has2d_duplicate(&points, false));
/// ```
pub fn has2d_duplicate<F: Float>(points: &[Point<F>], round: bool) -> bool {
    has_duplicate_by(points, |a, b| point2d_equal(a, b, round))
}

/// An equivalence relation over points.
///
/// This is the capability the cyclic polygon matcher is parameterized by.
/// Any `Fn(&Point<F>, &Point<F>) -> bool` qualifies, as do the named
/// strategies in [`PointMatch`].
pub trait PointEquivalence<F> {
    /// Returns true if `a` and `b` denote the same point.
    fn equivalent(&self, a: &Point<F>, b: &Point<F>) -> bool;
}

impl<F, T> PointEquivalence<F> for T
where
    T: Fn(&Point<F>, &Point<F>) -> bool,
{
    #[inline]
    fn equivalent(&self, a: &Point<F>, b: &Point<F>) -> bool {
        self(a, b)
    }
}

/// The built-in point equivalence strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointMatch {
    /// [`point_equal`]: every coordinate, same dimension.
    Full {
        /// Round to 2 decimals first.
        round: bool,
    },
    /// [`point2d_equal`]: x and y only.
    Planar {
        /// Round to 2 decimals first.
        round: bool,
    },
    /// [`clipper_point_equal`]: integer parts of x and y.
    Truncated,
}

impl<F: Float> PointEquivalence<F> for PointMatch {
    #[inline]
    fn equivalent(&self, a: &Point<F>, b: &Point<F>) -> bool {
        match *self {
            PointMatch::Full { round } => point_equal(a, b, round),
            PointMatch::Planar { round } => point2d_equal(a, b, round),
            PointMatch::Truncated => clipper_point_equal(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_equal_rounding() {
        let a = Point::new_3d(1.0, 2.0, 3.0);
        let b = Point::new_3d(1.004, 2.0, 2.996);
        assert!(point_equal(&a, &b, true));
        assert!(!point_equal(&a, &b, false));
        assert!(point_equal(&a, &a, false));
    }

    #[test]
    fn test_point_equal_requires_same_dimension() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new_3d(1.0, 2.0, 0.0);
        assert!(!point_equal(&a, &b, true));
        assert!(!point_equal(&a, &b, false));
    }

    #[test]
    fn test_point2d_equal_ignores_z() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new_3d(1.001, 1.999, 50.0);
        assert!(point2d_equal(&a, &b, true));
        assert!(!point2d_equal(&a, &b, false));
    }

    #[test]
    fn test_rounding_boundary() {
        // 1.006 rounds to 1.01, 1.004 rounds to 1.00
        let a = Point::new(1.006, 0.0);
        let b = Point::new(1.004, 0.0);
        assert!(!point2d_equal(&a, &b, true));
    }

    #[test]
    fn test_clipper_point_equal_truncates() {
        assert!(clipper_point_equal(&Point::new(1.99, 5.1), &Point::new(1.01, 5.9)));
        assert!(!clipper_point_equal(&Point::new(1.99, 5.0), &Point::new(2.0, 5.0)));
        assert!(clipper_point_equal(&Point::new(-0.5, 0.0), &Point::new(0.5, 0.0)));
    }

    #[test]
    fn test_has2d_duplicate() {
        let points = vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(1.001, 1.001),
        ];
        assert!(has2d_duplicate(&points, true));
        assert!(!has2d_duplicate(&points, false));
    }

    #[test]
    fn test_has_duplicate_exact() {
        let points = vec![
            Point::new_3d(0.0, 0.0, 0.0),
            Point::new_3d(1.0, 0.0, 0.0),
            Point::new_3d(0.0, 0.0, 0.0),
        ];
        assert!(has_duplicate(&points, false));

        let distinct_z = vec![Point::new_3d(0.0, 0.0, 0.0), Point::new_3d(0.0, 0.0, 1.0)];
        assert!(!has_duplicate(&distinct_z, true));
        assert!(has2d_duplicate(&distinct_z, true));
    }

    #[test]
    fn test_has_duplicate_trivial_inputs() {
        let empty: Vec<Point<f64>> = Vec::new();
        assert!(!has_duplicate(&empty, true));
        assert!(!has2d_duplicate(&[Point::new(1.0, 1.0)], true));
    }

    #[test]
    fn test_point_match_strategies() {
        let a = Point::new_3d(1.2, 3.4, 0.0);
        let b = Point::new(1.7, 3.9);
        assert!(!PointMatch::Full { round: true }.equivalent(&a, &b));
        assert!(!PointMatch::Planar { round: true }.equivalent(&a, &b));
        assert!(PointMatch::Truncated.equivalent(&a, &b));
    }

    #[test]
    fn test_closure_equivalence() {
        let near = |a: &Point<f64>, b: &Point<f64>| (a.x - b.x).abs() < 0.5;
        assert!(near.equivalent(&Point::new(0.0, 0.0), &Point::new(0.4, 9.0)));
    }
}
