//! Lexicographic point comparison and extreme-point queries.

use crate::primitives::Point;
use crate::tolerance::compare_numbers;
use num_traits::Float;
use std::cmp::Ordering;

/// Planar axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The other planar axis.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Index into `[x, y]`-ordered per-axis settings.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// Reads this axis' coordinate from `p`.
    #[inline]
    pub fn coord<F: Float>(self, p: &Point<F>) -> F {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Compares two points lexicographically starting from `primary`.
///
/// The order is primary axis, the other planar axis, then z. The two
/// planar components use `epsilon` (see
/// [`compare_numbers`](crate::tolerance::compare_numbers)); z is compared
/// exactly, with a missing z read as 0.
///
/// # Example
///
/// ```
/// use polyset::ordering::{compare_points, Axis};
/// use polyset::Point;
/// use std::cmp::Ordering;
///
/// let a = Point::new(1.0, 5.0);
/// let b = Point::new(1.05, 2.0);
///
/// assert_eq!(compare_points(&a, &b, Axis::X, None), Ordering::Less);
/// assert_eq!(compare_points(&a, &b, Axis::X, Some(0.1)), Ordering::Greater);
/// assert_eq!(compare_points(&a, &b, Axis::Y, None), Ordering::Greater);
/// ```
pub fn compare_points<F: Float>(
    p1: &Point<F>,
    p2: &Point<F>,
    primary: Axis,
    epsilon: Option<F>,
) -> Ordering {
    let secondary = primary.other();
    compare_numbers(primary.coord(p1), primary.coord(p2), epsilon)
        .then_with(|| compare_numbers(secondary.coord(p1), secondary.coord(p2), epsilon))
        .then_with(|| compare_numbers(p1.z_or_zero(), p2.z_or_zero(), None))
}

/// Orders by y, then by x.
fn compare_y_then_x<F: Float>(a: &Point<F>, b: &Point<F>) -> Ordering {
    compare_points(a, b, Axis::Y, None)
}

/// Returns the point with the lowest y, ties broken by the lowest x.
///
/// Returns `None` for an empty slice. When several points tie on both,
/// the first one wins.
pub fn min_point<F: Float>(points: &[Point<F>]) -> Option<Point<F>> {
    points
        .iter()
        .copied()
        .reduce(|best, p| {
            if compare_y_then_x(&p, &best) == Ordering::Less {
                p
            } else {
                best
            }
        })
}

/// Returns the point with the highest y, ties broken by the highest x.
///
/// Returns `None` for an empty slice. When several points tie on both,
/// the first one wins.
pub fn max_point<F: Float>(points: &[Point<F>]) -> Option<Point<F>> {
    points
        .iter()
        .copied()
        .reduce(|best, p| {
            if compare_y_then_x(&p, &best) == Ordering::Greater {
                p
            } else {
                best
            }
        })
}

/// Returns the 2D lower-left corner `(min x, min y)` of the points.
pub fn min_xy_point<F: Float>(points: &[Point<F>]) -> Option<Point<F>> {
    let first = points.first()?;
    let (x, y) = points
        .iter()
        .fold((first.x, first.y), |(x, y), p| (x.min(p.x), y.min(p.y)));
    Some(Point::new(x, y))
}

/// Returns the 2D upper-right corner `(max x, max y)` of the points.
pub fn max_xy_point<F: Float>(points: &[Point<F>]) -> Option<Point<F>> {
    let first = points.first()?;
    let (x, y) = points
        .iter()
        .fold((first.x, first.y), |(x, y), p| (x.max(p.x), y.max(p.y)));
    Some(Point::new(x, y))
}
