//! Polygon equality up to rotation and winding direction.

use super::core::Polygon;
use super::cyclic::{align_cyclic, CyclicAlignment, CyclicMismatch};
use crate::tolerance::{point2d_equal, PointEquivalence, PointMatch};
use num_traits::Float;

/// Aligns two polygons under `eq`, reporting why alignment failed.
///
/// See [`align_cyclic`] for the algorithm.
pub fn align_polygons<F, E>(
    poly1: &Polygon<F>,
    poly2: &Polygon<F>,
    eq: &E,
) -> Result<CyclicAlignment, CyclicMismatch>
where
    F: Float,
    E: PointEquivalence<F> + ?Sized,
{
    align_cyclic(&poly1.vertices, &poly2.vertices, |a, b| eq.equivalent(a, b))
}

/// Returns true if `poly2` is `poly1` read from some start vertex in
/// either direction, with vertices compared by `eq`.
///
/// Two empty polygons are equal. Polygons with duplicate vertices may
/// compare equal when they are not.
///
/// # Example
///
/// ```
/// use polyset::polygon::{poly_check, Polygon};
/// use polyset::tolerance::PointMatch;
///
/// let a: Polygon<f64> = Polygon::from(vec![[0.0, 0.0], [4.0, 0.0], [4.0, 3.0]]);
/// let b: Polygon<f64> = Polygon::from(vec![[4.0, 3.0], [4.0, 0.0], [0.0, 0.0]]);
///
/// assert!(poly_check(&a, &b, &PointMatch::Planar { round: false }));
/// ```
pub fn poly_check<F, E>(poly1: &Polygon<F>, poly2: &Polygon<F>, eq: &E) -> bool
where
    F: Float,
    E: PointEquivalence<F> + ?Sized,
{
    align_polygons(poly1, poly2, eq).is_ok()
}

/// [`poly_check`] comparing x and y only.
pub fn poly2d_same<F: Float>(poly1: &Polygon<F>, poly2: &Polygon<F>, round: bool) -> bool {
    poly_check(poly1, poly2, &PointMatch::Planar { round })
}

/// [`poly_check`] comparing every coordinate; dimensions must agree.
pub fn poly_same<F: Float>(poly1: &Polygon<F>, poly2: &Polygon<F>, round: bool) -> bool {
    poly_check(poly1, poly2, &PointMatch::Full { round })
}

/// [`poly_check`] comparing truncated integer x and y, the resolution of
/// the clip engine.
pub fn clipper_poly_same<F: Float>(poly1: &Polygon<F>, poly2: &Polygon<F>) -> bool {
    poly_check(poly1, poly2, &PointMatch::Truncated)
}

/// Position-for-position 2D equality, without rotation or reversal.
pub fn poly2d_equal<F: Float>(poly1: &Polygon<F>, poly2: &Polygon<F>, round: bool) -> bool {
    poly1.len() == poly2.len()
        && poly1
            .vertices
            .iter()
            .zip(&poly2.vertices)
            .all(|(a, b)| point2d_equal(a, b, round))
}
