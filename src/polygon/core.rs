//! Core polygon types and point-list helpers.

use crate::ordering::{max_xy_point, min_xy_point};
use crate::primitives::{Point, PointTransform};
use num_traits::Float;

/// A closed loop of points.
///
/// The polygon is implicitly closed (the last vertex connects to the
/// first) and carries no closing duplicate. Winding is not significant
/// for the `poly_same` family of comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    pub vertices: Vec<Point<F>>,
}

/// An ordered set of contours describing one region: outer boundaries and
/// holes, holes wound opposite to their outer boundary.
pub type PolygonGroup<F> = Vec<Polygon<F>>;

impl<F: Float> Polygon<F> {
    /// Creates a polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area of the xy projection (shoelace formula).
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        let n = self.vertices.len();
        if n < 3 {
            return F::zero();
        }

        let twice = (0..n).fold(F::zero(), |acc, i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            acc + a.x * b.y - b.x * a.y
        });
        twice / (F::one() + F::one())
    }

    /// Returns the absolute area of the xy projection.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the xy bounding box as (min, max) 2D points.
    pub fn bounding_box(&self) -> Option<(Point<F>, Point<F>)> {
        Some((min_xy_point(&self.vertices)?, max_xy_point(&self.vertices)?))
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Projects onto the xy plane, optionally transforming each point first.
    ///
    /// The transform sees the full point, z included; only afterwards is z
    /// dropped. Coordinates are not rounded.
    pub fn to_xy(&self, transform: Option<&dyn PointTransform<F>>) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|&p| match transform {
                Some(t) => t.apply(p).xy(),
                None => p.xy(),
            })
            .collect();
        Self { vertices }
    }

    /// Translates every vertex. See [`poly_move`].
    pub fn translated(&self, offset: Point<F>) -> Self {
        poly_move(self, offset)
    }
}

impl<F: Float, P: Into<Point<F>>> From<Vec<P>> for Polygon<F> {
    fn from(points: Vec<P>) -> Self {
        Self::new(points.into_iter().map(Into::into).collect())
    }
}

impl<F: Float, P: Into<Point<F>>> FromIterator<P> for Polygon<F> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Projects every polygon onto the xy plane.
pub fn getxy<F: Float>(
    polygons: &[Polygon<F>],
    transform: Option<&dyn PointTransform<F>>,
) -> PolygonGroup<F> {
    polygons.iter().map(|p| p.to_xy(transform)).collect()
}

/// Translates a polygon by `offset`.
///
/// A 2D offset leaves z untouched. 2D vertices stay 2D whatever the offset.
pub fn poly_move<F: Float>(polygon: &Polygon<F>, offset: Point<F>) -> Polygon<F> {
    let dz = offset.z_or_zero();
    polygon
        .vertices
        .iter()
        .map(|p| p.translated(offset.x, offset.y, dz))
        .collect()
}

/// Builds the side quads joining two loops of equal length.
///
/// Quad `i` is `[a[i], b[i], b[j], a[j]]` with `j = (i + 1) % n`, the wall
/// between a footprint and its lifted copy. Returns an empty group when the
/// loops differ in length.
pub fn poly_connect<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> PolygonGroup<F> {
    let n = a.len();
    if n != b.len() {
        return Vec::new();
    }

    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            Polygon::new(vec![
                a.vertices[i],
                b.vertices[i],
                b.vertices[j],
                a.vertices[j],
            ])
        })
        .collect()
}
