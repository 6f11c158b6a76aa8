//! Containment, intersection and clipping on top of a [`ClipEngine`].
//!
//! Floating-point polygons enter the engine through truncation toward zero
//! (no scaling, so coordinates should already be in engine units) and come
//! back as exact integer-valued points. Only x and y are used.

use super::combine::DegeneratePolicy;
use super::core::{Polygon, PolygonGroup};
use super::engine::{ClipEngine, ClipOp, ClipSession, ClipperEngine, IntRing};
use super::equality::clipper_poly_same;
use crate::error::Result;
use crate::log::{LogSink, TracingSink};
use crate::primitives::IntPoint;
use num_traits::Float;
use tracing::trace;

/// Polygon-set operations over an owned clip engine and log sink.
///
/// Methods take `&mut self`: the engine's registers belong to one
/// operation at a time. Build one clipper per thread.
///
/// # Example
///
/// ```
/// use polyset::polygon::{Polygon, PolygonClipper};
///
/// let outer: Polygon<f64> =
///     Polygon::from(vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
/// let inner: Polygon<f64> =
///     Polygon::from(vec![[2.0, 2.0], [8.0, 2.0], [8.0, 8.0], [2.0, 8.0]]);
///
/// let mut clipper = PolygonClipper::new();
/// assert!(clipper.contains(&outer, &inner).unwrap());
/// assert!(!clipper.contains(&inner, &outer).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolygonClipper<E = ClipperEngine, L = TracingSink> {
    pub(super) engine: E,
    pub(super) sink: L,
    pub(super) policy: DegeneratePolicy,
}

impl PolygonClipper {
    /// Creates a clipper with the Clipper-backed engine, logging through
    /// `tracing`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: ClipEngine, L: LogSink> PolygonClipper<E, L> {
    /// Replaces the clip engine.
    pub fn with_engine<E2: ClipEngine>(self, engine: E2) -> PolygonClipper<E2, L> {
        PolygonClipper {
            engine,
            sink: self.sink,
            policy: self.policy,
        }
    }

    /// Replaces the log sink.
    pub fn with_sink<L2: LogSink>(self, sink: L2) -> PolygonClipper<E, L2> {
        PolygonClipper {
            engine: self.engine,
            sink,
            policy: self.policy,
        }
    }

    /// Sets what a merge does when a step produces an empty region.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn sink(&self) -> &L {
        &self.sink
    }

    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.policy
    }

    /// Returns true if `poly1` contains `poly2`.
    ///
    /// The intersection must be exactly one polygon that matches `poly2`
    /// vertex for vertex at integer resolution, in any rotation or
    /// direction.
    pub fn contains<F: Float>(
        &mut self,
        poly1: &Polygon<F>,
        poly2: &Polygon<F>,
    ) -> Result<bool> {
        let rings = self.run(ClipOp::Intersection, &[to_ring(poly1)?], &[to_ring(poly2)?])?;
        let result: PolygonGroup<F> = from_rings(rings)?;
        Ok(result.len() == 1 && clipper_poly_same(poly2, &result[0]))
    }

    /// Returns true if `poly2` overlaps any polygon of `polygons`.
    ///
    /// Touching along an edge or at a vertex encloses no area and does not
    /// count.
    pub fn intersects<F: Float>(
        &mut self,
        polygons: &[Polygon<F>],
        poly2: &Polygon<F>,
    ) -> Result<bool> {
        let rings = self.run(ClipOp::Intersection, &to_rings(polygons)?, &[to_ring(poly2)?])?;
        Ok(!rings.is_empty())
    }

    /// Clips every contour of `group` to the boundary `clip`.
    pub fn clip_to_poly<F: Float>(
        &mut self,
        group: &[Polygon<F>],
        clip: &Polygon<F>,
    ) -> Result<PolygonGroup<F>> {
        let rings = self.run(ClipOp::Intersection, &to_rings(group)?, &[to_ring(clip)?])?;
        from_rings(rings)
    }

    /// Runs `op` between two contour groups.
    pub fn boolean<F: Float>(
        &mut self,
        op: ClipOp,
        subject: &[Polygon<F>],
        clip: &[Polygon<F>],
    ) -> Result<PolygonGroup<F>> {
        let rings = self.run(op, &to_rings(subject)?, &to_rings(clip)?)?;
        from_rings(rings)
    }

    /// One engine operation inside a fresh session.
    pub(super) fn run(
        &mut self,
        op: ClipOp,
        subject: &[IntRing],
        clip: &[IntRing],
    ) -> Result<Vec<IntRing>> {
        let mut session = ClipSession::new(&mut self.engine);
        session.add_subject_poly_polygon(subject);
        session.add_clip_poly_polygon(clip);
        let result = session.execute(op)?;
        trace!(
            ?op,
            subject = subject.len(),
            clip = clip.len(),
            result = result.len(),
            "clip operation"
        );
        Ok(result)
    }
}

/// Truncates a polygon's xy coordinates into an engine ring.
pub(super) fn to_ring<F: Float>(polygon: &Polygon<F>) -> Result<IntRing> {
    polygon.vertices.iter().map(IntPoint::truncate).collect()
}

pub(super) fn to_rings<F: Float>(group: &[Polygon<F>]) -> Result<Vec<IntRing>> {
    group.iter().map(to_ring).collect()
}

pub(super) fn from_rings<F: Float>(rings: Vec<IntRing>) -> Result<PolygonGroup<F>> {
    rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .map(IntPoint::to_point)
                .collect::<Result<Vec<_>>>()
                .map(Polygon::new)
        })
        .collect()
}

/// Returns true if `poly1` contains `poly2`. See [`PolygonClipper::contains`].
pub fn poly_contain<F: Float>(poly1: &Polygon<F>, poly2: &Polygon<F>) -> Result<bool> {
    PolygonClipper::new().contains(poly1, poly2)
}

/// Returns true if `poly2` overlaps any of `polygons`. See
/// [`PolygonClipper::intersects`].
pub fn poly_intersect<F: Float>(polygons: &[Polygon<F>], poly2: &Polygon<F>) -> Result<bool> {
    PolygonClipper::new().intersects(polygons, poly2)
}

/// Intersects `group` with `clip`. See [`PolygonClipper::clip_to_poly`].
pub fn clip_to_poly<F: Float>(
    group: &[Polygon<F>],
    clip: &Polygon<F>,
) -> Result<PolygonGroup<F>> {
    PolygonClipper::new().clip_to_poly(group, clip)
}
