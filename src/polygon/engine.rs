//! Integer clip engine contract and its `geo-clipper` implementation.
//!
//! A [`ClipEngine`] is stateful: rings are loaded into a subject and a clip
//! register, a boolean operation runs over both, and the registers must be
//! cleared before the next operation. [`ClipSession`] ties the clearing to
//! a scope so no caller can forget it.

use crate::error::{PolysetError, Result};
use crate::primitives::IntPoint;
use geo_clipper::ClipperInt;
use geo_types::{Coord, LineString, MultiPolygon, Polygon as GeoPolygon};
use std::ops::{Deref, DerefMut};

/// A closed ring of integer points, without a closing duplicate.
pub type IntRing = Vec<IntPoint>;

/// Largest coordinate magnitude the Clipper library accepts.
pub const CLIPPER_HI_RANGE: i64 = 0x3FFF_FFFF_FFFF_FFFF;

/// Boolean set operation between the subject and clip registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipOp {
    Union,
    Intersection,
    /// Subject minus clip.
    Difference,
}

/// An integer-coordinate boolean polygon engine.
pub trait ClipEngine {
    /// Appends one ring to the subject register.
    fn add_subject_polygon(&mut self, ring: &[IntPoint]);

    /// Appends every ring of a group to the subject register.
    fn add_subject_poly_polygon(&mut self, rings: &[IntRing]) {
        for ring in rings {
            self.add_subject_polygon(ring);
        }
    }

    /// Appends one ring to the clip register.
    fn add_clip_polygon(&mut self, ring: &[IntPoint]);

    /// Appends every ring of a group to the clip register.
    fn add_clip_poly_polygon(&mut self, rings: &[IntRing]) {
        for ring in rings {
            self.add_clip_polygon(ring);
        }
    }

    /// Runs `op` over the registers. The registers are left untouched.
    fn execute(&mut self, op: ClipOp) -> Result<Vec<IntRing>>;

    /// Empties both registers.
    fn clear(&mut self);

    fn union(&mut self) -> Result<Vec<IntRing>> {
        self.execute(ClipOp::Union)
    }

    fn intersection(&mut self) -> Result<Vec<IntRing>> {
        self.execute(ClipOp::Intersection)
    }

    fn difference(&mut self) -> Result<Vec<IntRing>> {
        self.execute(ClipOp::Difference)
    }
}

impl<E: ClipEngine + ?Sized> ClipEngine for &mut E {
    fn add_subject_polygon(&mut self, ring: &[IntPoint]) {
        (**self).add_subject_polygon(ring)
    }

    fn add_clip_polygon(&mut self, ring: &[IntPoint]) {
        (**self).add_clip_polygon(ring)
    }

    fn execute(&mut self, op: ClipOp) -> Result<Vec<IntRing>> {
        (**self).execute(op)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// Default engine, backed by the Clipper library through `geo-clipper`.
///
/// Each register is a list of independent rings. Holes are expressed as
/// rings wound opposite to the ring that contains them.
#[derive(Debug, Clone, Default)]
pub struct ClipperEngine {
    subject: Vec<IntRing>,
    clip: Vec<IntRing>,
}

impl ClipperEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if both registers are empty.
    pub fn is_clear(&self) -> bool {
        self.subject.is_empty() && self.clip.is_empty()
    }
}

impl ClipEngine for ClipperEngine {
    fn add_subject_polygon(&mut self, ring: &[IntPoint]) {
        self.subject.push(ring.to_vec());
    }

    fn add_clip_polygon(&mut self, ring: &[IntPoint]) {
        self.clip.push(ring.to_vec());
    }

    fn execute(&mut self, op: ClipOp) -> Result<Vec<IntRing>> {
        let subject = to_multi_polygon(op, &self.subject)?;
        let clip = to_multi_polygon(op, &self.clip)?;

        let result = match op {
            ClipOp::Union => ClipperInt::union(&subject, &clip),
            ClipOp::Intersection => ClipperInt::intersection(&subject, &clip),
            ClipOp::Difference => ClipperInt::difference(&subject, &clip),
        };
        Ok(from_multi_polygon(&result))
    }

    fn clear(&mut self) {
        self.subject.clear();
        self.clip.clear();
    }
}

/// Packs a register into a multipolygon of hole-free polygons, one per ring.
///
/// Rings with fewer than three points enclose nothing and are skipped.
fn to_multi_polygon(op: ClipOp, rings: &[IntRing]) -> Result<MultiPolygon<i64>> {
    let mut polygons = Vec::with_capacity(rings.len());
    for ring in rings.iter().filter(|ring| ring.len() >= 3) {
        let mut coords = Vec::with_capacity(ring.len() + 1);
        for p in ring {
            if p.x.abs() > CLIPPER_HI_RANGE || p.y.abs() > CLIPPER_HI_RANGE {
                return Err(PolysetError::EngineFailure {
                    op,
                    reason: format!("coordinate ({}, {}) outside allowed range", p.x, p.y),
                });
            }
            coords.push(Coord { x: p.x, y: p.y });
        }
        polygons.push(GeoPolygon::new(LineString::new(coords), vec![]));
    }
    Ok(MultiPolygon::new(polygons))
}

/// Flattens a multipolygon into rings: each exterior followed by its holes.
fn from_multi_polygon(multi: &MultiPolygon<i64>) -> Vec<IntRing> {
    multi
        .0
        .iter()
        .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
        .map(open_ring)
        .filter(|ring| !ring.is_empty())
        .collect()
}

/// Converts a closed `LineString` into a ring without the closing duplicate.
fn open_ring(line: &LineString<i64>) -> IntRing {
    let mut ring: IntRing = line.0.iter().map(|c| IntPoint::new(c.x, c.y)).collect();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Scoped access to a [`ClipEngine`] that guarantees cleared registers.
///
/// The engine is cleared when the session starts and again when it is
/// dropped, so an early return through `?` still leaves it clean.
///
/// # Example
///
/// ```
/// use polyset::polygon::{ClipEngine, ClipSession, ClipperEngine};
/// use polyset::IntPoint;
///
/// let square = |x: i64, y: i64, s: i64| {
///     vec![
///         IntPoint::new(x, y),
///         IntPoint::new(x + s, y),
///         IntPoint::new(x + s, y + s),
///         IntPoint::new(x, y + s),
///     ]
/// };
///
/// let mut engine = ClipperEngine::new();
/// {
///     let mut session = ClipSession::new(&mut engine);
///     session.add_subject_polygon(&square(0, 0, 10));
///     session.add_clip_polygon(&square(5, 5, 10));
///     assert_eq!(session.intersection().unwrap().len(), 1);
/// }
/// assert!(engine.is_clear());
/// ```
pub struct ClipSession<'e, E: ClipEngine + ?Sized> {
    engine: &'e mut E,
}

impl<'e, E: ClipEngine + ?Sized> ClipSession<'e, E> {
    /// Starts a session, clearing any registers left over.
    pub fn new(engine: &'e mut E) -> Self {
        engine.clear();
        Self { engine }
    }
}

impl<E: ClipEngine + ?Sized> Deref for ClipSession<'_, E> {
    type Target = E;

    fn deref(&self) -> &E {
        self.engine
    }
}

impl<E: ClipEngine + ?Sized> DerefMut for ClipSession<'_, E> {
    fn deref_mut(&mut self) -> &mut E {
        self.engine
    }
}

impl<E: ClipEngine + ?Sized> Drop for ClipSession<'_, E> {
    fn drop(&mut self) {
        self.engine.clear();
    }
}
