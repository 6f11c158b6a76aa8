//! Sequential union folds over polygons and polygon groups.
//!
//! Both folds accumulate in engine (integer) coordinates: step `i` unions
//! input `i` into everything merged so far, so the steps cannot run in
//! parallel.

use super::clip::{from_rings, to_ring, to_rings, PolygonClipper};
use super::core::{Polygon, PolygonGroup};
use super::engine::{ClipEngine, ClipOp};
use crate::error::{PolysetError, Result};
use crate::log::{LogSink, Severity};
use num_traits::Float;
use tracing::{debug, instrument};

/// Message logged when a merge step comes back empty.
pub const DEGENERATE_MERGE_MESSAGE: &str = "possible duplicate objects in same position";

/// What [`PolygonClipper::merge`] does after a step produces an empty region.
///
/// The empty step is always logged at [`Severity::Error`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Keep folding from the empty accumulator.
    #[default]
    Continue,
    /// Stop with [`PolysetError::DegenerateMerge`].
    Abort,
}

impl<E: ClipEngine, L: LogSink> PolygonClipper<E, L> {
    /// Unions a list of polygons into one group.
    ///
    /// No input gives an empty group and a single input is returned
    /// projected to xy, neither touching the engine. Otherwise the first
    /// two polygons are unioned and each further polygon is unioned into
    /// the running result.
    #[instrument(skip_all, fields(inputs = polygons.len()))]
    pub fn union<F: Float>(&mut self, polygons: &[Polygon<F>]) -> Result<PolygonGroup<F>> {
        let (first, second, rest) = match polygons {
            [] => return Ok(Vec::new()),
            [only] => return Ok(vec![only.to_xy(None)]),
            [first, second, rest @ ..] => (first, second, rest),
        };

        let mut merged = self.run(ClipOp::Union, &[to_ring(first)?], &[to_ring(second)?])?;
        for (i, polygon) in rest.iter().enumerate() {
            merged = self.run(ClipOp::Union, &merged, &[to_ring(polygon)?])?;
            debug!(step = i + 2, contours = merged.len(), "union step");
        }
        from_rings(merged)
    }

    /// Unions a list of polygon groups, holes included, into one group.
    ///
    /// No input gives an empty group and a single group is returned as is.
    /// A step whose result is empty is logged as an error through the sink;
    /// the [`DegeneratePolicy`] then decides whether to carry on.
    #[instrument(skip_all, fields(inputs = groups.len()))]
    pub fn merge<F: Float>(&mut self, groups: &[PolygonGroup<F>]) -> Result<PolygonGroup<F>> {
        let (first, rest) = match groups {
            [] => return Ok(Vec::new()),
            [only] => return Ok(only.clone()),
            [first, rest @ ..] => (first, rest),
        };

        let mut merged = to_rings(first)?;
        for (i, group) in rest.iter().enumerate() {
            let step = i + 1;
            merged = self.run(ClipOp::Union, &merged, &to_rings(group)?)?;
            debug!(step, contours = merged.len(), "merge step");

            if merged.is_empty() {
                self.sink.log(
                    Severity::Error,
                    DEGENERATE_MERGE_MESSAGE,
                    &format_args!("merge step {step} of {}", groups.len() - 1),
                );
                if self.policy == DegeneratePolicy::Abort {
                    return Err(PolysetError::DegenerateMerge { step });
                }
            }
        }
        from_rings(merged)
    }
}

/// Unions `polygons` with the default clipper. See [`PolygonClipper::union`].
///
/// # Example
///
/// ```
/// use polyset::polygon::{get_union, Polygon};
///
/// let a: Polygon<f64> =
///     Polygon::from(vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
/// let b: Polygon<f64> =
///     Polygon::from(vec![[5.0, 5.0], [15.0, 5.0], [15.0, 15.0], [5.0, 15.0]]);
///
/// let union = get_union(&[a, b]).unwrap();
/// assert_eq!(union.len(), 1);
/// assert_eq!(union[0].len(), 8);
/// assert_eq!(union[0].area(), 175.0);
/// ```
pub fn get_union<F: Float>(polygons: &[Polygon<F>]) -> Result<PolygonGroup<F>> {
    PolygonClipper::new().union(polygons)
}

/// Merges `groups` with the default clipper. See [`PolygonClipper::merge`].
pub fn merge_polygons<F: Float>(groups: &[PolygonGroup<F>]) -> Result<PolygonGroup<F>> {
    PolygonClipper::new().merge(groups)
}
