//! Polygons, polygon equality and boolean set operations.
//!
//! This module provides:
//! - The [`Polygon`] loop type and [`PolygonGroup`] contour lists
//! - Rotation- and direction-tolerant equality ([`poly_same`] and friends)
//!   built on the generic cyclic matcher [`align_cyclic`]
//! - An integer clip engine contract ([`ClipEngine`]) with a Clipper-backed
//!   default ([`ClipperEngine`])
//! - Containment, intersection and clipping ([`PolygonClipper`])
//! - Sequential union folds ([`get_union`], [`merge_polygons`])
//!
//! # Example
//!
//! ```
//! use polyset::polygon::{get_union, poly_contain, poly_intersect, Polygon};
//!
//! // Two overlapping squares
//! let a: Polygon<f64> =
//!     Polygon::from(vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
//! let b: Polygon<f64> =
//!     Polygon::from(vec![[5.0, 5.0], [15.0, 5.0], [15.0, 15.0], [5.0, 15.0]]);
//!
//! assert!(poly_intersect(&[a.clone()], &b).unwrap());
//! assert!(!poly_contain(&a, &b).unwrap());
//!
//! let union = get_union(&[a, b]).unwrap();
//! assert_eq!(union.len(), 1); // One concave polygon
//! ```

mod clip;
mod combine;
mod core;
mod cyclic;
mod engine;
mod equality;

pub use clip::{clip_to_poly, poly_contain, poly_intersect, PolygonClipper};
pub use combine::{get_union, merge_polygons, DegeneratePolicy, DEGENERATE_MERGE_MESSAGE};
pub use self::core::{getxy, poly_connect, poly_move, Polygon, PolygonGroup};
pub use cyclic::{align_cyclic, CyclicAlignment, CyclicMismatch, Traversal};
pub use engine::{ClipEngine, ClipOp, ClipSession, ClipperEngine, IntRing, CLIPPER_HI_RANGE};
pub use equality::{
    align_polygons, clipper_poly_same, poly2d_equal, poly2d_same, poly_check, poly_same,
};
