//! polyset - Polygon-set algebra under floating-point noise
//!
//! Polygons describing physical objects rarely line up exactly. This library
//! compares, sorts, unions and clips point-list polygons with explicit
//! tolerances, on top of an integer-coordinate clip engine.
//!
//! - [`tolerance`]: epsilon comparison, rounding and point equality
//! - [`ordering`]: lexicographic point order and snake sorting of grids
//! - [`polygon`]: cyclic polygon equality, clipping and union folds
//! - [`log`]: the leveled sink anomalies are reported to
//!
//! # Example
//!
//! ```
//! use polyset::polygon::{get_union, poly_same, Polygon};
//!
//! let a: Polygon<f64> =
//!     Polygon::from(vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
//! let b: Polygon<f64> =
//!     Polygon::from(vec![[10.0, 10.0], [10.0, 0.0], [0.0, 0.0], [0.0, 10.0]]);
//!
//! assert!(poly_same(&a, &b, true));
//! assert_eq!(get_union(&[a, b]).unwrap().len(), 1);
//! ```

pub mod error;
pub mod io;
pub mod log;
pub mod ordering;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use error::{PolysetError, Result};
pub use polygon::{Polygon, PolygonClipper, PolygonGroup};
pub use primitives::{Affine2, IntPoint, Point, PointTransform};
pub use tolerance::{compare_numbers, PointEquivalence, PointMatch};
