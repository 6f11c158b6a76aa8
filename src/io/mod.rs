//! Text output for diagnostics.
//!
//! Renders points and polygons in a fixed-width bracketed form, suitable
//! for log messages and test failure output.

mod text;

pub use text::{format_points, format_polygons};
