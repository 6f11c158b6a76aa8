//! Fixed-width bracketed rendering of point lists.
//!
//! Each coordinate is printed as `{:5.2}`; a point prints its z only when
//! it has one.
//!
//! # Example
//!
//! ```
//! use polyset::io::format_points;
//! use polyset::Point;
//!
//! let text = format_points("tri", &[Point::new(1.0, 2.5), Point::new_3d(0.0, 10.0, 3.25)]);
//! assert_eq!(text, "tri: [[ 1.00, 2.50], [ 0.00,10.00, 3.25]]");
//! ```

use crate::polygon::Polygon;
use crate::primitives::Point;
use num_traits::Float;
use std::fmt::{self, Write};

fn write_point<F: Float + fmt::Display>(out: &mut String, p: &Point<F>) -> fmt::Result {
    match p.z {
        Some(z) => write!(out, "[{:5.2},{:5.2},{:5.2}]", p.x, p.y, z),
        None => write!(out, "[{:5.2},{:5.2}]", p.x, p.y),
    }
}

fn write_points<F: Float + fmt::Display>(out: &mut String, points: &[Point<F>]) -> fmt::Result {
    out.push('[');
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_point(out, p)?;
    }
    out.push(']');
    Ok(())
}

fn write_label(out: &mut String, label: &str) {
    if !label.is_empty() {
        out.push_str(label);
        out.push_str(": ");
    }
}

/// Renders a point list on one line, prefixed by `label: ` unless the
/// label is empty.
pub fn format_points<F: Float + fmt::Display>(label: &str, points: &[Point<F>]) -> String {
    let mut out = String::new();
    write_label(&mut out, label);
    // Writing into a String cannot fail.
    let _ = write_points(&mut out, points);
    out
}

/// Renders a polygon group with one polygon per indented line.
pub fn format_polygons<F: Float + fmt::Display>(label: &str, polygons: &[Polygon<F>]) -> String {
    let mut out = String::new();
    write_label(&mut out, label);
    out.push_str("[\n");
    for polygon in polygons {
        out.push_str("  ");
        let _ = write_points(&mut out, &polygon.vertices);
        out.push('\n');
    }
    out.push(']');
    out
}
