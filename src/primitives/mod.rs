//! Point value types and the planar transform.

mod affine2;
mod int_point;
mod point;

pub use affine2::{Affine2, PointTransform};
pub use int_point::IntPoint;
pub use point::Point;
