//! Integer point used by the clip engine.

use super::Point;
use crate::error::{PolysetError, Result};
use num_traits::Float;

/// A point in the clip engine's integer coordinate domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntPoint {
    pub x: i64,
    pub y: i64,
}

impl IntPoint {
    /// Creates a new integer point.
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Converts a float point by truncating x and y toward zero.
    ///
    /// No scaling is applied; z is ignored. Fails for NaN, infinities and
    /// values outside the `i64` range.
    pub fn truncate<F: Float>(p: &Point<F>) -> Result<Self> {
        match (p.x.trunc().to_i64(), p.y.trunc().to_i64()) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(PolysetError::CoordinateOutOfRange {
                x: p.x.to_f64().unwrap_or(f64::NAN),
                y: p.y.to_f64().unwrap_or(f64::NAN),
            }),
        }
    }

    /// Converts back to a 2D float point.
    pub fn to_point<F: Float>(self) -> Result<Point<F>> {
        match (F::from(self.x), F::from(self.y)) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(PolysetError::CoordinateOutOfRange {
                x: self.x as f64,
                y: self.y as f64,
            }),
        }
    }
}
