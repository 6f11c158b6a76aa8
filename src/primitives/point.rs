//! Point type with an optional third coordinate.

use num_traits::Float;

/// A 2D or 3D point.
///
/// The z coordinate is optional: polygons captured from a model usually
/// carry it, polygons coming back from the clip engine never do.
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
    pub z: Option<F>,
}

impl<F: Float> Point<F> {
    /// Creates a 2D point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a 3D point.
    #[inline]
    pub fn new_3d(x: F, y: F, z: F) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Number of coordinates, 2 or 3.
    #[inline]
    pub fn dimension(&self) -> usize {
        if self.z.is_some() {
            3
        } else {
            2
        }
    }

    /// Returns the z coordinate, treating a 2D point as lying at z = 0.
    #[inline]
    pub fn z_or_zero(&self) -> F {
        self.z.unwrap_or_else(F::zero)
    }

    /// Drops the z coordinate.
    #[inline]
    pub fn xy(self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Returns the coordinates as a vector of length [`dimension`](Self::dimension).
    pub fn coords(&self) -> Vec<F> {
        match self.z {
            Some(z) => vec![self.x, self.y, z],
            None => vec![self.x, self.y],
        }
    }

    /// Translates the point. A 2D point stays 2D.
    #[inline]
    pub fn translated(self, dx: F, dy: F, dz: F) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z.map(|z| z + dz),
        }
    }
}

impl<F: Float> From<[F; 2]> for Point<F> {
    fn from(c: [F; 2]) -> Self {
        Self::new(c[0], c[1])
    }
}

impl<F: Float> From<[F; 3]> for Point<F> {
    fn from(c: [F; 3]) -> Self {
        Self::new_3d(c[0], c[1], c[2])
    }
}

impl<F: Float> From<(F, F)> for Point<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<(F, F, F)> for Point<F> {
    fn from((x, y, z): (F, F, F)) -> Self {
        Self::new_3d(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension() {
        let p: Point<f64> = Point::new(1.0, 2.0);
        let q: Point<f64> = Point::new_3d(1.0, 2.0, 3.0);
        assert_eq!(p.dimension(), 2);
        assert_eq!(q.dimension(), 3);
        assert_eq!(q.xy(), p);
    }

    #[test]
    fn test_conversions() {
        let p: Point<f64> = [1.0, 2.0].into();
        let q: Point<f64> = (1.0, 2.0, 3.0).into();
        assert_eq!(p.coords(), vec![1.0, 2.0]);
        assert_eq!(q.coords(), vec![1.0, 2.0, 3.0]);
        assert_eq!(p.z_or_zero(), 0.0);
    }

    #[test]
    fn test_translated_keeps_dimension() {
        let p: Point<f64> = Point::new(1.0, 1.0).translated(1.0, 2.0, 3.0);
        assert_eq!(p, Point::new(2.0, 3.0));

        let q: Point<f64> = Point::new_3d(1.0, 1.0, 1.0).translated(1.0, 2.0, 3.0);
        assert_eq!(q, Point::new_3d(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_f32() {
        let p: Point<f32> = Point::new_3d(1.0, 2.0, 3.0);
        assert_eq!(p.z_or_zero(), 3.0);
    }
}
