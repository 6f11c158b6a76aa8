//! Planar affine transformation and the transform capability used when
//! projecting polygons to the clip plane.

use super::Point;
use num_traits::Float;
use std::ops::Mul;

/// Something that can map a point to another point.
///
/// Used by [`Polygon::to_xy`](crate::polygon::Polygon::to_xy) to place a
/// polygon in layout coordinates before its z coordinate is dropped.
/// Implemented for [`Affine2`] and for any `Fn(Point<F>) -> Point<F>`.
pub trait PointTransform<F> {
    /// Applies the transform.
    fn apply(&self, p: Point<F>) -> Point<F>;
}

impl<F, T> PointTransform<F> for T
where
    T: Fn(Point<F>) -> Point<F>,
{
    fn apply(&self, p: Point<F>) -> Point<F> {
        self(p)
    }
}

/// A 2D affine transformation matrix.
///
/// Represented as a 2x3 matrix in row-major order:
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// ```
///
/// Applied to a point as `(a*x + b*y + tx, c*x + d*y + ty)`. The z
/// coordinate, if any, passes through unchanged.
///
/// # Example
///
/// ```
/// use polyset::primitives::{Affine2, Point};
/// use std::f64::consts::FRAC_PI_2;
///
/// // Rotate 90 degrees then translate
/// let transform: Affine2<f64> = Affine2::rotation(FRAC_PI_2).then_translate(10.0, 0.0);
///
/// let p = transform.apply_point(Point::new_3d(1.0, 0.0, 5.0));
/// assert!((p.x - 10.0).abs() < 1e-12);
/// assert!((p.y - 1.0).abs() < 1e-12);
/// assert_eq!(p.z, Some(5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub d: F,
    pub tx: F,
    pub ty: F,
}

impl<F: Float> Affine2<F> {
    /// Creates a new affine transform from matrix components.
    #[inline]
    pub fn new(a: F, b: F, c: F, d: F, tx: F, ty: F) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Creates the identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::new(
            F::one(),
            F::zero(),
            F::zero(),
            F::one(),
            F::zero(),
            F::zero(),
        )
    }

    /// Creates a translation transform.
    #[inline]
    pub fn translate(tx: F, ty: F) -> Self {
        Self::new(F::one(), F::zero(), F::zero(), F::one(), tx, ty)
    }

    /// Creates a rotation around the origin.
    ///
    /// Angle is in radians, positive is counter-clockwise.
    #[inline]
    pub fn rotation(angle: F) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(cos_a, -sin_a, sin_a, cos_a, F::zero(), F::zero())
    }

    /// Creates a rotation around `center`.
    pub fn rotation_around(angle: F, center: Point<F>) -> Self {
        Self::translate(-center.x, -center.y)
            .then(Self::rotation(angle))
            .then_translate(center.x, center.y)
    }

    /// Creates a uniform scaling around the origin.
    #[inline]
    pub fn scale(factor: F) -> Self {
        Self::scale_xy(factor, factor)
    }

    /// Creates a non-uniform scaling around the origin.
    #[inline]
    pub fn scale_xy(sx: F, sy: F) -> Self {
        Self::new(sx, F::zero(), F::zero(), sy, F::zero(), F::zero())
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn apply_point(&self, p: Point<F>) -> Point<F> {
        Point {
            x: self.a * p.x + self.b * p.y + self.tx,
            y: self.c * p.x + self.d * p.y + self.ty,
            z: p.z,
        }
    }

    /// Composes this transform with another (self * other).
    ///
    /// The resulting transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.a * other.tx + self.b * other.ty + self.tx,
            ty: self.c * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Returns a transform that applies `self` first, then `other`.
    #[inline]
    pub fn then(&self, other: Self) -> Self {
        other.compose(self)
    }

    /// Returns a transform that applies `self` first, then translates.
    #[inline]
    pub fn then_translate(&self, tx: F, ty: F) -> Self {
        self.then(Self::translate(tx, ty))
    }

    /// Determinant of the linear part. Negative means the transform
    /// mirrors, which reverses polygon winding.
    #[inline]
    pub fn determinant(&self) -> F {
        self.a * self.d - self.b * self.c
    }
}

impl<F: Float> Default for Affine2<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> PointTransform<F> for Affine2<F> {
    fn apply(&self, p: Point<F>) -> Point<F> {
        self.apply_point(p)
    }
}

impl<F: Float> Mul for Affine2<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl<F: Float> Mul<Point<F>> for Affine2<F> {
    type Output = Point<F>;

    fn mul(self, rhs: Point<F>) -> Point<F> {
        self.apply_point(rhs)
    }
}
