// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Mul;

use kurbo::{Affine, Point};
use thiserror::Error;

/// Determinants with a magnitude below this are treated as singular.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Errors produced while building or inverting transforms.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum TransformError {
    /// The matrix has no inverse, for example because a scale factor is zero.
    #[error("transform is not invertible (determinant {determinant})")]
    Degenerate {
        /// Determinant of the linear part at the time of inversion.
        determinant: f64,
    },
    /// Scale limits that would let a pose collapse or blow up.
    #[error("scale limits must be finite and positive (got {min_scale}..={max_scale})")]
    InvalidScaleLimits {
        /// Requested lower bound.
        min_scale: f64,
        /// Requested upper bound.
        max_scale: f64,
    },
}

/// A 2D affine transform.
///
/// The builder operations mirror a platform canvas matrix: [`translate`],
/// [`scale`] and [`rotate_z`] each right‑multiply into the current matrix in
/// the order they are invoked. The primitive invoked **last** is therefore the
/// first one applied to a point.
///
/// ```rust
/// use kurbo::Point;
/// use matrixpad_transform::Transform2D;
///
/// // Scale first, then move: (1, 1) -> (2, 2) -> (12, 2).
/// let t = Transform2D::new().translate(10.0, 0.0).scale(2.0, 2.0);
/// assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
/// ```
///
/// [`translate`]: Transform2D::translate
/// [`scale`]: Transform2D::scale
/// [`rotate_z`]: Transform2D::rotate_z
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D(Affine);

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Creates an identity transform.
    #[must_use]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    /// Wraps an existing Kurbo affine.
    #[must_use]
    pub const fn from_affine(affine: Affine) -> Self {
        Self(affine)
    }

    /// Returns the underlying Kurbo affine, for handing to a renderer.
    #[must_use]
    pub const fn as_affine(self) -> Affine {
        self.0
    }

    /// Right‑multiplies a translation by `(dx, dy)`.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self(self.0 * Affine::translate((dx, dy)))
    }

    /// Right‑multiplies a non‑uniform scale.
    #[must_use]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self(self.0 * Affine::scale_non_uniform(sx, sy))
    }

    /// Right‑multiplies a rotation about the Z axis.
    ///
    /// `degrees` is positive clockwise on a y‑down surface, matching the host's
    /// layer rotation.
    #[must_use]
    pub fn rotate_z(self, degrees: f64) -> Self {
        Self(self.0 * Affine::rotate(degrees.to_radians()))
    }

    /// Right‑multiplies `other`, so `other` is applied to points before `self`.
    #[must_use]
    pub fn compose(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(self) -> f64 {
        self.0.determinant()
    }

    /// Returns `true` when [`Transform2D::invert`] would succeed.
    #[must_use]
    pub fn is_invertible(self) -> bool {
        let det = self.determinant();
        det.is_finite() && det.abs() >= DEGENERATE_EPSILON
    }

    /// Returns the matrix inverse.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Degenerate`] when the determinant is within
    /// [`DEGENERATE_EPSILON`] of zero or is not finite.
    pub fn invert(self) -> Result<Self, TransformError> {
        if !self.is_invertible() {
            return Err(TransformError::Degenerate {
                determinant: self.determinant(),
            });
        }
        Ok(Self(self.0.inverse()))
    }

    /// Maps a point through the transform.
    #[must_use]
    pub fn apply(self, pt: Point) -> Point {
        self.0 * pt
    }
}

impl Mul for Transform2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

impl Mul<Point> for Transform2D {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.apply(rhs)
    }
}

impl From<Affine> for Transform2D {
    fn from(affine: Affine) -> Self {
        Self(affine)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Transform2D, TransformError};

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn identity_leaves_points_alone() {
        let pt = Point::new(3.5, -2.0);
        assert_eq!(Transform2D::new().apply(pt), pt);
        assert_eq!(Transform2D::default(), Transform2D::IDENTITY);
    }

    #[test]
    fn last_invoked_primitive_applies_first() {
        let a = Transform2D::new().translate(10.0, 0.0).scale(2.0, 3.0);
        assert_close(a.apply(Point::new(1.0, 1.0)), Point::new(12.0, 3.0));

        let b = Transform2D::new().scale(2.0, 3.0).translate(10.0, 0.0);
        assert_close(b.apply(Point::new(1.0, 1.0)), Point::new(22.0, 3.0));
    }

    #[test]
    fn rotate_z_is_clockwise_on_y_down_surface() {
        let t = Transform2D::new().rotate_z(90.0);
        assert_close(t.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn compose_matches_chained_builders() {
        let left = Transform2D::new().translate(4.0, 5.0);
        let right = Transform2D::new().rotate_z(30.0).scale(2.0, 0.5);
        let chained = Transform2D::new()
            .translate(4.0, 5.0)
            .rotate_z(30.0)
            .scale(2.0, 0.5);
        let pt = Point::new(-7.0, 11.0);
        assert_close(left.compose(right).apply(pt), chained.apply(pt));
        assert_close((left * right) * pt, chained.apply(pt));
    }

    #[test]
    fn invert_round_trips() {
        let t = Transform2D::new()
            .translate(540.0, 304.0)
            .scale(1.5, 1.5)
            .rotate_z(37.0)
            .scale(1080.0, 608.0);
        let inv = t.invert().unwrap();
        let pt = Point::new(0.25, -0.4);
        assert_close(inv.apply(t.apply(pt)), pt);
    }

    #[test]
    fn zero_scale_is_degenerate() {
        let t = Transform2D::new().translate(1.0, 2.0).scale(0.0, 0.0);
        assert!(!t.is_invertible());
        assert!(matches!(
            t.invert(),
            Err(TransformError::Degenerate { determinant }) if determinant == 0.0
        ));
    }

    #[test]
    fn non_finite_scale_is_degenerate() {
        let t = Transform2D::new().scale(f64::INFINITY, 1.0);
        assert!(t.invert().is_err());
    }
}
