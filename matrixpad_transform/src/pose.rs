// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::TransformError;

/// Scale range enforced on a [`Pose`] by [`Pose::constrain`].
///
/// Both bounds are finite and strictly positive, so a constrained pose
/// always has an invertible scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseLimits {
    min_scale: f64,
    max_scale: f64,
}

impl Default for PoseLimits {
    /// `0.5..=2.0`.
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 2.0,
        }
    }
}

impl PoseLimits {
    /// Creates limits, normalizing the pair so that `min_scale <= max_scale`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidScaleLimits`] if either bound is zero,
    /// negative, NaN or infinite.
    pub fn new(min_scale: f64, max_scale: f64) -> Result<Self, TransformError> {
        let valid = |bound: f64| bound.is_finite() && bound > 0.0;
        if !valid(min_scale) || !valid(max_scale) {
            return Err(TransformError::InvalidScaleLimits {
                min_scale,
                max_scale,
            });
        }
        Ok(Self {
            min_scale: min_scale.min(max_scale),
            max_scale: min_scale.max(max_scale),
        })
    }

    /// Smallest allowed uniform scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Largest allowed uniform scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }
}

/// Position, scale and rotation applied to the displayed image.
///
/// `position` is the offset of the image center from the container center,
/// in Box‑space pixels. Rotations are in degrees. `rotation_x` and
/// `rotation_y` are carried for the host's layer transform; gestures only
/// touch `rotation_z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Offset of the image center from the container center.
    pub position: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// In‑plane rotation, in degrees.
    pub rotation_z: f64,
    /// Rotation about the X axis, in degrees.
    pub rotation_x: f64,
    /// Rotation about the Y axis, in degrees.
    pub rotation_y: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            rotation_z: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl Pose {
    /// Clamps the pose into its invariant bounds.
    ///
    /// After this returns, `scale` lies in `limits`, and each position
    /// component lies within half the container extent on that axis.
    pub fn constrain(&mut self, container: Size, limits: &PoseLimits) {
        let half_w = container.width.abs() / 2.0;
        let half_h = container.height.abs() / 2.0;
        // max/min rather than clamp: NaN inputs must not panic.
        self.position.x = self.position.x.max(-half_w).min(half_w);
        self.position.y = self.position.y.max(-half_h).min(half_h);
        self.scale = self.scale.max(limits.min_scale).min(limits.max_scale);
    }

    /// Returns a constrained copy of this pose.
    #[must_use]
    pub fn constrained(mut self, container: Size, limits: &PoseLimits) -> Self {
        self.constrain(container, limits);
        self
    }

    /// Returns `true` if [`Pose::constrain`] would leave this pose unchanged.
    #[must_use]
    pub fn is_within(&self, container: Size, limits: &PoseLimits) -> bool {
        self.constrained(container, limits) == *self
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{Pose, PoseLimits};
    use crate::TransformError;

    const CONTAINER: Size = Size::new(1080.0, 608.0);

    #[test]
    fn scale_above_max_clamps_to_two() {
        let mut pose = Pose {
            scale: 3.0,
            ..Pose::default()
        };
        pose.constrain(CONTAINER, &PoseLimits::default());
        assert_eq!(pose.scale, 2.0);
    }

    #[test]
    fn scale_below_min_clamps_to_half() {
        let pose = Pose {
            scale: 0.0,
            ..Pose::default()
        }
        .constrained(CONTAINER, &PoseLimits::default());
        assert_eq!(pose.scale, 0.5);
    }

    #[test]
    fn position_clamps_to_half_container() {
        let pose = Pose {
            position: Vec2::new(10_000.0, -10_000.0),
            ..Pose::default()
        }
        .constrained(CONTAINER, &PoseLimits::default());
        assert_eq!(pose.position, Vec2::new(540.0, -304.0));
    }

    #[test]
    fn in_range_pose_is_untouched() {
        let pose = Pose {
            position: Vec2::new(-12.5, 80.0),
            scale: 1.25,
            rotation_z: 400.0,
            ..Pose::default()
        };
        assert!(pose.is_within(CONTAINER, &PoseLimits::default()));
    }

    #[test]
    fn limits_are_normalized() {
        let limits = PoseLimits::new(4.0, 0.25).unwrap();
        assert_eq!(limits.min_scale(), 0.25);
        assert_eq!(limits.max_scale(), 4.0);
    }

    #[test]
    fn collapsing_limits_are_rejected() {
        for (min, max) in [
            (0.0, 2.0),
            (-1.0, 2.0),
            (f64::NAN, 2.0),
            (0.5, f64::INFINITY),
            (0.5, -3.0),
        ] {
            assert!(
                matches!(
                    PoseLimits::new(min, max),
                    Err(TransformError::InvalidScaleLimits { .. })
                ),
                "{min}..={max} accepted"
            );
        }
    }

    #[test]
    fn zero_and_nan_scale_clamp_to_positive_floor() {
        let limits = PoseLimits::new(0.01, 2.0).unwrap();
        for scale in [0.0, -4.0, f64::NAN] {
            let pose = Pose {
                scale,
                ..Pose::default()
            }
            .constrained(CONTAINER, &limits);
            assert_eq!(pose.scale, 0.01);
        }
    }
}
