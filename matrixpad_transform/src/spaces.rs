// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::pose::Pose;
use crate::transform::{Transform2D, TransformError};

/// Corners of the image in normalized image space, in the order
/// top‑left, top‑right, bottom‑left, bottom‑right.
pub const IMAGE_CORNERS: [Point; 4] = [
    Point::new(-0.5, -0.5),
    Point::new(0.5, -0.5),
    Point::new(-0.5, 0.5),
    Point::new(0.5, 0.5),
];

/// Named transform chains between Box, normalized image and paint‑layer space.
///
/// A `CoordinateSpaces` is a snapshot of the inputs (pose, container size and
/// paint‑layer size). Every accessor composes its chain from scratch, so a
/// value built from the current state is always consistent with it. Build a
/// new one after any pose or container change instead of keeping one around.
///
/// The paint layer keeps its own fixed resolution: [`image_normal_to_pixel`]
/// scales by the paint‑layer size, so strokes land under the finger whatever
/// the container size is.
///
/// [`image_normal_to_pixel`]: CoordinateSpaces::image_normal_to_pixel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateSpaces {
    pose: Pose,
    container: Size,
    paint_layer: Size,
}

impl CoordinateSpaces {
    /// Captures the inputs for the transform chains.
    #[must_use]
    pub fn new(pose: Pose, container: Size, paint_layer: Size) -> Self {
        Self {
            pose,
            container,
            paint_layer,
        }
    }

    /// The pose the chains are built from.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The container (Box space) size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// The paint‑layer size in pixels.
    #[must_use]
    pub fn paint_layer(&self) -> Size {
        self.paint_layer
    }

    /// Normalized image space → Box space.
    ///
    /// Chain: translate to the container center, translate by the pose
    /// position, scale by the pose scale, rotate by `rotation_z`, scale by the
    /// container size.
    #[must_use]
    pub fn image_space_to_box_space(&self) -> Transform2D {
        let Size { width, height } = self.container;
        Transform2D::new()
            .translate(width / 2.0, height / 2.0)
            .translate(self.pose.position.x, self.pose.position.y)
            .scale(self.pose.scale, self.pose.scale)
            .rotate_z(self.pose.rotation_z)
            .scale(width, height)
    }

    /// Box space → normalized image space.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Degenerate`] when the forward chain is not
    /// invertible (zero scale or an empty container).
    pub fn box_space_to_image_space(&self) -> Result<Transform2D, TransformError> {
        self.image_space_to_box_space().invert()
    }

    /// Box space → container‑relative normalized coordinates.
    ///
    /// Used for the diagnostic readout only.
    #[must_use]
    pub fn box_to_normalized_box(&self) -> Transform2D {
        Transform2D::new()
            .translate(-0.5, -0.5)
            .scale(1.0 / self.container.width, 1.0 / self.container.height)
    }

    /// Normalized image space → paint‑layer pixel space.
    #[must_use]
    pub fn image_normal_to_pixel(&self) -> Transform2D {
        Transform2D::new()
            .scale(self.paint_layer.width, self.paint_layer.height)
            .translate(0.5, 0.5)
    }

    /// Paint‑layer pixel space → normalized image space.
    #[must_use]
    pub fn pixel_to_image_normal(&self) -> Transform2D {
        Transform2D::new()
            .translate(-0.5, -0.5)
            .scale(1.0 / self.paint_layer.width, 1.0 / self.paint_layer.height)
    }

    /// Paint‑layer pixel space → Box space.
    ///
    /// Hosts composite the paint layer with this transform so it stays
    /// registered with the image underneath.
    #[must_use]
    pub fn paint_layer_to_box_space(&self) -> Transform2D {
        self.image_space_to_box_space()
            .compose(self.pixel_to_image_normal())
    }

    /// Maps a Box‑space point into paint‑layer pixels.
    ///
    /// # Errors
    ///
    /// Same as [`CoordinateSpaces::box_space_to_image_space`].
    pub fn box_to_paint_layer(&self, pt: Point) -> Result<Point, TransformError> {
        let to_image = self.box_space_to_image_space()?;
        Ok(self.image_normal_to_pixel().compose(to_image).apply(pt))
    }

    /// Image corners mapped into Box space, in [`IMAGE_CORNERS`] order.
    #[must_use]
    pub fn image_corners_in_box_space(&self) -> [Point; 4] {
        let to_box = self.image_space_to_box_space();
        IMAGE_CORNERS.map(|corner| to_box.apply(corner))
    }

    /// Axis‑aligned bounds of the image in Box space.
    #[must_use]
    pub fn image_bounds_in_box_space(&self) -> Rect {
        let [q0, q1, q2, q3] = self.image_corners_in_box_space();
        let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
        let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
        let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
        let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
        Rect::new(min_x, min_y, max_x, max_y)
    }
}
