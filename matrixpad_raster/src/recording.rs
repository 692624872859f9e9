// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Size};
use peniko::Color;

use crate::{PaintStyle, RasterSurface};

/// A drawing call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Whole‑surface fill.
    Fill(Color),
    /// Stroked segment.
    Line {
        /// Segment start in pixels.
        from: Point,
        /// Segment end in pixels.
        to: Point,
        /// Style at the time of drawing.
        style: PaintStyle,
    },
    /// Filled circle.
    Circle {
        /// Center in pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Style at the time of drawing.
        style: PaintStyle,
    },
}

/// Surface that records drawing calls instead of rasterizing them.
///
/// Nothing is clipped to the surface bounds and no pixels exist. Use it to
/// assert on which calls the gesture core made, and in which order.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty recording surface of the given pixel size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Size::new(f64::from(width), f64::from(height)),
            ops: Vec::new(),
        }
    }

    /// Returns the recorded ops in the order they were issued.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Returns the most recently recorded op, if any.
    #[must_use]
    pub fn last_op(&self) -> Option<&SurfaceOp> {
        self.ops.last()
    }
}

impl RasterSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn fill(&mut self, color: Color) {
        self.ops.push(SurfaceOp::Fill(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, style: &PaintStyle) {
        self.ops.push(SurfaceOp::Line {
            from,
            to,
            style: style.clone(),
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, style: &PaintStyle) {
        self.ops.push(SurfaceOp::Circle {
            center,
            radius,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};
    use peniko::Color;

    use super::{RecordingSurface, SurfaceOp};
    use crate::{PaintStyle, RasterSurface};

    #[test]
    fn records_in_issue_order() {
        let mut surface = RecordingSurface::new(1080, 608);
        let style = PaintStyle::default();
        let red = Color::from_rgba8(255, 0, 0, 0x77);

        surface.fill(red);
        surface.draw_circle(Point::new(1.0, 2.0), 20.0, &style);
        surface.draw_line(Point::new(1.0, 2.0), Point::new(3.0, 4.0), &style);

        assert_eq!(surface.size(), Size::new(1080.0, 608.0));
        assert_eq!(surface.ops().len(), 3);
        assert!(matches!(surface.ops()[0], SurfaceOp::Fill(_)));
        assert!(matches!(
            surface.ops()[1],
            SurfaceOp::Circle { radius, .. } if radius == 20.0
        ));
        assert_eq!(
            surface.last_op(),
            Some(&SurfaceOp::Line {
                from: Point::new(1.0, 2.0),
                to: Point::new(3.0, 4.0),
                style,
            })
        );
    }

    #[test]
    fn mutable_reference_forwards() {
        fn stamp(mut surface: impl RasterSurface) {
            surface.draw_circle(Point::ORIGIN, 1.0, &PaintStyle::default());
        }

        let mut surface = RecordingSurface::new(4, 3);
        stamp(&mut surface);
        assert_eq!(surface.ops().len(), 1);
    }
}
