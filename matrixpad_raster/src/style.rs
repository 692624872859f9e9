// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Cap, Stroke};
use peniko::Color;

/// Color and stroke parameters for paint‑layer drawing.
///
/// Lines use `stroke`; circles are filled with `color` and ignore `stroke`.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintStyle {
    /// Paint color.
    pub color: Color,
    /// Stroke width, caps, joins and dashes used by [`draw_line`](crate::RasterSurface::draw_line).
    pub stroke: Stroke,
}

impl Default for PaintStyle {
    /// Opaque blue, 5 px wide, round caps.
    fn default() -> Self {
        Self::new(Color::from_rgba8(0, 0, 255, 255), 5.0)
    }
}

impl PaintStyle {
    /// Creates a style with round caps and the given color and width.
    #[must_use]
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            stroke: Stroke::new(width).with_caps(Cap::Round),
        }
    }

    /// Returns this style with a different color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns this style with a different stroke width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.stroke.width = width;
        self
    }
}
