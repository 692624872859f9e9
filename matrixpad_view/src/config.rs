// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use matrixpad_raster::{PaintStyle, RecordingSurface};
use matrixpad_transform::{Pose, PoseLimits};
use peniko::Color;

/// Construction‑time settings for a [`ViewModel`](crate::ViewModel).
///
/// The defaults reproduce the demo screen: a 1080×608 paint layer tinted with
/// translucent red, a blue 5 px round‑capped brush, 20 px stroke‑start dots,
/// and a small registration mark near the top‑left corner of the layer.
#[derive(Clone, Debug)]
pub struct ViewConfig {
    /// Scale range enforced after every mutation.
    pub limits: PoseLimits,
    /// Pixel size used by the surface helpers on this type.
    pub paint_layer_size: (u16, u16),
    /// Brush used for stroke segments and dots.
    pub brush: PaintStyle,
    /// Radius of the dot drawn where a stroke starts.
    pub dot_radius: f64,
    /// Color flooded over the paint layer on construction, if any.
    pub background: Option<Color>,
    /// Center and radius of a dot stamped on construction, if any.
    pub registration_mark: Option<(Point, f64)>,
    /// Pose before any gesture.
    pub initial_pose: Pose,
    /// Container size before the first layout pass.
    pub initial_container: Size,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            limits: PoseLimits::default(),
            paint_layer_size: (1080, 608),
            brush: PaintStyle::default(),
            dot_radius: 20.0,
            background: Some(Color::from_rgba8(0xFF, 0x00, 0x00, 0x77)),
            registration_mark: Some((Point::new(10.0, 10.0), 10.0)),
            initial_pose: Pose::default(),
            initial_container: Size::new(1.0, 1.0),
        }
    }
}

impl ViewConfig {
    /// Returns this config with different scale limits.
    #[must_use]
    pub fn with_limits(mut self, limits: PoseLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns this config with a different brush.
    #[must_use]
    pub fn with_brush(mut self, brush: PaintStyle) -> Self {
        self.brush = brush;
        self
    }

    /// Returns this config with a different paint‑layer size.
    #[must_use]
    pub fn with_paint_layer_size(mut self, width: u16, height: u16) -> Self {
        self.paint_layer_size = (width, height);
        self
    }

    /// Returns this config with a different initial container size.
    #[must_use]
    pub fn with_initial_container(mut self, container: Size) -> Self {
        self.initial_container = container;
        self
    }

    /// Returns this config with nothing drawn on the paint layer at startup.
    #[must_use]
    pub fn with_blank_layer(mut self) -> Self {
        self.background = None;
        self.registration_mark = None;
        self
    }

    /// A [`RecordingSurface`] of [`ViewConfig::paint_layer_size`].
    #[must_use]
    pub fn recording_surface(&self) -> RecordingSurface {
        let (width, height) = self.paint_layer_size;
        RecordingSurface::new(width, height)
    }

    /// A [`VelloCpuSurface`](matrixpad_raster::VelloCpuSurface) of [`ViewConfig::paint_layer_size`].
    #[cfg(feature = "vello_cpu")]
    #[must_use]
    pub fn vello_cpu_surface(&self) -> matrixpad_raster::VelloCpuSurface {
        let (width, height) = self.paint_layer_size;
        matrixpad_raster::VelloCpuSurface::new(width, height)
    }
}
