// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use matrixpad_raster::{PaintStyle, RasterSurface};
use matrixpad_transform::{CoordinateSpaces, Pose, PoseLimits};

use crate::config::ViewConfig;
use crate::diagnostics::Diagnostics;

/// How drag gestures are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureMode {
    /// Drags and pinches move, scale and rotate the image.
    #[default]
    Moving,
    /// Drags draw strokes; pinches are ignored.
    Painting,
}

impl GestureMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Moving => Self::Painting,
            Self::Painting => Self::Moving,
        }
    }

    /// Returns `true` in [`GestureMode::Painting`].
    #[must_use]
    pub fn is_painting(self) -> bool {
        self == Self::Painting
    }

    /// Short label for a mode toggle button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Moving => "Moving",
            Self::Painting => "Painting",
        }
    }
}

/// State of the image view.
///
/// The only way to get `&mut ViewState` is [`ViewModel::mutate`], which
/// re‑clamps the pose and notifies listeners after every transition, so the
/// fields are public for use inside transitions.
///
/// [`ViewModel::mutate`]: crate::ViewModel::mutate
#[derive(Debug)]
pub struct ViewState<S> {
    /// Pose applied to the image and the paint layer.
    pub pose: Pose,
    /// Container size in Box‑space pixels.
    pub container: Size,
    /// Current gesture mode.
    pub mode: GestureMode,
    /// Most recent tap (or painting drag) position in Box space.
    pub last_tap: Point,
    /// Raster that strokes are drawn into.
    pub paint_layer: S,
    limits: PoseLimits,
    brush: PaintStyle,
    dot_radius: f64,
}

impl<S: RasterSurface> ViewState<S> {
    pub(crate) fn new(config: ViewConfig, mut paint_layer: S) -> Self {
        if let Some(color) = config.background {
            paint_layer.fill(color);
        }
        if let Some((center, radius)) = config.registration_mark {
            paint_layer.draw_circle(center, radius, &config.brush);
        }
        let mut state = Self {
            pose: config.initial_pose,
            container: config.initial_container,
            mode: GestureMode::default(),
            last_tap: Point::ORIGIN,
            paint_layer,
            limits: config.limits,
            brush: config.brush,
            dot_radius: config.dot_radius,
        };
        state.constrain();
        state
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Current gesture mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Most recent tap position in Box space.
    #[must_use]
    pub fn last_tap(&self) -> Point {
        self.last_tap
    }

    /// The paint layer.
    #[must_use]
    pub fn paint_layer(&self) -> &S {
        &self.paint_layer
    }

    /// Scale limits enforced by the clamp step.
    #[must_use]
    pub fn limits(&self) -> PoseLimits {
        self.limits
    }

    /// Brush used for strokes and dots.
    #[must_use]
    pub fn brush(&self) -> &PaintStyle {
        &self.brush
    }

    /// Radius of stroke‑start dots.
    #[must_use]
    pub fn dot_radius(&self) -> f64 {
        self.dot_radius
    }

    /// Transform chains built from the current pose, container and layer size.
    ///
    /// Always freshly built; do not keep the result across mutations.
    #[must_use]
    pub fn coordinate_spaces(&self) -> CoordinateSpaces {
        CoordinateSpaces::new(self.pose, self.container, self.paint_layer.size())
    }

    /// Snapshot of the diagnostic readout.
    #[must_use]
    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::capture(self)
    }

    /// Draws the stroke‑start dot at a paint‑layer pixel.
    pub fn stamp_dot(&mut self, center: Point) {
        self.paint_layer
            .draw_circle(center, self.dot_radius, &self.brush);
    }

    /// Draws a stroke segment between two paint‑layer pixels.
    pub fn stroke_segment(&mut self, from: Point, to: Point) {
        self.paint_layer.draw_line(from, to, &self.brush);
    }

    pub(crate) fn constrain(&mut self) {
        self.pose.constrain(self.container, &self.limits);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use matrixpad_raster::SurfaceOp;
    use matrixpad_transform::Pose;

    use super::{GestureMode, ViewState};
    use crate::config::ViewConfig;

    #[test]
    fn toggled_flips_between_modes() {
        assert_eq!(GestureMode::default(), GestureMode::Moving);
        assert_eq!(GestureMode::Moving.toggled(), GestureMode::Painting);
        assert_eq!(GestureMode::Painting.toggled(), GestureMode::Moving);
        assert!(GestureMode::Painting.is_painting());
    }

    #[test]
    fn construction_prepares_paint_layer() {
        let config = ViewConfig::default();
        let layer = config.recording_surface();
        let state = ViewState::new(config, layer);

        let ops = state.paint_layer().ops();
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], SurfaceOp::Fill(_)));
        assert!(matches!(
            ops[1],
            SurfaceOp::Circle { center, radius, .. }
                if center == Point::new(10.0, 10.0) && radius == 10.0
        ));
    }

    #[test]
    fn blank_layer_draws_nothing() {
        let config = ViewConfig::default().with_blank_layer();
        let layer = config.recording_surface();
        let state = ViewState::new(config, layer);
        assert!(state.paint_layer().ops().is_empty());
    }

    #[test]
    fn initial_pose_is_constrained() {
        let mut config = ViewConfig::default().with_initial_container(Size::new(100.0, 50.0));
        config.initial_pose = Pose {
            position: Vec2::new(500.0, 0.0),
            scale: 9.0,
            ..Pose::default()
        };
        let layer = config.recording_surface();
        let state = ViewState::new(config, layer);
        assert_eq!(state.pose().position, Vec2::new(50.0, 0.0));
        assert_eq!(state.pose().scale, 2.0);
    }

    #[test]
    fn coordinate_spaces_use_layer_size() {
        let config = ViewConfig::default().with_paint_layer_size(200, 100);
        let layer = config.recording_surface();
        let state = ViewState::new(config, layer);
        assert_eq!(
            state.coordinate_spaces().paint_layer(),
            Size::new(200.0, 100.0)
        );
    }
}
