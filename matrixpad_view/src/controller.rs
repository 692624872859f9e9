// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture dispatch: the mode state machine over [`GestureEvent`]s.
//!
//! | Event          | Moving                          | Painting                              |
//! |----------------|---------------------------------|---------------------------------------|
//! | `ToggleMode`   | switch to Painting              | switch to Moving                      |
//! | `Tap`          | record tap                      | record tap                            |
//! | `DragStart`    | start tracking                  | start tracking, dot at the point      |
//! | `DragMove`     | add the delta to the position   | line from the previous point          |
//! | `DragEnd`      | stop tracking                   | stop tracking                         |
//! | `Transform`    | pan, zoom and rotate the pose   | ignored                               |
//! | `Resize`       | update the container size       | update the container size             |
//!
//! Events must be dispatched in arrival order: stroke continuity depends on
//! the previous sample left behind by the last `DragMove`.

use kurbo::{Point, Size, Vec2};
use matrixpad_raster::RasterSurface;
use matrixpad_transform::TransformError;

use crate::drag::DragTracker;
use crate::model::ViewModel;
use crate::state::GestureMode;

/// A recognized gesture, in Box‑space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Single tap.
    Tap {
        /// Tap position.
        position: Point,
    },
    /// Pointer went down and started dragging.
    DragStart {
        /// First sample.
        position: Point,
    },
    /// Next sample of the drag in progress.
    DragMove {
        /// Current sample.
        position: Point,
    },
    /// Pointer lifted, or the drag was abandoned.
    DragEnd,
    /// Combined pan / pinch / rotate step.
    Transform {
        /// Pan since the previous step, in Box pixels.
        pan: Vec2,
        /// Multiplicative zoom since the previous step.
        zoom: f64,
        /// Rotation since the previous step, in degrees.
        rotation: f64,
    },
    /// Layout pass reported the container size.
    Resize {
        /// Measured container size.
        size: Size,
    },
    /// The mode toggle was pressed.
    ToggleMode,
}

/// Whether dispatching an event changed the view state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A mutation ran and listeners were notified.
    Mutated,
    /// The event was consumed without touching the view state.
    Unchanged,
}

/// Interprets gesture events against a [`ViewModel`].
///
/// The controller owns only the drag in progress; everything else lives in
/// the model.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureController {
    drag: DragTracker,
}

impl GestureController {
    /// Creates a controller with no drag in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The drag in progress.
    #[must_use]
    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    /// Applies one event.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Degenerate`] when a painting drag cannot be
    /// mapped into the paint layer. The model and the drag in progress are
    /// left untouched in that case.
    pub fn dispatch<S: RasterSurface>(
        &mut self,
        model: &mut ViewModel<S>,
        event: GestureEvent,
    ) -> Result<Outcome, TransformError> {
        let mode = model.state().mode();
        match event {
            GestureEvent::ToggleMode => {
                model.mutate(|s| s.mode = s.mode.toggled());
                Ok(Outcome::Mutated)
            }
            GestureEvent::Tap { position } => {
                model.mutate(|s| s.last_tap = position);
                Ok(Outcome::Mutated)
            }
            GestureEvent::DragStart { position } => match mode {
                GestureMode::Moving => {
                    self.drag.start(position);
                    Ok(Outcome::Unchanged)
                }
                GestureMode::Painting => {
                    let px = model.state().coordinate_spaces().box_to_paint_layer(position)?;
                    self.drag.start(position);
                    Ok(Self::paint_dot(model, position, px))
                }
            },
            GestureEvent::DragMove { position } => self.drag_move(model, mode, position),
            GestureEvent::DragEnd => {
                self.drag.end();
                Ok(Outcome::Unchanged)
            }
            GestureEvent::Transform {
                pan,
                zoom,
                rotation,
            } => {
                if mode.is_painting() {
                    tracing::trace!("transform gesture ignored while painting");
                    return Ok(Outcome::Unchanged);
                }
                if !(pan.is_finite() && zoom.is_finite() && rotation.is_finite()) {
                    tracing::warn!(?pan, zoom, rotation, "ignoring non-finite transform step");
                    return Ok(Outcome::Unchanged);
                }
                model.mutate(|s| {
                    s.pose.position += pan;
                    s.pose.scale *= zoom;
                    s.pose.rotation_z += rotation;
                });
                Ok(Outcome::Mutated)
            }
            GestureEvent::Resize { size } => {
                let valid = size.width.is_finite()
                    && size.height.is_finite()
                    && size.width > 0.0
                    && size.height > 0.0;
                if !valid {
                    tracing::warn!(?size, "ignoring empty or non-finite container size");
                    return Ok(Outcome::Unchanged);
                }
                if size == model.state().container() {
                    return Ok(Outcome::Unchanged);
                }
                model.mutate(|s| s.container = size);
                Ok(Outcome::Mutated)
            }
        }
    }

    fn drag_move<S: RasterSurface>(
        &mut self,
        model: &mut ViewModel<S>,
        mode: GestureMode,
        position: Point,
    ) -> Result<Outcome, TransformError> {
        match mode {
            GestureMode::Moving => {
                let Some(delta) = self.drag.update(position) else {
                    // The start was missed: treat this sample as the start.
                    self.drag.start(position);
                    return Ok(Outcome::Unchanged);
                };
                model.mutate(|s| s.pose.position += delta);
                Ok(Outcome::Mutated)
            }
            GestureMode::Painting => {
                let spaces = model.state().coordinate_spaces();
                let to = spaces.box_to_paint_layer(position)?;
                let Some(previous) = self.drag.last_position() else {
                    self.drag.start(position);
                    return Ok(Self::paint_dot(model, position, to));
                };
                let from = spaces.box_to_paint_layer(previous)?;
                self.drag.update(position);
                tracing::trace!(?position, ?from, ?to, "stroke segment");
                model.mutate(|s| {
                    s.last_tap = position;
                    s.stroke_segment(from, to);
                });
                Ok(Outcome::Mutated)
            }
        }
    }

    fn paint_dot<S: RasterSurface>(
        model: &mut ViewModel<S>,
        position: Point,
        px: Point,
    ) -> Outcome {
        tracing::trace!(?position, ?px, "stroke start");
        model.mutate(|s| {
            s.last_tap = position;
            s.stamp_dot(px);
        });
        Outcome::Mutated
    }
}
