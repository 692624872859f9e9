// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use matrixpad_raster::RasterSurface;
#[cfg(feature = "vello_cpu")]
use matrixpad_raster::VelloCpuSurface;

use crate::config::ViewConfig;
use crate::state::ViewState;

/// Handle returned by [`ViewModel::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<S> = Box<dyn FnMut(&ViewState<S>)>;

/// Owner of the [`ViewState`] and single writer for it.
///
/// Every change goes through [`ViewModel::mutate`], which runs the
/// transition, re‑clamps the pose, bumps [`ViewModel::revision`] and then
/// calls each listener once with the new state.
///
/// Outside of `mutate` the paint layer is only reachable by shared
/// reference, so it cannot be drawn on:
///
/// ```compile_fail
/// use kurbo::Point;
/// use matrixpad_raster::{PaintStyle, RasterSurface};
/// use matrixpad_view::{ViewConfig, ViewModel};
///
/// let config = ViewConfig::default();
/// let layer = config.recording_surface();
/// let model = ViewModel::new(config, layer);
/// model
///     .state()
///     .paint_layer()
///     .draw_line(Point::ORIGIN, Point::new(5.0, 5.0), &PaintStyle::default());
/// ```
pub struct ViewModel<S> {
    state: ViewState<S>,
    listeners: Vec<(ListenerId, Listener<S>)>,
    next_listener: u64,
    revision: u64,
}

impl<S: fmt::Debug> fmt::Debug for ViewModel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModel")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl<S: RasterSurface> ViewModel<S> {
    /// Creates the model and prepares `paint_layer` (background fill and
    /// registration mark) according to `config`.
    #[must_use]
    pub fn new(config: ViewConfig, paint_layer: S) -> Self {
        Self {
            state: ViewState::new(config, paint_layer),
            listeners: Vec::new(),
            next_listener: 0,
            revision: 0,
        }
    }

    /// Read access to the current state.
    #[must_use]
    pub fn state(&self) -> &ViewState<S> {
        &self.state
    }

    /// Number of completed mutations.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `transition`, clamps the pose and notifies listeners.
    ///
    /// Returns whatever `transition` returns.
    pub fn mutate<R>(&mut self, transition: impl FnOnce(&mut ViewState<S>) -> R) -> R {
        let result = transition(&mut self.state);
        self.state.constrain();
        self.revision += 1;

        let pose = self.state.pose;
        tracing::debug!(
            revision = self.revision,
            x = pose.position.x,
            y = pose.position.y,
            scale = pose.scale,
            rotation = pose.rotation_z,
            mode = ?self.state.mode,
            tap = ?self.state.last_tap,
            "view state mutated"
        );

        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        result
    }

    /// Registers a listener called after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&ViewState<S>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    /// Consumes the model and returns the paint layer.
    #[must_use]
    pub fn into_paint_layer(self) -> S {
        self.state.paint_layer
    }
}

#[cfg(feature = "vello_cpu")]
impl ViewModel<VelloCpuSurface> {
    /// Renders the paint layer and returns unpremultiplied RGBA8 rows.
    ///
    /// Read‑back only: the pose, revision and listeners are left alone.
    #[must_use]
    pub fn render_rgba8(&mut self) -> Vec<u8> {
        self.state.paint_layer.render_rgba8()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::{Point, Size, Vec2};
    use matrixpad_raster::RecordingSurface;

    use super::ViewModel;
    use crate::config::ViewConfig;

    fn model() -> ViewModel<RecordingSurface> {
        let config =
            ViewConfig::default().with_initial_container(Size::new(1080.0, 608.0));
        let layer = config.recording_surface();
        ViewModel::new(config, layer)
    }

    #[test]
    fn mutate_clamps_scale() {
        let mut model = model();
        model.mutate(|s| s.pose.scale = 3.0);
        assert_eq!(model.state().pose().scale, 2.0);
        model.mutate(|s| s.pose.scale = 0.1);
        assert_eq!(model.state().pose().scale, 0.5);
    }

    #[test]
    fn mutate_clamps_position() {
        let mut model = model();
        model.mutate(|s| s.pose.position = Vec2::new(-2000.0, 2000.0));
        assert_eq!(model.state().pose().position, Vec2::new(-540.0, 304.0));
    }

    #[test]
    fn mutate_returns_transition_result_and_bumps_revision() {
        let mut model = model();
        assert_eq!(model.revision(), 0);
        let old_scale = model.mutate(|s| {
            let old = s.pose.scale;
            s.pose.scale = 1.5;
            old
        });
        assert_eq!(old_scale, 1.0);
        assert_eq!(model.revision(), 1);
    }

    #[test]
    fn listeners_see_clamped_state_once_per_mutation() {
        let mut model = model();
        let calls = Rc::new(Cell::new(0_u32));
        let seen_scale = Rc::new(Cell::new(0.0_f64));
        let id = {
            let calls = Rc::clone(&calls);
            let seen_scale = Rc::clone(&seen_scale);
            model.subscribe(move |state| {
                calls.set(calls.get() + 1);
                seen_scale.set(state.pose().scale);
            })
        };

        model.mutate(|s| s.pose.scale = 10.0);
        assert_eq!(calls.get(), 1);
        assert_eq!(seen_scale.get(), 2.0);

        assert!(model.unsubscribe(id));
        assert!(!model.unsubscribe(id));
        model.mutate(|s| s.pose.scale = 1.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn paint_layer_changes_only_through_mutate() {
        let mut model = model();
        let calls = Rc::new(Cell::new(0_u32));
        {
            let calls = Rc::clone(&calls);
            model.subscribe(move |_| calls.set(calls.get() + 1));
        }
        assert_eq!(model.state().paint_layer().ops().len(), 2);

        model.mutate(|s| s.stroke_segment(Point::ORIGIN, Point::new(5.0, 5.0)));
        assert_eq!(model.state().paint_layer().ops().len(), 3);
        assert_eq!(model.revision(), 1);
        assert_eq!(calls.get(), 1);
        assert_eq!(model.into_paint_layer().ops().len(), 3);
    }

    #[cfg(feature = "vello_cpu")]
    #[test]
    fn rendering_is_not_a_mutation() {
        let config = ViewConfig::default().with_paint_layer_size(32, 16);
        let layer = config.vello_cpu_surface();
        let mut model = ViewModel::new(config, layer);
        let calls = Rc::new(Cell::new(0_u32));
        {
            let calls = Rc::clone(&calls);
            model.subscribe(move |_| calls.set(calls.get() + 1));
        }

        let bytes = model.render_rgba8();
        assert_eq!(bytes.len(), 32 * 16 * 4);
        assert_eq!(model.revision(), 0);
        assert_eq!(calls.get(), 0);
    }
}
