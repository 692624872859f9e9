// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: previous sample and incremental deltas for one drag.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::start`] on pointer down.
//! 2) On each move, read [`DragTracker::last_position`] if the previous sample
//!    is needed, then call [`DragTracker::update`] for the delta since it.
//! 3) Call [`DragTracker::end`] when the pointer lifts or the gesture is
//!    abandoned.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use matrixpad_view::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.start(Point::new(10.0, 20.0));
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.last_position(), Some(Point::new(15.0, 25.0)));
//! ```

use kurbo::{Point, Vec2};

/// Samples of the drag in progress, in Box space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    last: Option<Point>,
}

impl DragTracker {
    /// Begins a drag at `pos`, discarding any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Records a new sample and returns the delta from the previous one.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    /// Previous sample, or `None` when no drag is in progress.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        self.last
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Returns `true` between [`DragTracker::start`] and [`DragTracker::end`].
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}
