// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matrixpad View: view‑model and gesture state machine for an image view
//! with a freehand paint overlay.
//!
//! The host toolkit keeps doing what it is good at (recognizing gestures,
//! measuring layout, compositing layers). This crate owns the state between
//! those callbacks:
//!
//! - [`ViewState`]: pose, container size, gesture mode, last tap and the
//!   paint layer.
//! - [`ViewModel`]: the single writer. [`ViewModel::mutate`] runs a
//!   transition, clamps the pose into range and notifies listeners.
//! - [`GestureController`]: turns [`GestureEvent`]s into mutations, either
//!   moving the image or drawing strokes, depending on [`GestureMode`].
//! - [`Diagnostics`]: a readout of the tap in each coordinate space.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use matrixpad_raster::SurfaceOp;
//! use matrixpad_view::{GestureController, GestureEvent, ViewConfig, ViewModel};
//!
//! let config = ViewConfig::default().with_blank_layer();
//! let layer = config.recording_surface();
//! let mut model = ViewModel::new(config, layer);
//! let mut gestures = GestureController::new();
//!
//! // Layout reports the container, then the user switches to painting and
//! // drags across the middle of the image.
//! for event in [
//!     GestureEvent::Resize { size: Size::new(1080.0, 608.0) },
//!     GestureEvent::ToggleMode,
//!     GestureEvent::DragStart { position: Point::new(540.0, 304.0) },
//!     GestureEvent::DragMove { position: Point::new(560.0, 304.0) },
//!     GestureEvent::DragEnd,
//! ] {
//!     gestures.dispatch(&mut model, event).unwrap();
//! }
//!
//! let ops = model.state().paint_layer().ops();
//! assert!(matches!(ops, [SurfaceOp::Circle { .. }, SurfaceOp::Line { .. }]));
//! ```
//!
//! ## Logging
//!
//! Mutations are logged with `tracing` at `debug` level, stroke mapping and
//! suppressed gestures at `trace`, rejected container sizes at `warn`.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
pub mod controller;
mod diagnostics;
pub mod drag;
mod model;
mod state;

pub use config::ViewConfig;
pub use controller::{GestureController, GestureEvent, Outcome};
pub use diagnostics::Diagnostics;
pub use model::{ListenerId, ViewModel};
pub use state::{GestureMode, ViewState};

pub use matrixpad_transform::{CoordinateSpaces, Pose, PoseLimits, Transform2D, TransformError};
