// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matrixpad Raster: the paint‑layer surface seen by the gesture core.
//!
//! The gesture core never rasterizes anything itself. It issues three kinds
//! of calls against a [`RasterSurface`]:
//! - [`RasterSurface::fill`] to flood the whole layer,
//! - [`RasterSurface::draw_line`] for stroke continuations,
//! - [`RasterSurface::draw_circle`] for the dot that starts a stroke.
//!
//! Two implementations ship with this crate:
//! - [`RecordingSurface`]: records a [`SurfaceOp`] log and draws nothing. Tests
//!   and debugging tools assert on the emitted ops.
//! - `VelloCpuSurface` (feature `vello_cpu`, on by default): rasterizes into a
//!   `vello_cpu` render context and can read the layer back as RGBA8.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use matrixpad_raster::{PaintStyle, RasterSurface, RecordingSurface, SurfaceOp};
//!
//! let mut layer = RecordingSurface::new(1080, 608);
//! let style = PaintStyle::default();
//! layer.draw_circle(Point::new(10.0, 10.0), 20.0, &style);
//! assert!(matches!(layer.ops(), [SurfaceOp::Circle { .. }]));
//! ```
//!
//! This crate is `no_std` (with `alloc`) unless `vello_cpu` is enabled.

#![no_std]

extern crate alloc;

mod recording;
mod style;
#[cfg(feature = "vello_cpu")]
mod vello_cpu_surface;

use kurbo::{Point, Size};
use peniko::Color;

pub use recording::{RecordingSurface, SurfaceOp};
pub use style::PaintStyle;
#[cfg(feature = "vello_cpu")]
pub use vello_cpu_surface::VelloCpuSurface;

/// A fixed‑size pixel raster that strokes are drawn into.
///
/// Coordinates are paint‑layer pixels with the origin at the top‑left.
/// Implementations mutate in place; the surface is never resized.
pub trait RasterSurface {
    /// Size of the surface in pixels.
    fn size(&self) -> Size;

    /// Composites `color` over the whole surface.
    fn fill(&mut self, color: Color);

    /// Strokes a segment from `from` to `to` with the stroke and color of `style`.
    fn draw_line(&mut self, from: Point, to: Point, style: &PaintStyle);

    /// Fills a circle of `radius` centered on `center` with the color of `style`.
    fn draw_circle(&mut self, center: Point, radius: f64, style: &PaintStyle);
}

impl<S: RasterSurface + ?Sized> RasterSurface for &mut S {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn fill(&mut self, color: Color) {
        (**self).fill(color);
    }

    fn draw_line(&mut self, from: Point, to: Point, style: &PaintStyle) {
        (**self).draw_line(from, to, style);
    }

    fn draw_circle(&mut self, center: Point, radius: f64, style: &PaintStyle) {
        (**self).draw_circle(center, radius, style);
    }
}
