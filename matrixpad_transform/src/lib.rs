// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matrixpad Transform: affine transforms and named coordinate spaces.
//!
//! This crate holds the geometry behind a pan/zoom/rotate image view with a
//! freehand paint overlay. It provides:
//! - [`Transform2D`]: a small affine matrix value with canvas‑style builder
//!   operations (`translate`, `scale`, `rotate_z`) and fallible inversion.
//! - [`Pose`] / [`PoseLimits`]: the position, scale and rotation applied to the
//!   displayed image, plus the clamp step that keeps it in range.
//! - [`CoordinateSpaces`]: the transform chains between Box space (container
//!   pixels), normalized image space and paint‑layer pixel space.
//!
//! It does **not** render anything and it does not interpret gestures. Those
//! live in `matrixpad_raster` and `matrixpad_view`.
//!
//! ## Spaces
//!
//! - **Box space**: pixels relative to the top‑left of the container that
//!   receives gestures.
//! - **Normalized image space**: the image occupies the unit square centered
//!   on the origin, independent of pixel size.
//! - **Paint‑layer pixel space**: pixels of the fixed‑size raster used for
//!   freehand strokes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use matrixpad_transform::{CoordinateSpaces, Pose};
//!
//! let container = Size::new(1080.0, 608.0);
//! let layer = Size::new(1080.0, 608.0);
//! let spaces = CoordinateSpaces::new(Pose::default(), container, layer);
//!
//! // The container center is the image center.
//! let image_pt = spaces
//!     .box_space_to_image_space()
//!     .unwrap()
//!     .apply(Point::new(540.0, 304.0));
//! assert!(image_pt.x.abs() < 1e-9 && image_pt.y.abs() < 1e-9);
//! ```
//!
//! Transforms are never cached: build a new [`CoordinateSpaces`] from the
//! current pose whenever a mapping is needed.
//!
//! This crate is `no_std`.

#![no_std]

mod pose;
mod spaces;
mod transform;

pub use pose::{Pose, PoseLimits};
pub use spaces::{CoordinateSpaces, IMAGE_CORNERS};
pub use transform::{DEGENERATE_EPSILON, Transform2D, TransformError};
