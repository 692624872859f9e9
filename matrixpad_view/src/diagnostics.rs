// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect, Size};
use matrixpad_raster::RasterSurface;
use matrixpad_transform::Pose;

use crate::state::{GestureMode, ViewState};

/// Readout of the view state and the tap in each coordinate space.
///
/// `Display` prints one line per field, each number rounded to three
/// significant digits (whole-number parts are never truncated).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diagnostics {
    /// Current pose.
    pub pose: Pose,
    /// Current container size.
    pub container: Size,
    /// Current gesture mode.
    pub mode: GestureMode,
    /// Last tap in Box space.
    pub tap: Point,
    /// Last tap in container‑relative normalized coordinates.
    pub tap_normalized_box: Point,
    /// Last tap in normalized image space; `None` if the pose is degenerate.
    pub tap_normalized_image: Option<Point>,
    /// Image corners in Box space (top‑left, top‑right, bottom‑left, bottom‑right).
    pub image_corners: [Point; 4],
    /// Axis‑aligned bounds of the rotated image in Box space.
    pub image_bounds: Rect,
}

impl Diagnostics {
    pub(crate) fn capture<S: RasterSurface>(state: &ViewState<S>) -> Self {
        let spaces = state.coordinate_spaces();
        let tap = state.last_tap();
        Self {
            pose: state.pose(),
            container: state.container(),
            mode: state.mode(),
            tap,
            tap_normalized_box: spaces.box_to_normalized_box().apply(tap),
            tap_normalized_image: spaces
                .box_space_to_image_space()
                .ok()
                .map(|t| t.apply(tap)),
            image_corners: spaces.image_corners_in_box_space(),
            image_bounds: spaces.image_bounds_in_box_space(),
        }
    }
}

/// A number rounded to three significant digits.
struct Sig(f64);

impl fmt::Display for Sig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 {
            return f.write_str("0");
        }
        if !v.is_finite() {
            return write!(f, "{v}");
        }
        let mut exponent = 0_i32;
        let mut mantissa = v.abs();
        while mantissa >= 10.0 {
            mantissa /= 10.0;
            exponent += 1;
        }
        while mantissa < 1.0 {
            mantissa *= 10.0;
            exponent -= 1;
        }
        let decimals = usize::try_from(2 - exponent).unwrap_or(0);
        write!(f, "{v:.decimals$}")
    }
}

struct Pt(Point);

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", Sig(self.0.x), Sig(self.0.y))
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pose = &self.pose;
        writeln!(
            f,
            "position: {}",
            Pt(Point::new(pose.position.x, pose.position.y))
        )?;
        writeln!(
            f,
            "rotation | scale: {} | {}",
            Sig(pose.rotation_z),
            Sig(pose.scale)
        )?;
        writeln!(
            f,
            "container: {} x {}",
            Sig(self.container.width),
            Sig(self.container.height)
        )?;
        writeln!(f, "mode: {}", self.mode.label())?;
        writeln!(f, "tap: {}", Pt(self.tap))?;
        writeln!(f, "tap (normalized box): {}", Pt(self.tap_normalized_box))?;
        match self.tap_normalized_image {
            Some(pt) => writeln!(f, "tap (normalized image): {}", Pt(pt))?,
            None => writeln!(f, "tap (normalized image): degenerate")?,
        }
        let [a, b, c, d] = self.image_corners;
        writeln!(
            f,
            "corners: {} {} {} {}",
            Pt(a),
            Pt(b),
            Pt(c),
            Pt(d)
        )?;
        let bounds = self.image_bounds;
        write!(
            f,
            "bounds: {} - {}",
            Pt(Point::new(bounds.x0, bounds.y0)),
            Pt(Point::new(bounds.x1, bounds.y1))
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use kurbo::{Point, Size};
    use matrixpad_raster::RecordingSurface;

    use super::Sig;
    use crate::config::ViewConfig;
    use crate::model::ViewModel;

    fn model() -> ViewModel<RecordingSurface> {
        let config = ViewConfig::default()
            .with_blank_layer()
            .with_initial_container(Size::new(1080.0, 608.0));
        let layer = config.recording_surface();
        ViewModel::new(config, layer)
    }

    #[test]
    fn center_tap_reads_as_origin() {
        let mut model = model();
        model.mutate(|s| s.last_tap = Point::new(540.0, 304.0));
        let diag = model.state().diagnostics();

        assert_eq!(diag.tap_normalized_box, Point::ORIGIN);
        let image = diag.tap_normalized_image.unwrap();
        assert!(image.x.abs() < 1e-9 && image.y.abs() < 1e-9);
        assert_eq!(diag.image_corners[3], Point::new(1080.0, 608.0));
    }

    #[test]
    fn display_lists_every_field() {
        let text = model().state().diagnostics().to_string();
        assert!(text.contains("position: (0, 0)"), "{text}");
        assert!(text.contains("rotation | scale: 0 | 1.00"), "{text}");
        assert!(text.contains("container: 1080 x 608"), "{text}");
        assert!(text.contains("mode: Moving"), "{text}");
        assert!(text.contains("tap (normalized image): (-0.500, -0.500)"), "{text}");
        assert!(text.contains("corners: (0, 0) (1080, 0) (0, 608) (1080, 608)"), "{text}");
        assert!(text.lines().last().unwrap().starts_with("bounds: "));
    }

    #[test]
    fn numbers_keep_three_significant_digits() {
        let sig = |v: f64| Sig(v).to_string();
        assert_eq!(sig(0.0), "0");
        assert_eq!(sig(1.0), "1.00");
        assert_eq!(sig(12.3456), "12.3");
        assert_eq!(sig(-0.0012345), "-0.00123");
        assert_eq!(sig(540.0), "540");
        assert_eq!(sig(1080.0), "1080");
    }

    #[test]
    fn bounds_follow_rotation() {
        let mut model = model();
        model.mutate(|s| s.pose.rotation_z = 90.0);
        let bounds = model.state().diagnostics().image_bounds;
        // A quarter turn swaps the extents around the container center.
        assert!((bounds.width() - 608.0).abs() < 1e-6, "{bounds:?}");
        assert!((bounds.height() - 1080.0).abs() < 1e-6, "{bounds:?}");
        assert!((bounds.center().x - 540.0).abs() < 1e-6, "{bounds:?}");
    }
}
