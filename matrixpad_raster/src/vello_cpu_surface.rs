// Copyright 2026 the Matrixpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Cap, Join, Point, Size};
use peniko::Color;
use vello_cpu::kurbo::{
    BezPath, Cap as CpuCap, Circle, Join as CpuJoin, Rect, Shape, Stroke as CpuStroke,
};
use vello_cpu::peniko::ImageSampler;
use vello_cpu::{Image, ImageSource, Pixmap, RenderContext, RenderMode, RenderSettings};

use crate::{PaintStyle, RasterSurface};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Draw commands queued before the context is collapsed into one image.
const FLATTEN_AFTER: usize = 256;

/// Paint layer rasterized on the CPU with [`vello_cpu::RenderContext`].
///
/// Drawing calls are queued in the render context; [`render_rgba8`] flushes
/// them and reads back the whole layer.
///
/// A render context only grows, so every 256 queued calls the surface renders
/// what it has into a pixmap, resets the context and replays that pixmap as a
/// single full‑layer image fill. Memory and read‑back cost stay bounded over a
/// long painting session.
///
/// [`render_rgba8`]: VelloCpuSurface::render_rgba8
pub struct VelloCpuSurface {
    ctx: RenderContext,
    width: u16,
    height: u16,
    queued: usize,
}

impl fmt::Debug for VelloCpuSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VelloCpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("queued", &self.queued)
            .finish_non_exhaustive()
    }
}

impl VelloCpuSurface {
    /// Creates a transparent surface of the given pixel size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let settings = RenderSettings {
            render_mode: RenderMode::OptimizeSpeed,
            ..RenderSettings::default()
        };
        Self {
            ctx: RenderContext::new_with(width, height, settings),
            width,
            height,
            queued: 0,
        }
    }

    /// Flushes queued drawing and renders the layer into `pixmap`.
    pub fn render_to_pixmap(&mut self, pixmap: &mut Pixmap) {
        self.ctx.flush();
        self.ctx.render_to_pixmap(pixmap);
    }

    /// Renders the layer and returns unpremultiplied RGBA8 rows, top to bottom.
    #[must_use]
    pub fn render_rgba8(&mut self) -> Vec<u8> {
        let mut pixmap = Pixmap::new(self.width, self.height);
        self.render_to_pixmap(&mut pixmap);
        let unpremul = pixmap.take_unpremultiplied();
        let mut bytes = Vec::with_capacity(unpremul.len() * 4);
        for p in unpremul {
            bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        bytes
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    fn record_draw(&mut self) {
        self.queued += 1;
        if self.queued >= FLATTEN_AFTER {
            self.flatten();
        }
    }

    /// Replaces everything queued with one image fill of its rendered result.
    fn flatten(&mut self) {
        let mut pixmap = Pixmap::new(self.width, self.height);
        self.render_to_pixmap(&mut pixmap);
        let bounds = self.bounds();
        self.ctx.reset();
        self.ctx.set_paint(Image {
            image: ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: ImageSampler::default(),
        });
        self.ctx.fill_rect(&bounds);
        self.queued = 1;
    }

    fn stroke_to_cpu(style: &kurbo::Stroke) -> CpuStroke {
        let mut stroke = CpuStroke::new(style.width);
        stroke.miter_limit = style.miter_limit;
        stroke.join = match style.join {
            Join::Bevel => CpuJoin::Bevel,
            Join::Miter => CpuJoin::Miter,
            Join::Round => CpuJoin::Round,
        };
        stroke.start_cap = Self::cap_to_cpu(style.start_cap);
        stroke.end_cap = Self::cap_to_cpu(style.end_cap);
        stroke
    }

    fn cap_to_cpu(cap: Cap) -> CpuCap {
        match cap {
            Cap::Butt => CpuCap::Butt,
            Cap::Round => CpuCap::Round,
            Cap::Square => CpuCap::Square,
        }
    }
}

impl RasterSurface for VelloCpuSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    fn fill(&mut self, color: Color) {
        let bounds = self.bounds();
        self.ctx.set_paint(color);
        self.ctx.fill_rect(&bounds);
        self.record_draw();
    }

    fn draw_line(&mut self, from: Point, to: Point, style: &PaintStyle) {
        let mut path = BezPath::new();
        path.move_to((from.x, from.y));
        path.line_to((to.x, to.y));
        self.ctx.set_stroke(Self::stroke_to_cpu(&style.stroke));
        self.ctx.set_paint(style.color);
        self.ctx.stroke_path(&path);
        self.record_draw();
    }

    fn draw_circle(&mut self, center: Point, radius: f64, style: &PaintStyle) {
        let path = Circle::new((center.x, center.y), radius).to_path(CIRCLE_TOLERANCE);
        self.ctx.set_paint(style.color);
        self.ctx.fill_path(&path);
        self.record_draw();
    }
}
