use crate::{
    foundation::{
        core::{BezPath, Rgba8, Viewport},
        error::{VoiceprintsError, VoiceprintsResult},
    },
    render::{
        backend::{DrawSurface, FrameRGBA},
        composite::over_in_place,
    },
};

/// CPU raster surface backed by a `vello_cpu` pixmap.
///
/// Drawing calls are queued in a render context. [`DrawSurface::present`] rasterizes
/// the queue into a scratch pixmap and composites it over the visible one, so
/// successive presents stack like layers.
pub struct CpuSurface {
    viewport: Viewport,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    queued: usize,
}

impl CpuSurface {
    /// Acquire a transparent surface of the viewport's size.
    pub fn new(viewport: Viewport) -> VoiceprintsResult<Self> {
        let width: u16 = viewport.width.try_into().map_err(|_| {
            VoiceprintsError::surface(format!("surface width {} exceeds u16", viewport.width))
        })?;
        let height: u16 = viewport.height.try_into().map_err(|_| {
            VoiceprintsError::surface(format!("surface height {} exceeds u16", viewport.height))
        })?;
        if width == 0 || height == 0 {
            return Err(VoiceprintsError::surface("surface must be non-empty"));
        }

        Ok(Self {
            viewport,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
            queued: 0,
        })
    }

    /// Number of drawing calls waiting for the next present.
    pub fn queued(&self) -> usize {
        self.queued
    }

    /// Premultiplied copy of the visible pixels. Queued work is not included.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.viewport.width,
            height: self.viewport.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn reset_context(&mut self) {
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        self.queued = 0;
    }
}

impl DrawSurface for CpuSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.reset_context();
        self.pixmap.data_as_u8_slice_mut().fill(0);
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) -> VoiceprintsResult<()> {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
        self.queued += 1;
        Ok(())
    }

    fn stroke_path(
        &mut self,
        path: &BezPath,
        color: Rgba8,
        width: f64,
    ) -> VoiceprintsResult<()> {
        if !(width.is_finite() && width > 0.0) {
            return Err(VoiceprintsError::render(format!(
                "stroke width must be finite and > 0, got {width}"
            )));
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
        self.queued += 1;
        Ok(())
    }

    fn present(&mut self) -> VoiceprintsResult<()> {
        if self.queued == 0 {
            return Ok(());
        }

        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut layer);
        over_in_place(
            self.pixmap.data_as_u8_slice_mut(),
            layer.data_as_u8_slice(),
        )?;
        self.reset_context();
        Ok(())
    }
}

fn to_cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: crate::foundation::core::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
