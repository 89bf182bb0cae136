use crate::{
    foundation::{
        core::{BezPath, Rgba8, Viewport},
        error::VoiceprintsResult,
    },
    render::backend::DrawSurface,
};

/// One operation captured by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Fill { path: BezPath, color: Rgba8 },
    Stroke { path: BezPath, color: Rgba8, width: f64 },
    Present,
}

/// Surface that records calls instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    viewport: Viewport,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ops: Vec::new(),
        }
    }

    pub fn fills(&self) -> impl Iterator<Item = (&BezPath, Rgba8)> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Fill { path, color } => Some((path, *color)),
            _ => None,
        })
    }

    pub fn fill_count(&self) -> usize {
        self.fills().count()
    }

    /// Operations recorded after the most recent clear.
    pub fn since_last_clear(&self) -> &[SurfaceOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == SurfaceOp::Clear)
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) -> VoiceprintsResult<()> {
        self.ops.push(SurfaceOp::Fill {
            path: path.clone(),
            color,
        });
        Ok(())
    }

    fn stroke_path(
        &mut self,
        path: &BezPath,
        color: Rgba8,
        width: f64,
    ) -> VoiceprintsResult<()> {
        self.ops.push(SurfaceOp::Stroke {
            path: path.clone(),
            color,
            width,
        });
        Ok(())
    }

    fn present(&mut self) -> VoiceprintsResult<()> {
        self.ops.push(SurfaceOp::Present);
        Ok(())
    }
}
