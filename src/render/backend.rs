use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::{BezPath, Rgba8, Viewport},
    error::{VoiceprintsError, VoiceprintsResult},
};

/// Readback of a raster surface.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Premultiplied RGBA8 of pixel `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }

    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Convert to straight alpha, as expected by PNG encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = px[3];
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8;
            }
        }
        out
    }

    pub fn save_png(&self, path: &Path) -> VoiceprintsResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| VoiceprintsError::render(format!("write png '{}': {e}", path.display())))
    }
}

/// 2D raster target that fills and strokes paths in device pixels.
pub trait DrawSurface {
    fn size(&self) -> Viewport;

    /// Discard queued work and reset every pixel to transparent.
    fn clear(&mut self);

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) -> VoiceprintsResult<()>;

    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64)
    -> VoiceprintsResult<()>;

    /// Make queued work visible. Surfaces that draw immediately can keep the default.
    fn present(&mut self) -> VoiceprintsResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
