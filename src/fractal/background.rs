//! Mount/unmount lifecycle of the decorative fractal background.
//!
//! Mounting clears the surface and draws the whole fractal in one synchronous pass.
//! The returned [`MountedBackground`] borrows the surface exclusively and clears it
//! when unmounted or dropped, including when a later step fails.

use crate::{
    config::BackgroundConfig,
    foundation::{
        core::{Palette, Point, Viewport},
        error::{VoiceprintsError, VoiceprintsResult},
        rng::ColorSource,
    },
    fractal::subdivide::{
        DEFAULT_APEX_Y, DEFAULT_DEPTH, DEFAULT_SIZE, FractalParams, SubdivisionStats, try_walk,
    },
    render::{backend::DrawSurface, cpu::CpuSurface},
};

#[derive(Clone, Debug, PartialEq)]
pub struct FractalBackground {
    palette: Palette,
    apex_y: f64,
    size: f64,
    depth: u32,
}

impl Default for FractalBackground {
    fn default() -> Self {
        Self {
            palette: Palette::DEFAULT,
            apex_y: DEFAULT_APEX_Y,
            size: DEFAULT_SIZE,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl FractalBackground {
    /// Build from `config`, rejecting it unless [`BackgroundConfig::validate`] passes.
    pub fn from_config(config: &BackgroundConfig) -> VoiceprintsResult<Self> {
        config.validate()?;
        Ok(Self {
            palette: config.palette,
            apex_y: config.apex_y,
            size: config.size,
            depth: config.depth,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Root parameters for a viewport: apex centred horizontally.
    pub fn params_for(&self, viewport: Viewport) -> FractalParams {
        FractalParams {
            apex: Point::new(viewport.center_x(), self.apex_y),
            size: self.size,
            depth: self.depth,
        }
    }

    /// Acquire a CPU surface for `viewport`. Failure is fatal for the mount.
    pub fn acquire_cpu_surface(viewport: Viewport) -> VoiceprintsResult<CpuSurface> {
        CpuSurface::new(viewport).inspect_err(|err| {
            tracing::error!(
                width = viewport.width,
                height = viewport.height,
                %err,
                "failed to acquire drawing surface"
            );
        })
    }

    /// Clear `surface` and draw the fractal onto it.
    ///
    /// The viewport is read from the surface exactly once. On error the surface is
    /// left cleared.
    #[tracing::instrument(skip(self, surface, colors))]
    pub fn mount<'s, S: DrawSurface>(
        &self,
        surface: &'s mut S,
        colors: &mut dyn ColorSource,
    ) -> VoiceprintsResult<MountedBackground<'s, S>> {
        let viewport = surface.size();
        if viewport.width == 0 || viewport.height == 0 {
            tracing::error!(?viewport, "drawing surface has no area");
            return Err(VoiceprintsError::surface("drawing surface has no area"));
        }

        surface.clear();
        let mut mounted = MountedBackground {
            surface,
            viewport,
            stats: SubdivisionStats::default(),
        };

        let params = self.params_for(viewport);
        let palette = self.palette;
        let target = &mut *mounted.surface;
        let stats = try_walk(params.root(), |node| {
            let color = palette.pick(colors);
            target.fill_path(&node.triangle_path(), color)
        })?;
        target.present()?;

        tracing::debug!(
            drawn = stats.drawn,
            terminal = stats.terminal,
            max_pending = stats.max_pending,
            "fractal background drawn"
        );
        mounted.stats = stats;
        Ok(mounted)
    }
}

/// A drawn background holding its surface until teardown.
pub struct MountedBackground<'s, S: DrawSurface> {
    surface: &'s mut S,
    viewport: Viewport,
    stats: SubdivisionStats,
}

impl<S: DrawSurface> MountedBackground<'_, S> {
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn stats(&self) -> SubdivisionStats {
        self.stats
    }

    pub fn surface(&self) -> &S {
        &*self.surface
    }

    /// Layers composed on top of the background draw through this.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut *self.surface
    }

    /// Tear down: clears the surface.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<S: DrawSurface> Drop for MountedBackground<'_, S> {
    fn drop(&mut self) {
        self.surface.clear();
        tracing::debug!(viewport = ?self.viewport, "fractal background unmounted");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fractal/background.rs"]
mod tests;
