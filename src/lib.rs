//! voiceprints renders the backdrop of the vocal-metrics dashboard on the CPU.
//!
//! # Pipeline overview
//!
//! 1. **Acquire**: a [`DrawSurface`] sized to the [`Viewport`] (read once).
//! 2. **Mount**: [`FractalBackground::mount`] clears the surface and draws the triangle
//!    fractal in one pass; colours come from an injected [`ColorSource`].
//! 3. **Compose** (optional): [`DashboardPage::render`] stacks card panels and a
//!    [`LineChart`] over the background.
//! 4. **Teardown**: dropping or unmounting the [`MountedBackground`] clears the surface.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic given a seed**: equal seeds yield identical rasters.
//! - **Bounded work**: subdivision uses an explicit work list, depth capped by
//!   [`MAX_DEPTH`] in configuration.
//! - **Premultiplied RGBA8** in surfaces; PNG output is converted to straight alpha.
#![forbid(unsafe_code)]

mod config;
mod dashboard;
mod foundation;
mod fractal;
mod render;

pub use config::{BackgroundConfig, MAX_DEPTH, SEED_ENV, seed_from_env};
pub use dashboard::cards::{DASHBOARD_TITLE, MetricCard, MetricsDashboard, primary_metrics};
pub use dashboard::chart::{LineChart, SAMPLE_SERIES, SeriesPoint, SeriesRenderer, plot_path};
pub use dashboard::page::{DashboardPage, PageLayout};
pub use foundation::core::{BezPath, Palette, Point, Rect, Rgba8, Vec2, Viewport};
pub use foundation::error::{VoiceprintsError, VoiceprintsResult};
pub use foundation::rng::{ColorSource, Rng64};
pub use fractal::background::{FractalBackground, MountedBackground};
pub use fractal::subdivide::{
    DEFAULT_APEX_Y, DEFAULT_DEPTH, DEFAULT_SIZE, FractalParams, SubdivisionStats, TriangleNode,
    expected_draws, try_walk, walk,
};
pub use render::backend::{DrawSurface, FrameRGBA};
pub use render::cpu::CpuSurface;
pub use render::recording::{RecordingSurface, SurfaceOp};
