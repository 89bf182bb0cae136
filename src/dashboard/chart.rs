use crate::{
    foundation::{
        core::{BezPath, Point, Rect, Rgba8},
        error::{VoiceprintsError, VoiceprintsResult},
    },
    render::backend::DrawSurface,
};

/// One sample of a time series.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesPoint {
    pub t: f64,
    pub value: f64,
}

impl SeriesPoint {
    pub const fn new(t: f64, value: f64) -> Self {
        Self { t, value }
    }
}

/// Placeholder speech-rate series (words/min per minute of session) for the chart.
pub const SAMPLE_SERIES: [SeriesPoint; 6] = [
    SeriesPoint::new(0.0, 128.0),
    SeriesPoint::new(1.0, 141.0),
    SeriesPoint::new(2.0, 136.0),
    SeriesPoint::new(3.0, 152.0),
    SeriesPoint::new(4.0, 147.0),
    SeriesPoint::new(5.0, 150.0),
];

/// Draws a time series into a rectangle of a surface.
pub trait SeriesRenderer {
    /// Returns the number of line segments drawn.
    fn render(
        &self,
        surface: &mut dyn DrawSurface,
        area: Rect,
        points: &[SeriesPoint],
    ) -> VoiceprintsResult<usize>;
}

/// Polyline chart with an optional frame around the plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub line: Rgba8,
    pub line_width: f64,
    pub frame: Option<Rgba8>,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            line: Rgba8::opaque(0x00, 0xff, 0xcc),
            line_width: 3.0,
            frame: Some(Rgba8::opaque(0xff, 0xff, 0xff).with_alpha(0x40)),
        }
    }
}

impl SeriesRenderer for LineChart {
    fn render(
        &self,
        surface: &mut dyn DrawSurface,
        area: Rect,
        points: &[SeriesPoint],
    ) -> VoiceprintsResult<usize> {
        if let Some(frame) = self.frame {
            let mut outline = BezPath::new();
            outline.move_to(Point::new(area.x0, area.y0));
            outline.line_to(Point::new(area.x1, area.y0));
            outline.line_to(Point::new(area.x1, area.y1));
            outline.line_to(Point::new(area.x0, area.y1));
            outline.close_path();
            surface.stroke_path(&outline, frame, 1.0)?;
        }

        let Some(path) = plot_path(area, points)? else {
            return Ok(0);
        };
        surface.stroke_path(&path, self.line, self.line_width)?;
        Ok(points.len() - 1)
    }
}

/// Map `points` into `area` (y grows downward on screen, so values are inverted).
///
/// Returns `None` for fewer than two points. A zero range on either axis places the
/// points on that axis' centre line.
pub fn plot_path(area: Rect, points: &[SeriesPoint]) -> VoiceprintsResult<Option<BezPath>> {
    if points
        .iter()
        .any(|p| !(p.t.is_finite() && p.value.is_finite()))
    {
        return Err(VoiceprintsError::validation(
            "series points must be finite",
        ));
    }
    if points.len() < 2 {
        return Ok(None);
    }

    let (t_min, t_max) = min_max(points.iter().map(|p| p.t));
    let (v_min, v_max) = min_max(points.iter().map(|p| p.value));

    let map = |p: &SeriesPoint| {
        let fx = if t_max > t_min {
            (p.t - t_min) / (t_max - t_min)
        } else {
            0.5
        };
        let fy = if v_max > v_min {
            (p.value - v_min) / (v_max - v_min)
        } else {
            0.5
        };
        Point::new(area.x0 + fx * area.width(), area.y1 - fy * area.height())
    };

    let mut path = BezPath::new();
    path.move_to(map(&points[0]));
    for p in &points[1..] {
        path.line_to(map(p));
    }
    Ok(Some(path))
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/dashboard/chart.rs"]
mod tests;
