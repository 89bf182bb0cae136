use kurbo::{RoundedRect, Shape as _};

use crate::{
    dashboard::{
        cards::{MetricsDashboard, primary_metrics},
        chart::{LineChart, SAMPLE_SERIES, SeriesPoint, SeriesRenderer},
    },
    foundation::{
        core::{Rect, Rgba8, Viewport},
        error::{VoiceprintsError, VoiceprintsResult},
        rng::ColorSource,
    },
    fractal::background::{FractalBackground, MountedBackground},
    render::backend::DrawSurface,
};

const PAD: f64 = 24.0;
const TITLE_HEIGHT: f64 = 48.0;
const CARD_HEIGHT: f64 = 120.0;
const CARD_RADIUS: f64 = 12.0;

/// Rectangles of the page elements for one viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub cards: Vec<Rect>,
    pub chart: Rect,
}

impl PageLayout {
    /// Cards in a row under the title, the chart filling the rest.
    pub fn for_viewport(viewport: Viewport, card_count: usize) -> VoiceprintsResult<Self> {
        let bounds = viewport.bounds();
        let (w, h) = (bounds.width(), bounds.height());
        let n = card_count.max(1) as f64;

        let card_w = (w - PAD * (n + 1.0)) / n;
        let cards_top = PAD + TITLE_HEIGHT;
        let chart_top = cards_top + CARD_HEIGHT + PAD;
        if card_w <= 0.0 || chart_top >= h - PAD {
            return Err(VoiceprintsError::validation(format!(
                "viewport {}x{} is too small for the dashboard layout",
                viewport.width, viewport.height
            )));
        }

        let cards = (0..card_count)
            .map(|i| {
                let x0 = PAD + i as f64 * (card_w + PAD);
                Rect::new(x0, cards_top, x0 + card_w, cards_top + CARD_HEIGHT)
            })
            .collect();
        Ok(Self {
            cards,
            chart: Rect::new(PAD, chart_top, w - PAD, h - PAD),
        })
    }
}

/// Page shell: fractal background with card panels and the chart stacked on top.
#[derive(Clone, Debug)]
pub struct DashboardPage {
    pub background: FractalBackground,
    pub metrics: MetricsDashboard,
    pub chart: LineChart,
    pub series: Vec<SeriesPoint>,
    pub panel: Rgba8,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self {
            background: FractalBackground::default(),
            metrics: primary_metrics(),
            chart: LineChart::default(),
            series: SAMPLE_SERIES.to_vec(),
            panel: Rgba8::opaque(0x1c, 0x1c, 0x3c).with_alpha(0xb3),
        }
    }
}

impl DashboardPage {
    pub fn with_background(background: FractalBackground) -> Self {
        Self {
            background,
            ..Self::default()
        }
    }

    /// Mount the background, then draw panels and chart over it.
    ///
    /// The returned guard owns teardown of the whole page.
    #[tracing::instrument(skip(self, surface, colors))]
    pub fn render<'s, S: DrawSurface>(
        &self,
        surface: &'s mut S,
        colors: &mut dyn ColorSource,
    ) -> VoiceprintsResult<MountedBackground<'s, S>> {
        let layout = PageLayout::for_viewport(surface.size(), self.metrics.cards.len())?;
        let mut mounted = self.background.mount(surface, colors)?;

        let target = mounted.surface_mut();
        for rect in &layout.cards {
            let panel = RoundedRect::from_rect(*rect, CARD_RADIUS).to_path(0.1);
            target.fill_path(&panel, self.panel)?;
        }
        let segments = self.chart.render(&mut *target, layout.chart, &self.series)?;
        target.present()?;

        tracing::debug!(
            cards = layout.cards.len(),
            segments,
            "dashboard layers drawn"
        );
        Ok(mounted)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dashboard/page.rs"]
mod tests;
