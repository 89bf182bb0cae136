/// Title shown above the metric cards.
pub const DASHBOARD_TITLE: &str = "Primary Vocal Metrics";

/// One static metric tile.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MetricCard {
    pub value: String,
    pub unit: String,
    pub label: String,
    pub icon: String,
}

impl MetricCard {
    fn new(value: &str, unit: &str, label: &str, icon: &str) -> Self {
        Self {
            value: value.to_owned(),
            unit: unit.to_owned(),
            label: label.to_owned(),
            icon: icon.to_owned(),
        }
    }
}

/// Dashboard header plus its cards, as published by `voiceprints cards`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MetricsDashboard {
    pub title: String,
    pub cards: Vec<MetricCard>,
}

/// The three fixed cards. Values are literals, not computed.
pub fn primary_metrics() -> MetricsDashboard {
    MetricsDashboard {
        title: DASHBOARD_TITLE.to_owned(),
        cards: vec![
            MetricCard::new("150", "Words/min", "Speech Rate", "⬆️"),
            MetricCard::new("14", "Per minute", "Pauses", "⚠️"),
            MetricCard::new("85%", "Clarity score", "Voice Quality", "📊"),
        ],
    }
}
