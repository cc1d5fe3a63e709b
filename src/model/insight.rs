//! Canned analysis insights

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Anomaly,
    Trend,
    Suggestion,
    Prediction,
}

impl InsightKind {
    pub fn icon(self) -> &'static str {
        match self {
            InsightKind::Anomaly => "⚠",
            InsightKind::Trend => "📈",
            InsightKind::Suggestion => "💡",
            InsightKind::Prediction => "⚡",
        }
    }

    pub fn color(self) -> egui::Color32 {
        match self {
            InsightKind::Anomaly => egui::Color32::from_rgb(220, 38, 38),
            InsightKind::Trend => egui::Color32::from_rgb(37, 99, 235),
            InsightKind::Suggestion => egui::Color32::from_rgb(202, 138, 4),
            InsightKind::Prediction => egui::Color32::from_rgb(147, 51, 234),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    /// Percentage, 0 to 100
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
}

impl Insight {
    pub fn new(
        id: impl Into<String>,
        kind: InsightKind,
        title: impl Into<String>,
        description: impl Into<String>,
        confidence: u8,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: description.into(),
            confidence: confidence.min(100),
            signal: None,
        }
    }

    pub fn with_signal(mut self, signal: impl Into<String>) -> Self {
        self.signal = Some(signal.into());
        self
    }
}

/// Insights shown before any analysis has run
pub fn initial_insights() -> Vec<Insight> {
    vec![
        Insight::new(
            "1",
            InsightKind::Anomaly,
            "Signal Spike Detected",
            "Unusual spike in signal1 at 08:00 - 45% above normal range",
            92,
        )
        .with_signal("signal1"),
        Insight::new(
            "2",
            InsightKind::Trend,
            "Temperature Correlation",
            "Strong correlation detected between temperature and pressure (r=0.87)",
            87,
        ),
        Insight::new(
            "3",
            InsightKind::Suggestion,
            "Optimal Chart Recommendation",
            "Consider using scatter plot for temperature vs pressure analysis",
            78,
        ),
    ]
}
