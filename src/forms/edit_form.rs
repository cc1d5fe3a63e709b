//! Chart edit draft

use crate::error::{DashError, Result};
use crate::model::{toggle_signal, ChartConfig, ChartPatch, ChartSize, ChartType, SignalFilter};

/// Editable copy of one chart, committed as a single patch
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub chart_id: String,
    pub title: String,
    pub chart_type: ChartType,
    pub signals: Vec<String>,
    pub signal_filters: Vec<SignalFilter>,
    pub legend_name: String,
    pub x_axis_name: String,
    pub y_axis_name: String,
    pub enable_cursor: bool,
    pub width: f64,
    pub height: f64,
}

impl EditDraft {
    pub fn from_chart(chart: &ChartConfig) -> Self {
        Self {
            chart_id: chart.id.clone(),
            title: chart.title.clone(),
            chart_type: chart.chart_type.clone(),
            signals: chart.signals.clone(),
            signal_filters: chart.signal_filters.clone(),
            legend_name: chart.legend_name.clone(),
            x_axis_name: chart.x_axis_name.clone(),
            y_axis_name: chart.y_axis_name.clone(),
            enable_cursor: chart.cursor_enabled(),
            width: chart.size.width,
            height: chart.size.height,
        }
    }

    pub fn toggle_signal(&mut self, signal: &str) {
        toggle_signal(&mut self.signals, signal);
    }

    /// New filter on the first known signal, `> 0`
    pub fn add_filter(&mut self, known_signals: &[String]) {
        let signal = known_signals.first().cloned().unwrap_or_default();
        self.signal_filters.push(SignalFilter::new(signal));
    }

    pub fn remove_filter(&mut self, index: usize) {
        if index < self.signal_filters.len() {
            self.signal_filters.remove(index);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(DashError::MissingField { field: "chart title" });
        }
        if self.signals.is_empty() {
            return Err(DashError::MissingField { field: "signal selection" });
        }
        Ok(())
    }

    /// Everything the dialog edits; id and position are never part of it
    pub fn to_patch(&self) -> Result<ChartPatch> {
        self.validate()?;
        Ok(ChartPatch {
            title: Some(self.title.trim().to_string()),
            chart_type: Some(self.chart_type.clone()),
            position: None,
            size: Some(ChartSize::new(self.width, self.height)),
            signals: Some(self.signals.clone()),
            signal_filters: Some(self.signal_filters.clone()),
            legend_name: Some(self.legend_name.clone()),
            x_axis_name: Some(self.x_axis_name.clone()),
            y_axis_name: Some(self.y_axis_name.clone()),
            enable_cursor: Some(self.enable_cursor),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChartRegistry, Comparison, Position};

    fn chart() -> ChartConfig {
        ChartConfig::new(
            "chart-9",
            ChartType::Line,
            "Temp",
            vec!["temperature".into()],
            Position::new(120.0, 80.0),
        )
    }

    #[test]
    fn test_edit_never_moves_or_renames_id() {
        let mut reg = ChartRegistry::new();
        reg.add(chart());

        let mut draft = EditDraft::from_chart(reg.get("chart-9").unwrap());
        draft.title = "Pressure".into();
        draft.chart_type = ChartType::Area;
        draft.toggle_signal("pressure");
        draft.width = 600.0;
        draft.height = 250.0;
        draft.enable_cursor = true;
        draft.x_axis_name = "Hour".into();

        assert!(reg.update(&draft.chart_id, draft.to_patch().unwrap()));
        let edited = reg.get("chart-9").unwrap();
        assert_eq!(edited.position, Position::new(120.0, 80.0));
        assert_eq!(edited.title, "Pressure");
        assert_eq!(edited.chart_type, ChartType::Area);
        assert_eq!(edited.signals, vec!["temperature".to_string(), "pressure".to_string()]);
        assert_eq!(edited.size, ChartSize::new(600.0, 250.0));
        assert!(edited.cursor_enabled());
        assert_eq!(edited.x_axis_name, "Hour");
    }

    #[test]
    fn test_filters_add_edit_remove() {
        let mut draft = EditDraft::from_chart(&chart());
        let known = vec!["signal1".to_string(), "signal2".to_string()];
        draft.add_filter(&known);
        draft.add_filter(&known);
        assert_eq!(draft.signal_filters[0].signal, "signal1");
        assert_eq!(draft.signal_filters[0].condition, Comparison::Gt);
        assert_eq!(draft.signal_filters[0].value, 0.0);

        draft.signal_filters[1].value = 12.5;
        draft.remove_filter(0);
        draft.remove_filter(7);
        assert_eq!(draft.signal_filters.len(), 1);
        assert_eq!(draft.signal_filters[0].value, 12.5);
    }

    #[test]
    fn test_invalid_edit_is_rejected() {
        let mut draft = EditDraft::from_chart(&chart());
        draft.title.clear();
        assert!(draft.to_patch().is_err());

        let mut draft = EditDraft::from_chart(&chart());
        draft.toggle_signal("temperature");
        assert!(matches!(
            draft.to_patch(),
            Err(DashError::MissingField { field: "signal selection" })
        ));
    }
}
