//! Chart creation draft

use rand::Rng;

use crate::constants::chart::INITIAL_POSITION_SPREAD;
use crate::error::{DashError, Result};
use crate::model::{toggle_signal, ChartConfig, ChartRegistry, ChartType, Position};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDraft {
    pub title: String,
    pub chart_type: Option<ChartType>,
    /// Selection order is kept
    pub signals: Vec<String>,
}

impl ChartDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft with a type already chosen, as the sidebar tiles do
    pub fn with_type(chart_type: ChartType) -> Self {
        Self {
            chart_type: Some(chart_type),
            ..Self::default()
        }
    }

    pub fn toggle_signal(&mut self, signal: &str) {
        toggle_signal(&mut self.signals, signal);
    }

    pub fn validate(&self) -> Result<ChartType> {
        if self.title.trim().is_empty() {
            return Err(DashError::MissingField { field: "chart title" });
        }
        let chart_type = self
            .chart_type
            .clone()
            .filter(|t| ChartType::SELECTABLE.contains(t))
            .ok_or(DashError::MissingField { field: "chart type" })?;
        if self.signals.is_empty() {
            return Err(DashError::MissingField { field: "signal selection" });
        }
        Ok(chart_type)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Build the chart this draft describes at a random spot near the origin
    pub fn build<R: Rng>(&self, id: String, rng: &mut R) -> Result<ChartConfig> {
        let chart_type = self.validate()?;
        let position = Position::new(
            rng.random_range(0..INITIAL_POSITION_SPREAD) as f64,
            rng.random_range(0..INITIAL_POSITION_SPREAD) as f64,
        );
        Ok(ChartConfig::new(
            id,
            chart_type,
            self.title.trim(),
            self.signals.clone(),
            position,
        ))
    }

    /// Append the chart to `registry` and reset the draft
    ///
    /// An invalid draft is left untouched and nothing is added.
    pub fn submit<R: Rng>(
        &mut self,
        registry: &mut ChartRegistry,
        timestamp_millis: i64,
        rng: &mut R,
    ) -> Result<String> {
        let chart = self.build(registry.next_id(timestamp_millis), rng)?;
        let id = chart.id.clone();
        registry.add(chart);
        *self = Self::default();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChartSize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn temp_draft() -> ChartDraft {
        let mut draft = ChartDraft::with_type(ChartType::Line);
        draft.title = "Temp".into();
        draft.toggle_signal("temperature");
        draft
    }

    #[test]
    fn test_valid_submit_adds_one_chart() {
        let mut reg = ChartRegistry::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut draft = temp_draft();

        let id = draft.submit(&mut reg, 1_700_000_000_000, &mut rng).unwrap();
        assert_eq!(reg.len(), 1);

        let chart = reg.get(&id).unwrap();
        assert_eq!(chart.chart_type, ChartType::Line);
        assert_eq!(chart.signals, vec!["temperature".to_string()]);
        assert_eq!(chart.size, ChartSize::new(400.0, 300.0));
        assert!(chart.signal_filters.is_empty());
        assert_eq!(draft, ChartDraft::default());

        let json = serde_json::to_value(chart).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["signals"][0], "temperature");
    }

    #[test]
    fn test_same_millisecond_ids_are_distinct() {
        let mut reg = ChartRegistry::new();
        let mut rng = StdRng::seed_from_u64(3);
        let first = temp_draft().submit(&mut reg, 42, &mut rng).unwrap();
        let second = temp_draft().submit(&mut reg, 42, &mut rng).unwrap();
        assert_ne!(first, second);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_initial_position_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..100 {
            let chart = temp_draft().build(format!("c{}", i), &mut rng).unwrap();
            for v in [chart.position.x, chart.position.y] {
                assert!((0.0..200.0).contains(&v));
                assert_eq!(v.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_invalid_drafts_add_nothing() {
        let mut reg = ChartRegistry::new();
        let mut rng = StdRng::seed_from_u64(1);

        let mut blank_title = temp_draft();
        blank_title.title = "   ".into();
        let mut no_type = temp_draft();
        no_type.chart_type = None;
        let mut unknown_type = temp_draft();
        unknown_type.chart_type = Some(ChartType::Unknown("radar".into()));
        let mut no_signals = temp_draft();
        no_signals.toggle_signal("temperature");

        for mut draft in [blank_title, no_type, unknown_type, no_signals] {
            assert!(!draft.is_valid());
            let before = draft.clone();
            let err = draft.submit(&mut reg, 1, &mut rng).unwrap_err();
            assert!(matches!(err, DashError::MissingField { .. }));
            assert_eq!(draft, before);
        }
        assert!(reg.is_empty());
    }

    #[test]
    fn test_title_is_trimmed() {
        let mut draft = temp_draft();
        draft.title = "  Temp  ".into();
        let chart = draft.build("x".into(), &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(chart.title, "Temp");
    }
}
