//! In-memory chart registry
//!
//! The registry is the only owner of chart configurations. Forms, the canvas
//! gesture controller and config loading all go through `add`, `update`,
//! `remove` and `replace_all`.

use super::chart::{ChartConfig, ChartPatch};
use crate::constants::chart::ID_PREFIX;

#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    charts: Vec<ChartConfig>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charts(&self) -> &[ChartConfig] {
        &self.charts
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ChartConfig> {
        self.charts.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Derive a fresh identifier from a millisecond timestamp
    ///
    /// Two charts created within the same millisecond get a numeric suffix.
    pub fn next_id(&self, timestamp_millis: i64) -> String {
        let base = format!("{}{}", ID_PREFIX, timestamp_millis);
        if !self.contains(&base) {
            return base;
        }
        (1..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| !self.contains(candidate))
            .unwrap_or(base)
    }

    /// Append a chart to the end of the list
    pub fn add(&mut self, chart: ChartConfig) {
        tracing::debug!(id = %chart.id, kind = chart.chart_type.short_name(), "chart added");
        self.charts.push(chart);
    }

    /// Single update entry point keyed by chart id
    ///
    /// Returns false when no chart has that id.
    pub fn update(&mut self, id: &str, patch: ChartPatch) -> bool {
        match self.charts.iter_mut().find(|c| c.id == id) {
            Some(chart) => {
                chart.apply(patch);
                true
            }
            None => {
                tracing::trace!(id, "update for unknown chart ignored");
                false
            }
        }
    }

    /// Remove exactly the chart with `id`; unknown ids are a no-op
    pub fn remove(&mut self, id: &str) -> Option<ChartConfig> {
        let idx = self.charts.iter().position(|c| c.id == id)?;
        tracing::debug!(id, "chart removed");
        Some(self.charts.remove(idx))
    }

    /// Replace the whole list, as done when a saved config is loaded
    pub fn replace_all(&mut self, charts: Vec<ChartConfig>) {
        self.charts = charts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::chart::{ChartType, Position};

    fn chart(id: &str) -> ChartConfig {
        ChartConfig::new(id, ChartType::Line, id, vec!["signal1".into()], Position::default())
    }

    #[test]
    fn test_remove_only_matching_entry() {
        let mut reg = ChartRegistry::new();
        reg.add(chart("a"));
        reg.add(chart("b"));
        reg.add(chart("c"));

        let removed = reg.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        let ids: Vec<&str> = reg.charts().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut reg = ChartRegistry::new();
        reg.add(chart("a"));
        assert!(reg.remove("zzz").is_none());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_update_unknown_returns_false() {
        let mut reg = ChartRegistry::new();
        assert!(!reg.update("missing", ChartPatch::position(Position::new(1.0, 1.0))));
    }

    #[test]
    fn test_update_by_id() {
        let mut reg = ChartRegistry::new();
        reg.add(chart("a"));
        reg.add(chart("b"));
        assert!(reg.update("b", ChartPatch::position(Position::new(5.0, 6.0))));
        assert_eq!(reg.get("b").unwrap().position, Position::new(5.0, 6.0));
        assert_eq!(reg.get("a").unwrap().position, Position::default());
    }

    #[test]
    fn test_next_id_is_unique() {
        let mut reg = ChartRegistry::new();
        let first = reg.next_id(1000);
        assert_eq!(first, "chart-1000");
        reg.add(chart(&first));

        let second = reg.next_id(1000);
        assert_eq!(second, "chart-1000-1");
        reg.add(chart(&second));

        assert_eq!(reg.next_id(1000), "chart-1000-2");
        assert_eq!(reg.next_id(1001), "chart-1001");
    }
}
