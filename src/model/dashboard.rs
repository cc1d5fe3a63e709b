//! Persisted dashboard layout

use super::chart::ChartConfig;
use super::query::Condition;
use crate::constants::filters::*;
use serde::{Deserialize, Serialize};

/// Filter section of a saved dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSnapshot {
    #[serde(default = "default_date_range")]
    pub date_range: [String; 2],
    #[serde(default = "default_time_range")]
    pub time_range: [u8; 2],
    #[serde(default)]
    pub selected_files: Vec<String>,
    #[serde(default)]
    pub signal_filters: Vec<Condition>,
}

fn default_date_range() -> [String; 2] {
    [DEFAULT_DATE_START.to_string(), DEFAULT_DATE_END.to_string()]
}

fn default_time_range() -> [u8; 2] {
    [MIN_HOUR, MAX_HOUR]
}

impl Default for FilterSnapshot {
    fn default() -> Self {
        Self {
            date_range: default_date_range(),
            time_range: default_time_range(),
            selected_files: Vec::new(),
            signal_filters: Vec::new(),
        }
    }
}

/// Everything written by save and read by load. No version field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub charts: Vec<ChartConfig>,
    #[serde(default)]
    pub filters: FilterSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_defaults() {
        let cfg: DashboardConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.charts.is_empty());
        assert_eq!(cfg.filters.time_range, [0, 24]);
        assert_eq!(cfg.filters.date_range[0], "2024-01-01");
    }

    #[test]
    fn test_filters_layout() {
        let json = serde_json::to_value(DashboardConfig::default()).unwrap();
        let filters = &json["filters"];
        assert!(filters.get("dateRange").is_some());
        assert!(filters.get("timeRange").is_some());
        assert!(filters.get("selectedFiles").is_some());
        assert!(filters.get("signalFilters").is_some());
    }
}
