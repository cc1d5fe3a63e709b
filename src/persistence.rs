//! Saving and loading dashboard configurations
//!
//! A dashboard is stored as JSON in eframe's app storage under a single key,
//! and can also be exported to or imported from a file.

use std::path::Path;

use chrono::NaiveDate;

use crate::constants::config::{EXPORT_PREFIX, STORAGE_KEY};
use crate::error::{DashError, Result};
use crate::model::DashboardConfig;

pub fn to_json(config: &DashboardConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

pub fn from_json(text: &str) -> Result<DashboardConfig> {
    Ok(serde_json::from_str(text)?)
}

/// Write the dashboard to app storage
pub fn save_local(storage: &mut dyn eframe::Storage, config: &DashboardConfig) -> Result<()> {
    let json = to_json(config)?;
    storage.set_string(STORAGE_KEY, json);
    storage.flush();
    tracing::info!(charts = config.charts.len(), "dashboard saved to local storage");
    Ok(())
}

/// Read the dashboard from app storage; `Ok(None)` when nothing was saved
pub fn load_local(storage: &dyn eframe::Storage) -> Result<Option<DashboardConfig>> {
    let Some(text) = storage.get_string(STORAGE_KEY) else {
        return Ok(None);
    };
    let config = from_json(&text)?;
    tracing::info!(charts = config.charts.len(), "dashboard loaded from local storage");
    Ok(Some(config))
}

pub fn export_file(path: &Path, config: &DashboardConfig) -> Result<()> {
    std::fs::write(path, to_json(config)?)?;
    tracing::info!(path = %path.display(), "dashboard exported");
    Ok(())
}

pub fn import_file(path: &Path) -> Result<DashboardConfig> {
    let text = std::fs::read_to_string(path).map_err(DashError::Load)?;
    let config = from_json(&text)?;
    tracing::info!(path = %path.display(), charts = config.charts.len(), "dashboard imported");
    Ok(config)
}

/// `dashboard-config-<YYYY-MM-DD>.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}{}.json", EXPORT_PREFIX, date.format("%Y-%m-%d"))
}

/// Put `text` on the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| DashError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| DashError::Clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChartConfig, ChartType, Comparison, Condition, FilterSnapshot, Position, SignalFilter};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    fn sample_config() -> DashboardConfig {
        let mut first = ChartConfig::new("chart-1", ChartType::Line, "Temp", vec!["temperature".into()], Position::new(12.0, 40.0));
        first.signal_filters.push(SignalFilter::new("temperature"));
        first.enable_cursor = Some(true);
        let second = ChartConfig::new(
            "chart-2",
            ChartType::Heatmap,
            "Overview",
            vec!["signal1".into(), "signal2".into()],
            Position::new(300.0, 0.0),
        );

        DashboardConfig {
            charts: vec![first, second],
            filters: FilterSnapshot {
                time_range: [6, 18],
                selected_files: vec!["run.csv".into()],
                signal_filters: vec![Condition::new("c1", "BattU", Comparison::Gt, "12")],
                ..FilterSnapshot::default()
            },
        }
    }

    #[test]
    fn test_save_then_load_local() {
        let mut storage = MemoryStorage::default();
        let config = sample_config();
        save_local(&mut storage, &config).unwrap();

        let loaded = load_local(&storage).unwrap().unwrap();
        assert_eq!(loaded, config);
        let ids: Vec<&str> = loaded.charts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["chart-1", "chart-2"]);
    }

    #[test]
    fn test_load_local_nothing_saved() {
        let storage = MemoryStorage::default();
        assert!(load_local(&storage).unwrap().is_none());
    }

    #[test]
    fn test_load_local_malformed() {
        let mut storage = MemoryStorage::default();
        storage.0.insert(STORAGE_KEY.to_string(), "{ charts: oops".to_string());
        let err = load_local(&storage).unwrap_err();
        assert_eq!(err.title(), "Load Failed");
    }

    #[test]
    fn test_missing_charts_loads_empty() {
        let cfg = from_json(r#"{"filters": {"timeRange": [1, 2]}}"#).unwrap();
        assert!(cfg.charts.is_empty());
        assert_eq!(cfg.filters.time_range, [1, 2]);
    }

    #[test]
    fn test_export_import_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(export_file_name(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()));
        let config = sample_config();

        export_file(&path, &config).unwrap();
        assert_eq!(import_file(&path).unwrap(), config);
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = import_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DashError::Load(_)));
        assert_eq!(err.title(), "Load Failed");
    }

    #[test]
    fn test_export_to_missing_dir_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_file(&dir.path().join("no-such-dir").join("out.json"), &sample_config()).unwrap_err();
        assert_eq!(err.title(), "File Error");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(export_file_name(date), "dashboard-config-2024-01-05.json");
    }
}
