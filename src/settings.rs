//! Runtime settings read from an optional JSON file
//!
//! Every field has a default, so a partial file only overrides what it names.

use crate::canvas::CanvasLayout;
use crate::constants::{config::SETTINGS_FILE, layout, mock, signals};
use crate::error::{DashError, Result};
use crate::mock::MockDelays;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub insight_delay_ms: u64,
    pub query_delay_ms: u64,
    pub signal_delay_ms: u64,
    /// Canvas layout used at startup
    pub layout: CanvasLayout,
    /// Signal names available at startup
    pub signals: Vec<String>,
    pub toast_lifetime_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            insight_delay_ms: mock::INSIGHT_DELAY_MS,
            query_delay_ms: mock::QUERY_DELAY_MS,
            signal_delay_ms: mock::SIGNAL_DELAY_MS,
            layout: CanvasLayout::default(),
            signals: signals::INITIAL.iter().map(|s| s.to_string()).collect(),
            toast_lifetime_secs: layout::TOAST_LIFETIME_SECS,
        }
    }
}

impl Settings {
    /// Load `signal-dash.json` from the working directory, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::from_path(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring invalid settings file");
                Self::default()
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| DashError::Settings(e.to_string()))
    }

    pub fn delays(&self) -> MockDelays {
        MockDelays {
            insights: Duration::from_millis(self.insight_delay_ms),
            query: Duration::from_millis(self.query_delay_ms),
            signal: Duration::from_millis(self.signal_delay_ms),
        }
    }

    /// At least half a second; an unrepresentable value falls back to the default
    pub fn toast_lifetime(&self) -> Duration {
        match Duration::try_from_secs_f32(self.toast_lifetime_secs.max(0.5)) {
            Ok(lifetime) => lifetime,
            Err(e) => {
                tracing::warn!(value = self.toast_lifetime_secs, error = %e, "ignoring toast lifetime");
                Duration::from_secs_f32(layout::TOAST_LIFETIME_SECS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_overrides() {
        let s = Settings::from_json(r#"{"queryDelayMs": 5, "layout": "grid"}"#).unwrap();
        assert_eq!(s.query_delay_ms, 5);
        assert_eq!(s.layout, CanvasLayout::Grid);
        assert_eq!(s.insight_delay_ms, mock::INSIGHT_DELAY_MS);
        assert_eq!(s.signals.len(), 5);
    }

    #[test]
    fn test_invalid_settings() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DashError::Settings(_)));
    }

    #[test]
    fn test_toast_lifetime_bounds() {
        let huge = Settings::from_json(r#"{"toastLifetimeSecs": 1e30}"#).unwrap();
        assert_eq!(huge.toast_lifetime(), Duration::from_secs_f32(layout::TOAST_LIFETIME_SECS));

        let tiny = Settings::from_json(r#"{"toastLifetimeSecs": 0.0}"#).unwrap();
        assert_eq!(tiny.toast_lifetime(), Duration::from_millis(500));

        assert_eq!(Settings::default().toast_lifetime(), Duration::from_secs(4));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{"signals": ["rpm"]}}"#).unwrap();
        file.flush().unwrap();

        let s = Settings::from_path(file.path()).unwrap();
        assert_eq!(s.signals, vec!["rpm".to_string()]);
        assert_eq!(s.delays().query, Duration::from_millis(mock::QUERY_DELAY_MS));
    }
}
