//! Application state management
//!
//! `AppState` is owned by the app and handed to each panel. All chart
//! mutations go through the registry entry points exposed here.

mod filters;
mod query;
mod ui;

pub use filters::FilterState;
pub use query::QueryState;
pub use ui::{Panel, ToastKind, UiState};

use std::path::Path;

use rand::Rng;

use crate::constants::signals::DATA_EXTENSIONS;
use crate::error::Result;
use crate::forms::{ChartDraft, EditDraft, SignalDraft};
use crate::mock::{BackendRequest, BackendResponse, RequestKind};
use crate::model::{
    initial_insights, ChartPatch, ChartRegistry, ChartType, DashboardConfig, Insight, SampleDataset, SeriesSummary,
};
use crate::settings::Settings;

/// Metadata of an uploaded data file; contents are never read
#[derive(Debug, Clone, PartialEq)]
pub struct DataFile {
    pub name: String,
    pub extension: String,
    pub size_bytes: u64,
}

impl DataFile {
    /// `None` for extensions the dashboard does not accept
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Option<Self> {
        let name = name.into();
        let extension = Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())?;
        if !DATA_EXTENSIONS.contains(&extension.as_str()) {
            return None;
        }
        Some(Self {
            name,
            extension,
            size_bytes,
        })
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        Self::new(name, size)
    }

    pub fn size_label(&self) -> String {
        match self.size_bytes {
            b if b >= 1024 * 1024 => format!("{:.1} MB", b as f64 / (1024.0 * 1024.0)),
            b if b >= 1024 => format!("{:.1} KB", b as f64 / 1024.0),
            b => format!("{} B", b),
        }
    }
}

/// Where a dashboard being loaded came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    LocalStorage,
    File,
}

/// Main application state container
pub struct AppState {
    pub registry: ChartRegistry,

    /// Known signal names, in creation order
    pub signals: Vec<String>,

    pub data_files: Vec<DataFile>,

    pub filters: FilterState,

    /// Newest first
    pub insights: Vec<Insight>,

    pub query: QueryState,

    pub chart_draft: ChartDraft,

    /// Open edit dialog, if any
    pub edit_draft: Option<EditDraft>,

    pub signal_draft: SignalDraft,

    pub ui: UiState,

    pub dataset: SampleDataset,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut ui = UiState::new();
        ui.layout = settings.layout;
        ui.toast_lifetime = settings.toast_lifetime();

        Self {
            registry: ChartRegistry::new(),
            signals: settings.signals.clone(),
            data_files: Vec::new(),
            filters: FilterState::new(),
            insights: initial_insights(),
            query: QueryState::new(),
            chart_draft: ChartDraft::new(),
            edit_draft: None,
            signal_draft: SignalDraft::new(),
            ui,
            dataset: SampleDataset::new(),
        }
    }

    /// Open the creation dialog, optionally with a type preselected
    pub fn open_chart_dialog(&mut self, chart_type: Option<ChartType>) {
        self.chart_draft = match chart_type {
            Some(t) => ChartDraft::with_type(t),
            None => ChartDraft::new(),
        };
        self.ui.chart_dialog_open = true;
    }

    /// Submit the creation draft; returns the new chart id
    pub fn add_chart<R: Rng>(&mut self, timestamp_millis: i64, rng: &mut R) -> Option<String> {
        match self.chart_draft.submit(&mut self.registry, timestamp_millis, rng) {
            Ok(id) => {
                self.ui.chart_dialog_open = false;
                self.ui.success("Chart Created", "New chart has been added to the canvas");
                Some(id)
            }
            Err(e) => {
                self.ui.report(&e);
                None
            }
        }
    }

    pub fn update_chart(&mut self, id: &str, patch: ChartPatch) -> bool {
        self.registry.update(id, patch)
    }

    /// Remove exactly the chart with `id`; unknown ids do nothing
    pub fn remove_chart(&mut self, id: &str) -> bool {
        if self.registry.remove(id).is_none() {
            return false;
        }
        if self.edit_draft.as_ref().is_some_and(|d| d.chart_id == id) {
            self.edit_draft = None;
        }
        if self.ui.gestures.active_chart() == Some(id) {
            self.ui.gestures.release();
        }
        true
    }

    pub fn begin_edit(&mut self, id: &str) {
        self.edit_draft = self.registry.get(id).map(EditDraft::from_chart);
    }

    /// Commit the open edit dialog; an invalid draft stays open
    pub fn submit_edit(&mut self) -> bool {
        let Some(draft) = &self.edit_draft else {
            return false;
        };
        let patch = match draft.to_patch() {
            Ok(patch) => patch,
            Err(e) => {
                self.ui.report(&e);
                return false;
            }
        };
        let id = draft.chart_id.clone();
        self.edit_draft = None;
        if self.update_chart(&id, patch) {
            tracing::debug!(id, "chart edited");
            self.ui.success("Chart Updated", "Chart configuration has been saved");
            true
        } else {
            false
        }
    }

    /// Add a signal name; duplicates are skipped
    pub fn add_signal(&mut self, name: &str) -> bool {
        if self.signals.iter().any(|s| s == name) {
            return false;
        }
        self.signals.push(name.to_string());
        true
    }

    pub fn add_data_files(&mut self, files: Vec<DataFile>) -> usize {
        let count = files.len();
        if count > 0 {
            tracing::info!(count, "data files registered");
            self.data_files.extend(files);
        }
        count
    }

    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            charts: self.registry.charts().to_vec(),
            filters: self.filters.to_snapshot(),
        }
    }

    /// Replace charts and filters with a loaded dashboard
    pub fn apply_config(&mut self, config: DashboardConfig) {
        let DashboardConfig { charts, filters } = config;
        tracing::info!(charts = charts.len(), "dashboard configuration applied");
        self.ui.gestures.release();
        self.edit_draft = None;
        self.registry.replace_all(charts);
        self.filters.restore(filters);
    }

    /// Apply the outcome of reading a saved dashboard
    ///
    /// Only a successful read replaces charts and filters. `Ok(None)` means
    /// nothing was saved; errors leave the current dashboard untouched.
    pub fn load_result(&mut self, result: Result<Option<DashboardConfig>>, source: ConfigSource) -> bool {
        match (result, source) {
            (Ok(Some(config)), ConfigSource::LocalStorage) => {
                self.apply_config(config);
                self.ui
                    .success("Configuration Loaded", "Dashboard restored from local storage");
                true
            }
            (Ok(Some(config)), ConfigSource::File) => {
                self.apply_config(config);
                self.ui.success("Configuration Imported", "Dashboard loaded from file");
                true
            }
            (Ok(None), _) => {
                self.ui
                    .info("Nothing Saved", "No saved configuration found in local storage");
                false
            }
            (Err(e), _) => {
                self.ui.report(&e);
                false
            }
        }
    }

    pub fn signal_summary(&self, signal: &str) -> Option<SeriesSummary> {
        self.dataset.summary(signal)
    }

    /// Generate Insights; `None` while a run is already in flight
    pub fn begin_insights(&mut self) -> Option<BackendRequest> {
        if self.ui.is_loading(RequestKind::Insights) {
            return None;
        }
        self.ui.set_loading(RequestKind::Insights, true);
        Some(BackendRequest::GenerateInsights)
    }

    /// Run Query; with no conditions no request is made
    pub fn begin_query(&mut self) -> Option<BackendRequest> {
        if self.query.conditions.is_empty() {
            self.ui.error("No Conditions", "Please add at least one query condition");
            return None;
        }
        if self.ui.is_loading(RequestKind::Query) {
            return None;
        }
        self.ui.set_loading(RequestKind::Query, true);
        Some(BackendRequest::RunQuery {
            conditions: self.query.conditions.clone(),
        })
    }

    /// Create Signal; a missing name or formula makes no request
    pub fn begin_signal_creation(&mut self) -> Option<BackendRequest> {
        if self.ui.is_loading(RequestKind::Signal) {
            return None;
        }
        match self.signal_draft.validate() {
            Ok((name, formula)) => {
                self.ui.set_loading(RequestKind::Signal, true);
                Some(BackendRequest::CreateSignal { name, formula })
            }
            Err(e) => {
                self.ui.report(&e);
                None
            }
        }
    }

    /// Apply a finished backend request
    pub fn apply_response(&mut self, response: BackendResponse) {
        self.ui.set_loading(response.kind(), false);
        match response {
            BackendResponse::InsightsReady(mut fresh) => {
                let count = fresh.len();
                fresh.append(&mut self.insights);
                self.insights = fresh;
                self.ui
                    .success("Analysis Complete", format!("Generated {} new insight(s)", count));
            }
            BackendResponse::QueryReady(result) => {
                let rows = result.row_count();
                self.query.result = Some(result);
                self.ui
                    .success("Query Executed", format!("Found {} matching records", rows));
            }
            BackendResponse::SignalCreated { name } => {
                self.add_signal(&name);
                self.signal_draft.reset();
                self.ui
                    .success("Signal Created", format!("Signal '{}' has been created successfully", name));
            }
            BackendResponse::Failed { error, .. } => self.ui.report(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::GestureState;
    use crate::error::DashError;
    use crate::model::{ChartConfig, Comparison, Condition, Position, QueryResult};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state_with_chart() -> (AppState, String) {
        let mut state = AppState::default();
        state.open_chart_dialog(Some(ChartType::Line));
        state.chart_draft.title = "Temp".into();
        state.chart_draft.toggle_signal("temperature");
        let id = state.add_chart(1000, &mut StdRng::seed_from_u64(5)).unwrap();
        (state, id)
    }

    #[test]
    fn test_add_chart_closes_dialog() {
        let (state, id) = state_with_chart();
        assert!(!state.ui.chart_dialog_open);
        assert_eq!(state.registry.len(), 1);
        assert!(state.registry.contains(&id));
        assert_eq!(state.ui.toasts.last().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn test_invalid_add_keeps_dialog_open() {
        let mut state = AppState::default();
        state.open_chart_dialog(None);
        assert!(state.add_chart(1, &mut StdRng::seed_from_u64(0)).is_none());
        assert!(state.ui.chart_dialog_open);
        assert!(state.registry.is_empty());
        assert_eq!(state.ui.toasts.last().unwrap().title, "Missing Information");
    }

    #[test]
    fn test_remove_chart_clears_edit_and_gesture() {
        let (mut state, id) = state_with_chart();
        state.begin_edit(&id);
        let chart = state.registry.get(&id).unwrap().clone();
        state.ui.gestures.begin_move(&chart, chart.position, Position::new(0.0, 0.0));

        assert!(state.remove_chart(&id));
        assert!(state.edit_draft.is_none());
        assert_eq!(state.ui.gestures.state(), GestureState::Idle);
        assert!(!state.remove_chart(&id));
    }

    #[test]
    fn test_submit_edit() {
        let (mut state, id) = state_with_chart();
        let before = state.registry.get(&id).unwrap().position;
        state.begin_edit(&id);
        state.edit_draft.as_mut().unwrap().title = "Renamed".into();
        assert!(state.submit_edit());
        let chart = state.registry.get(&id).unwrap();
        assert_eq!(chart.title, "Renamed");
        assert_eq!(chart.position, before);
        assert!(state.edit_draft.is_none());
    }

    #[test]
    fn test_query_without_conditions_makes_no_request() {
        let mut state = AppState::default();
        assert!(state.begin_query().is_none());
        assert!(!state.ui.is_querying);
        assert!(state.query.result.is_none());
        let toast = state.ui.toasts.last().unwrap();
        assert_eq!(toast.title, "No Conditions");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_query_request_and_response() {
        let mut state = AppState::default();
        state.query.add_condition("BattU");
        state.query.conditions[0].value = "12".into();

        match state.begin_query() {
            Some(BackendRequest::RunQuery { conditions }) => assert_eq!(conditions.len(), 1),
            other => panic!("Expected RunQuery, got {:?}", other),
        }
        assert!(state.ui.is_querying);
        assert!(state.begin_query().is_none());

        state.apply_response(BackendResponse::QueryReady(QueryResult {
            query: "BattU > 12".into(),
            columns: vec!["time".into()],
            rows: vec![vec!["x".into()]],
        }));
        assert!(!state.ui.is_querying);
        assert_eq!(state.query.result.as_ref().unwrap().row_count(), 1);
    }

    #[test]
    fn test_signal_creation_flow() {
        let mut state = AppState::default();
        assert!(state.begin_signal_creation().is_none());
        assert_eq!(state.ui.toasts.last().unwrap().title, "Missing Information");

        state.signal_draft.name = "power".into();
        state.signal_draft.formula = "BattU * I".into();
        assert!(matches!(
            state.begin_signal_creation(),
            Some(BackendRequest::CreateSignal { .. })
        ));
        state.apply_response(BackendResponse::SignalCreated { name: "power".into() });
        assert_eq!(state.signals.last().map(String::as_str), Some("power"));
        assert!(state.signal_draft.name.is_empty());
        assert!(!state.ui.is_creating_signal);

        assert!(!state.add_signal("power"));
    }

    #[test]
    fn test_malformed_load_keeps_charts() {
        let (mut state, id) = state_with_chart();
        let before = state.registry.charts().to_vec();

        let loaded = state.load_result(crate::persistence::from_json("{ charts: oops").map(Some), ConfigSource::File);
        assert!(!loaded);
        assert_eq!(state.registry.charts(), before.as_slice());
        assert!(state.registry.contains(&id));
        let toast = state.ui.toasts.last().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Load Failed");
    }

    #[test]
    fn test_load_replaces_charts() {
        let (mut state, _) = state_with_chart();
        let json = r#"{"charts": [{"id": "chart-9", "type": "bar", "title": "Loaded"}]}"#;

        assert!(state.load_result(crate::persistence::from_json(json).map(Some), ConfigSource::LocalStorage));
        assert_eq!(state.registry.len(), 1);
        assert_eq!(state.registry.get("chart-9").unwrap().title, "Loaded");
        assert_eq!(state.ui.toasts.last().unwrap().title, "Configuration Loaded");
    }

    #[test]
    fn test_nothing_saved_is_a_notice() {
        let (mut state, _) = state_with_chart();
        assert!(!state.load_result(Ok(None), ConfigSource::LocalStorage));
        assert_eq!(state.registry.len(), 1);
        let toast = state.ui.toasts.last().unwrap();
        assert_eq!(toast.title, "Nothing Saved");
        assert_eq!(toast.kind, ToastKind::Info);
    }

    #[test]
    fn test_insights_are_prepended() {
        let mut state = AppState::default();
        let before = state.insights.len();
        assert!(state.begin_insights().is_some());
        assert!(state.begin_insights().is_none());

        let fresh = Insight::new("99", crate::model::InsightKind::Prediction, "t", "d", 80);
        state.apply_response(BackendResponse::InsightsReady(vec![fresh]));
        assert_eq!(state.insights.len(), before + 1);
        assert_eq!(state.insights[0].id, "99");
        assert!(!state.ui.is_analyzing);
    }

    #[test]
    fn test_failed_response_reports_error() {
        let mut state = AppState::default();
        state.begin_insights();
        state.apply_response(BackendResponse::Failed {
            kind: RequestKind::Insights,
            error: DashError::BackendDisconnected,
        });
        assert!(!state.ui.is_analyzing);
        assert_eq!(state.ui.toasts.last().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_config_round_trip_through_state() {
        let (mut state, _) = state_with_chart();
        state.filters.time_range = [2, 20];
        state.filters.conditions.push(Condition::new("f", "signal1", Comparison::Lt, "3"));
        let saved = state.dashboard_config();

        let mut other = AppState::default();
        other.registry.add(ChartConfig::new("old", ChartType::Bar, "Old", vec![], Position::default()));
        other.apply_config(saved.clone());
        assert_eq!(other.dashboard_config(), saved);
        assert!(!other.registry.contains("old"));
    }

    #[test]
    fn test_data_files() {
        assert!(DataFile::new("notes.md", 10).is_none());
        let file = DataFile::new("Run.CSV", 2048).unwrap();
        assert_eq!(file.extension, "csv");
        assert_eq!(file.size_label(), "2.0 KB");

        let mut state = AppState::default();
        assert_eq!(state.add_data_files(vec![file]), 1);
        assert_eq!(state.data_files.len(), 1);
    }
}
