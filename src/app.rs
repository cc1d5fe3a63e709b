use std::time::Duration;

use chrono::{Local, Utc};
use eframe::egui;

use crate::constants::config::STORAGE_KEY;
use crate::constants::layout::{INSIGHTS_HEIGHT, SIDEBAR_WIDTH};
use crate::constants::signals::DATA_EXTENSIONS;
use crate::error::DashError;
use crate::mock::{BackendRequest, BackgroundWorker, MockBackend};
use crate::persistence;
use crate::settings::Settings;
use crate::state::{AppState, ConfigSource, DataFile};
use crate::ui::{self, DashboardAction};

/// Repaint interval while the backend is working or toasts are visible
const BUSY_REPAINT: Duration = Duration::from_millis(100);

pub struct SignalDash {
    pub state: AppState,
    worker: BackgroundWorker,
}

impl SignalDash {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        Self {
            state: AppState::from_settings(settings),
            worker: BackgroundWorker::spawn(MockBackend::new(settings.delays())),
        }
    }

    fn poll_worker(&mut self) {
        while let Some(response) = self.worker.poll() {
            self.state.apply_response(response);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let files: Vec<DataFile> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| match &f.path {
                    Some(path) => DataFile::from_path(path),
                    None => DataFile::new(f.name.clone(), f.bytes.as_ref().map_or(0, |b| b.len() as u64)),
                })
                .collect()
        });
        let count = self.state.add_data_files(files);
        if count > 0 {
            self.state
                .ui
                .success("Files Uploaded", format!("{} file(s) added", count));
        }
    }

    fn dispatch(&mut self, request: Option<BackendRequest>) {
        let Some(request) = request else {
            return;
        };
        let kind = request.kind();
        if let Err(e) = self.worker.request(request) {
            if let Some(kind) = kind {
                self.state.ui.set_loading(kind, false);
            }
            self.state.ui.report(&e);
        }
    }

    fn handle_action(&mut self, action: DashboardAction, frame: &mut eframe::Frame) {
        tracing::debug!(?action, "dashboard action");
        match action {
            DashboardAction::AddChart => {
                self.state
                    .add_chart(Utc::now().timestamp_millis(), &mut rand::rng());
            }
            DashboardAction::SaveLocal => self.save_local(frame),
            DashboardAction::LoadLocal => self.load_local(frame),
            DashboardAction::ExportFile => self.export_file(),
            DashboardAction::ImportFile => self.import_file(),
            DashboardAction::CopyConfig => self.copy_config(),
            DashboardAction::PickDataFiles => self.pick_data_files(),
            DashboardAction::GenerateInsights => {
                let request = self.state.begin_insights();
                self.dispatch(request);
            }
            DashboardAction::RunQuery => {
                let request = self.state.begin_query();
                self.dispatch(request);
            }
            DashboardAction::CreateSignal => {
                let request = self.state.begin_signal_creation();
                self.dispatch(request);
            }
        }
    }

    fn save_local(&mut self, frame: &mut eframe::Frame) {
        let config = self.state.dashboard_config();
        let result = match frame.storage_mut() {
            Some(storage) => persistence::save_local(storage, &config),
            None => Err(DashError::StorageUnavailable),
        };
        match result {
            Ok(()) => self
                .state
                .ui
                .success("Configuration Saved", "Dashboard saved to local storage"),
            Err(e) => self.state.ui.report(&e),
        }
    }

    fn load_local(&mut self, frame: &mut eframe::Frame) {
        let result = match frame.storage() {
            Some(storage) => persistence::load_local(storage),
            None => Err(DashError::StorageUnavailable),
        };
        if matches!(result, Ok(None)) {
            tracing::debug!(key = STORAGE_KEY, "no saved dashboard");
        }
        self.state.load_result(result, ConfigSource::LocalStorage);
    }

    fn export_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(persistence::export_file_name(Local::now().date_naive()))
            .save_file()
        else {
            return;
        };
        match persistence::export_file(&path, &self.state.dashboard_config()) {
            Ok(()) => self
                .state
                .ui
                .success("Configuration Exported", "Dashboard configuration file saved"),
            Err(e) => self.state.ui.report(&e),
        }
    }

    fn import_file(&mut self) {
        let Some(path) = rfd::FileDialog::new().add_filter("JSON", &["json"]).pick_file() else {
            return;
        };
        let result = persistence::import_file(&path).map(Some);
        self.state.load_result(result, ConfigSource::File);
    }

    fn copy_config(&mut self) {
        let result = persistence::to_json(&self.state.dashboard_config())
            .and_then(|json| persistence::copy_to_clipboard(&json));
        match result {
            Ok(()) => self
                .state
                .ui
                .success("Copied to Clipboard", "Configuration JSON copied"),
            Err(e) => self.state.ui.report(&e),
        }
    }

    fn pick_data_files(&mut self) {
        let Some(paths) = rfd::FileDialog::new()
            .add_filter("Signal data", &DATA_EXTENSIONS[..])
            .pick_files()
        else {
            return;
        };
        let files = paths.iter().filter_map(|p| DataFile::from_path(p)).collect();
        let count = self.state.add_data_files(files);
        if count > 0 {
            self.state
                .ui
                .success("Files Uploaded", format!("{} file(s) added", count));
        }
    }
}

impl eframe::App for SignalDash {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        profiling::finish_frame!();
        profiling::scope!("update");

        self.poll_worker();
        self.handle_dropped_files(ctx);

        let mut actions = Vec::new();

        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| ui::render_sidebar(&mut self.state, ui, &mut actions));

        egui::TopBottomPanel::top("insights")
            .resizable(false)
            .exact_height(INSIGHTS_HEIGHT)
            .show(ctx, |ui| ui::render_insights(&mut self.state, ui, &mut actions));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::render_filter_panel(&mut self.state, ui);
            ui.separator();
            ui::render_canvas(&mut self.state, ui);
        });

        ui::render_query_panel(&mut self.state, ctx, &mut actions);
        ui::render_signal_panel(&mut self.state, ctx, &mut actions);
        ui::render_metadata_window(&mut self.state, ctx);
        ui::render_signal_info_window(&mut self.state, ctx);
        ui::render_ai_assistant(&mut self.state, ctx);
        ui::render_chart_dialog(&mut self.state, ctx, &mut actions);
        ui::render_edit_dialog(&mut self.state, ctx);
        ui::render_toasts(&mut self.state, ctx);

        for action in actions {
            self.handle_action(action, frame);
        }

        if self.worker.is_busy() || self.state.ui.has_toasts() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}
