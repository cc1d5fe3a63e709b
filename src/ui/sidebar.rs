use super::DashboardAction;
use crate::constants::signals::VISIBLE_FILES;
use crate::model::ChartType;
use crate::state::{AppState, Panel};
use eframe::egui::{self, RichText};

/// Left sidebar: chart tiles, configuration, data files, analysis and signals
pub fn render_sidebar(state: &mut AppState, ui: &mut egui::Ui, actions: &mut Vec<DashboardAction>) {
    profiling::scope!("render_sidebar");

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Signal Dashboard");
        ui.label(RichText::new("Build charts from signal data").weak());
        ui.separator();

        ui.strong("Chart Types");
        egui::Grid::new("chart_tiles").num_columns(2).spacing([6.0, 6.0]).show(ui, |ui| {
            for (i, chart_type) in ChartType::SELECTABLE.iter().enumerate() {
                let tile = egui::Button::new(format!("{} {}", chart_type.icon(), chart_type.label()))
                    .min_size(egui::vec2(128.0, 28.0));
                if ui.add(tile).on_hover_text(chart_type.description()).clicked() {
                    state.open_chart_dialog(Some(chart_type.clone()));
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
        if ui.button("➕ Add Chart").clicked() {
            state.open_chart_dialog(None);
        }

        ui.separator();
        ui.strong("Configuration");
        ui.horizontal_wrapped(|ui| {
            if ui.button("💾 Save").on_hover_text("Save to local storage").clicked() {
                actions.push(DashboardAction::SaveLocal);
            }
            if ui.button("📂 Load").on_hover_text("Load from local storage").clicked() {
                actions.push(DashboardAction::LoadLocal);
            }
            if ui.button("⬇ Export").on_hover_text("Export to a JSON file").clicked() {
                actions.push(DashboardAction::ExportFile);
            }
            if ui.button("⬆ Import").on_hover_text("Import from a JSON file").clicked() {
                actions.push(DashboardAction::ImportFile);
            }
            if ui.button("📋 Copy").on_hover_text("Copy configuration JSON").clicked() {
                actions.push(DashboardAction::CopyConfig);
            }
        });

        ui.separator();
        ui.strong("Data Files");
        if ui.button("📁 Upload Files").on_hover_text("csv, json, txt or parquet").clicked() {
            actions.push(DashboardAction::PickDataFiles);
        }
        ui.label(RichText::new("Or drop files onto the window").small().weak());
        for file in state.data_files.iter().take(VISIBLE_FILES) {
            ui.label(format!("📄 {}", file.name)).on_hover_text(file.size_label());
        }
        if state.data_files.len() > VISIBLE_FILES {
            ui.label(RichText::new(format!("+{} more", state.data_files.len() - VISIBLE_FILES)).weak());
        }

        ui.separator();
        ui.strong("Analyze Data");
        ui.horizontal_wrapped(|ui| {
            if ui.button("🗂 Metadata").clicked() {
                state.ui.toggle_panel(Panel::Metadata);
            }
            if ui.button("ℹ Signal Info").clicked() {
                state.ui.toggle_panel(Panel::SignalInfo);
            }
            if ui.button("🔍 Query Dataset").clicked() {
                state.ui.toggle_panel(Panel::Query);
            }
            if ui.button("🧮 Create Signal").clicked() {
                state.ui.toggle_panel(Panel::SignalCreation);
            }
        });

        ui.separator();
        let label = if state.ui.show_ai_assistant {
            "🤖 Hide AI Assistant"
        } else {
            "🤖 AI Assistant"
        };
        if ui.button(label).clicked() {
            state.ui.toggle_panel(Panel::AiAssistant);
        }

        ui.separator();
        ui.strong(format!("Available Signals ({})", state.signals.len()));
        for signal in &state.signals {
            ui.label(format!("• {}", signal));
        }
    });
}
