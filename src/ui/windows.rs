use crate::state::{AppState, Panel};
use eframe::egui::{self, RichText};

/// Uploaded file metadata
pub fn render_metadata_window(state: &mut AppState, ctx: &egui::Context) {
    if !state.ui.show_metadata {
        return;
    }
    let mut open = true;
    egui::Window::new("🗂 Metadata")
        .open(&mut open)
        .default_width(360.0)
        .show(ctx, |ui| {
            if state.data_files.is_empty() {
                ui.label(RichText::new("No data files uploaded").weak());
                return;
            }
            egui::Grid::new("metadata_grid")
                .num_columns(3)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Name");
                    ui.strong("Type");
                    ui.strong("Size");
                    ui.end_row();
                    for file in &state.data_files {
                        ui.label(file.name.as_str());
                        ui.label(file.extension.to_uppercase());
                        ui.label(file.size_label());
                        ui.end_row();
                    }
                });
        });
    if !open {
        state.ui.set_panel(Panel::Metadata, false);
    }
}

/// min/max/mean of each known signal over the sample data
pub fn render_signal_info_window(state: &mut AppState, ctx: &egui::Context) {
    if !state.ui.show_signal_info {
        return;
    }
    let mut open = true;
    egui::Window::new("ℹ Signal Info")
        .open(&mut open)
        .default_width(380.0)
        .show(ctx, |ui| {
            egui::Grid::new("signal_info_grid")
                .num_columns(4)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Signal");
                    ui.strong("Min");
                    ui.strong("Max");
                    ui.strong("Mean");
                    ui.end_row();
                    for signal in &state.signals {
                        ui.label(signal.as_str());
                        match state.signal_summary(signal) {
                            Some(s) => {
                                ui.monospace(format!("{:.2}", s.min));
                                ui.monospace(format!("{:.2}", s.max));
                                ui.monospace(format!("{:.2}", s.mean));
                            }
                            None => {
                                ui.label(RichText::new("no sample data").weak());
                                ui.label("");
                                ui.label("");
                            }
                        }
                        ui.end_row();
                    }
                });
        });
    if !open {
        state.ui.set_panel(Panel::SignalInfo, false);
    }
}

/// Side window with dashboard stats and the latest insights
pub fn render_ai_assistant(state: &mut AppState, ctx: &egui::Context) {
    if !state.ui.show_ai_assistant {
        return;
    }
    let mut open = true;
    egui::Window::new("🤖 AI Assistant")
        .open(&mut open)
        .default_width(320.0)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
        .show(ctx, |ui| {
            ui.strong("Quick stats");
            egui::Grid::new("assistant_stats").num_columns(2).show(ui, |ui| {
                ui.label("Charts");
                ui.monospace(state.registry.len().to_string());
                ui.end_row();
                ui.label("Signals");
                ui.monospace(state.signals.len().to_string());
                ui.end_row();
                ui.label("Insights");
                ui.monospace(state.insights.len().to_string());
                ui.end_row();
            });

            ui.separator();
            ui.strong("Latest insights");
            for insight in state.insights.iter().take(3) {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(insight.kind.icon()).color(insight.kind.color()));
                    ui.label(insight.title.as_str())
                        .on_hover_text(insight.description.as_str());
                });
            }
            if state.ui.is_analyzing {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Analyzing...");
                });
            }
        });
    if !open {
        state.ui.set_panel(Panel::AiAssistant, false);
    }
}
