use crate::model::Comparison;
use crate::state::{AppState, Panel};
use crate::widgets::{ConditionRow, HourRange};
use eframe::egui::{self, ComboBox, RichText};

/// Collapsible global filters above the canvas
pub fn render_filter_panel(state: &mut AppState, ui: &mut egui::Ui) {
    profiling::scope!("render_filter_panel");

    let title = if state.filters.has_active_filters() {
        "🔎 Filters (active)"
    } else {
        "🔎 Filters"
    };
    let header = egui::CollapsingHeader::new(title)
        .id_salt("filter_panel")
        .open(Some(state.ui.show_filters))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Date range:");
                ui.add(egui::TextEdit::singleline(&mut state.filters.date_start).desired_width(90.0));
                ui.label("to");
                ui.add(egui::TextEdit::singleline(&mut state.filters.date_end).desired_width(90.0));

                ui.separator();
                HourRange::new("Time:", &mut state.filters.time_range).show(ui);

                ui.separator();
                let selected = state
                    .filters
                    .selected_file
                    .clone()
                    .unwrap_or_else(|| "All files".to_string());
                ComboBox::from_label("File")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut state.filters.selected_file, None, "All files");
                        for file in &state.data_files {
                            ui.selectable_value(
                                &mut state.filters.selected_file,
                                Some(file.name.clone()),
                                file.name.as_str(),
                            );
                        }
                    });
            });

            ui.add_space(4.0);
            ui.label("Conditional filters:");
            let mut removed = None;
            for condition in &mut state.filters.conditions {
                let id = condition.id.clone();
                if ConditionRow::new(condition, &state.signals)
                    .operators(&Comparison::QUERY)
                    .show(ui)
                {
                    removed = Some(id);
                }
            }
            if let Some(id) = removed {
                state.filters.remove_condition(&id);
            }

            ui.horizontal(|ui| {
                if ui.button("➕ Add Condition").clicked() {
                    let first = state.signals.first().cloned().unwrap_or_default();
                    state.filters.add_condition(&first);
                }
                if !state.filters.conditions.is_empty() {
                    ui.label(RichText::new(state.filters.condition_summary()).monospace().weak());
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Reset Filters").clicked() {
                    state.filters.reset();
                    state.ui.info("Filters Reset", "All filters have been cleared");
                }
                if ui.button("Apply Filters").clicked() {
                    match state.filters.validate() {
                        Ok(()) => state.ui.success("Filters Applied", "Filter settings have been applied"),
                        Err(e) => state.ui.report(&e),
                    }
                }
            });
        });

    if header.header_response.clicked() {
        state.ui.toggle_panel(Panel::Filters);
    }
}
