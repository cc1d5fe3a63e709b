use super::DashboardAction;
use crate::model::{Comparison, QueryResult, QUICK_QUERIES};
use crate::state::{AppState, Panel};
use crate::widgets::ConditionRow;
use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

/// Floating query builder and result table
pub fn render_query_panel(state: &mut AppState, ctx: &egui::Context, actions: &mut Vec<DashboardAction>) {
    if !state.ui.show_query {
        return;
    }
    profiling::scope!("render_query_panel");

    let mut open = true;
    egui::Window::new("🔍 Query Dataset")
        .open(&mut open)
        .default_width(520.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.label("Quick queries:");
            ui.horizontal_wrapped(|ui| {
                for preset in &QUICK_QUERIES {
                    if ui.button(preset.label).clicked() {
                        state.query.apply_quick(preset);
                    }
                }
            });
            ui.separator();

            let mut removed = None;
            for condition in &mut state.query.conditions {
                let id = condition.id.clone();
                if ConditionRow::new(condition, &state.signals)
                    .operators(&Comparison::QUERY)
                    .show(ui)
                {
                    removed = Some(id);
                }
            }
            if let Some(id) = removed {
                state.query.remove_condition(&id);
            }

            ui.horizontal(|ui| {
                if ui.button("➕ Add Condition").clicked() {
                    let first = state.signals.first().cloned().unwrap_or_default();
                    state.query.add_condition(&first);
                }
                if ui.button("Clear").clicked() {
                    state.query.clear();
                }
            });

            if !state.query.conditions.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new(state.query.preview()).monospace().weak());
            }

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if state.ui.is_querying {
                    ui.add_enabled(false, egui::Button::new("Running..."));
                    ui.spinner();
                } else if ui.button("▶ Run Query").clicked() {
                    actions.push(DashboardAction::RunQuery);
                }
            });

            if let Some(result) = &state.query.result {
                ui.separator();
                result_table(ui, result);
            }
        });
    if !open {
        state.ui.set_panel(Panel::Query, false);
    }
}

fn result_table(ui: &mut egui::Ui, result: &QueryResult) {
    ui.label(format!("{} row(s) for: {}", result.row_count(), result.query));
    if result.is_empty() {
        return;
    }

    TableBuilder::new(ui)
        .id_salt("query_result_table")
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::initial(90.0).resizable(true).clip(true), result.columns.len())
        .max_scroll_height(200.0)
        .header(22.0, |mut header| {
            for column in &result.columns {
                header.col(|ui| {
                    ui.strong(column.as_str());
                });
            }
        })
        .body(|mut body| {
            for row in &result.rows {
                body.row(18.0, |mut table_row| {
                    for cell in row {
                        table_row.col(|ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            }
        });
}
