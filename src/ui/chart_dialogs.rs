use super::DashboardAction;
use crate::constants::sizing::{EDIT_HEIGHT_RANGE, EDIT_STEP, EDIT_WIDTH_RANGE};
use crate::model::{ChartType, Comparison};
use crate::state::AppState;
use crate::widgets::SignalPicker;
use eframe::egui::{self, ComboBox, RichText};

const DIALOG_WIDTH: f32 = 420.0;

/// Modal for creating a chart
pub fn render_chart_dialog(state: &mut AppState, ctx: &egui::Context, actions: &mut Vec<DashboardAction>) {
    if !state.ui.chart_dialog_open {
        return;
    }
    let modal = egui::Modal::new(egui::Id::new("create_chart_modal")).show(ctx, |ui| {
        ui.set_width(DIALOG_WIDTH);
        ui.heading("Create New Chart");
        ui.separator();

        ui.label("Chart title");
        ui.add(
            egui::TextEdit::singleline(&mut state.chart_draft.title)
                .hint_text("Enter chart title")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(6.0);
        ui.label("Chart type");
        egui::Grid::new("chart_type_grid").num_columns(2).show(ui, |ui| {
            for (i, chart_type) in ChartType::SELECTABLE.iter().enumerate() {
                let selected = state.chart_draft.chart_type.as_ref() == Some(chart_type);
                let text = format!("{} {}", chart_type.icon(), chart_type.label());
                if ui
                    .selectable_label(selected, text)
                    .on_hover_text(chart_type.description())
                    .clicked()
                {
                    state.chart_draft.chart_type = Some(chart_type.clone());
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

        ui.add_space(6.0);
        ui.label("Signals");
        if let Some(signal) = SignalPicker::new(&state.chart_draft.signals, &state.signals).show(ui) {
            state.chart_draft.toggle_signal(&signal);
        }

        ui.separator();
        ui.horizontal(|ui| {
            let valid = state.chart_draft.is_valid();
            if ui.add_enabled(valid, egui::Button::new("Create Chart")).clicked() {
                actions.push(DashboardAction::AddChart);
            }
            if ui.button("Cancel").clicked() {
                state.ui.chart_dialog_open = false;
            }
        });
    });
    if modal.should_close() {
        state.ui.chart_dialog_open = false;
    }
}

/// Modal for editing the chart in `state.edit_draft`
pub fn render_edit_dialog(state: &mut AppState, ctx: &egui::Context) {
    if state.edit_draft.is_none() {
        return;
    }
    let mut submit = false;
    let mut cancel = false;
    let signals = state.signals.clone();

    let modal = egui::Modal::new(egui::Id::new("edit_chart_modal")).show(ctx, |ui| {
        let Some(draft) = state.edit_draft.as_mut() else {
            return;
        };
        ui.set_width(DIALOG_WIDTH);
        ui.heading("Edit Chart");
        ui.separator();

        egui::ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
            egui::Grid::new("edit_chart_grid").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                ui.label("Title");
                ui.text_edit_singleline(&mut draft.title);
                ui.end_row();

                ui.label("Type");
                ComboBox::from_id_salt("edit_chart_type")
                    .selected_text(draft.chart_type.label())
                    .show_ui(ui, |ui| {
                        for chart_type in &ChartType::SELECTABLE {
                            ui.selectable_value(&mut draft.chart_type, chart_type.clone(), chart_type.label());
                        }
                    });
                ui.end_row();

                ui.label("Legend");
                ui.text_edit_singleline(&mut draft.legend_name);
                ui.end_row();

                ui.label("X axis");
                ui.text_edit_singleline(&mut draft.x_axis_name);
                ui.end_row();

                ui.label("Y axis");
                ui.text_edit_singleline(&mut draft.y_axis_name);
                ui.end_row();

                ui.label(format!("Width: {}px", draft.width));
                ui.add(egui::Slider::new(&mut draft.width, EDIT_WIDTH_RANGE).step_by(EDIT_STEP));
                ui.end_row();

                ui.label(format!("Height: {}px", draft.height));
                ui.add(egui::Slider::new(&mut draft.height, EDIT_HEIGHT_RANGE).step_by(EDIT_STEP));
                ui.end_row();

                ui.label("Cursor");
                ui.checkbox(&mut draft.enable_cursor, "Show coordinates on hover");
                ui.end_row();
            });

            ui.separator();
            ui.label("Signals");
            if let Some(signal) = SignalPicker::new(&draft.signals, &signals).show(ui) {
                draft.toggle_signal(&signal);
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Signal filters");
                ui.label(RichText::new("(saved with the chart, not applied)").small().weak());
            });
            let mut removed = None;
            for (i, filter) in draft.signal_filters.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ComboBox::from_id_salt(("edit_filter_signal", i))
                        .width(110.0)
                        .selected_text(filter.signal.as_str())
                        .show_ui(ui, |ui| {
                            for signal in &signals {
                                ui.selectable_value(&mut filter.signal, signal.clone(), signal.as_str());
                            }
                        });
                    ComboBox::from_id_salt(("edit_filter_op", i))
                        .width(48.0)
                        .selected_text(filter.condition.display())
                        .show_ui(ui, |ui| {
                            for op in Comparison::CHART_FILTER {
                                ui.selectable_value(&mut filter.condition, op, op.display());
                            }
                        });
                    ui.add(egui::DragValue::new(&mut filter.value).speed(0.1));
                    if ui.small_button("🗑").clicked() {
                        removed = Some(i);
                    }
                });
            }
            if let Some(i) = removed {
                draft.remove_filter(i);
            }
            if ui.button("➕ Add Filter").clicked() {
                draft.add_filter(&signals);
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save Changes").clicked() {
                submit = true;
            }
            if ui.button("Cancel").clicked() {
                cancel = true;
            }
        });
    });

    if submit {
        state.submit_edit();
    } else if cancel || modal.should_close() {
        state.edit_draft = None;
    }
}
