use super::DashboardAction;
use crate::forms::PREDEFINED_FUNCTIONS;
use crate::state::{AppState, Panel};
use crate::widgets::SignalPicker;
use eframe::egui::{self, RichText};

/// Floating derived-signal form
pub fn render_signal_panel(state: &mut AppState, ctx: &egui::Context, actions: &mut Vec<DashboardAction>) {
    if !state.ui.show_signal_creation {
        return;
    }
    profiling::scope!("render_signal_panel");

    let mut open = true;
    egui::Window::new("🧮 Create Signal")
        .open(&mut open)
        .default_width(420.0)
        .show(ctx, |ui| {
            let draft = &mut state.signal_draft;

            ui.label("Signal name");
            ui.add(
                egui::TextEdit::singleline(&mut draft.name)
                    .hint_text("e.g. power")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(6.0);
            ui.label("Base signals");
            if let Some(signal) = SignalPicker::new(&draft.base_signals, &state.signals)
                .columns(3)
                .show(ui)
            {
                draft.toggle_base_signal(&signal);
            }

            ui.add_space(6.0);
            ui.label("Functions");
            let ready = draft.base_signals.len() >= 2;
            if !ready {
                ui.label(RichText::new("Select two base signals to use a function").small().weak());
            }
            let mut chosen = None;
            ui.horizontal_wrapped(|ui| {
                for function in &PREDEFINED_FUNCTIONS {
                    let selected = draft.function == Some(function.name);
                    let response = ui
                        .add_enabled(ready, egui::Button::selectable(selected, function.name))
                        .on_hover_text(format!("{}: {}", function.description, function.formula));
                    if response.clicked() {
                        chosen = Some(function.name);
                    }
                }
            });
            if let Some(name) = chosen {
                draft.apply_function(name);
            }

            ui.add_space(6.0);
            ui.label("Formula");
            ui.add(
                egui::TextEdit::multiline(&mut draft.formula)
                    .code_editor()
                    .desired_rows(2)
                    .desired_width(f32::INFINITY)
                    .hint_text("signal1 * 2 + signal2"),
            );

            ui.separator();
            ui.horizontal(|ui| {
                if state.ui.is_creating_signal {
                    ui.add_enabled(false, egui::Button::new("Creating..."));
                    ui.spinner();
                } else if ui.button("Create Signal").clicked() {
                    actions.push(DashboardAction::CreateSignal);
                }
                if ui.button("Reset").clicked() {
                    state.signal_draft.reset();
                }
            });
        });
    if !open {
        state.ui.set_panel(Panel::SignalCreation, false);
    }
}
