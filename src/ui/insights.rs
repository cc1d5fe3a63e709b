use super::DashboardAction;
use crate::model::Insight;
use crate::state::AppState;
use eframe::egui::{self, RichText};

const CARD_WIDTH: f32 = 260.0;

/// Horizontal strip of insight cards with the Generate Insights trigger
pub fn render_insights(state: &mut AppState, ui: &mut egui::Ui, actions: &mut Vec<DashboardAction>) {
    profiling::scope!("render_insights");

    ui.horizontal(|ui| {
        ui.heading("🤖 AI Insights");
        ui.label(RichText::new(format!("{}", state.insights.len())).strong().monospace());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.ui.is_analyzing {
                ui.add_enabled(false, egui::Button::new("Analyzing..."));
                ui.spinner();
            } else if ui.button("✨ Generate Insights").clicked() {
                actions.push(DashboardAction::GenerateInsights);
            }
        });
    });
    ui.separator();

    if state.insights.is_empty() {
        ui.label(RichText::new("No insights yet").weak());
        return;
    }

    egui::ScrollArea::horizontal().auto_shrink([false, true]).show(ui, |ui| {
        ui.horizontal_top(|ui| {
            for insight in &state.insights {
                insight_card(ui, insight);
            }
        });
    });
}

fn insight_card(ui: &mut egui::Ui, insight: &Insight) {
    let color = insight.kind.color();
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.horizontal(|ui| {
                ui.label(RichText::new(insight.kind.icon()).color(color));
                ui.strong(insight.title.as_str());
            });
            ui.add(egui::Label::new(insight.description.as_str()).wrap());
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{}% confidence", insight.confidence)).small().weak());
                if let Some(signal) = &insight.signal {
                    ui.label(RichText::new(format!("· {}", signal)).small().color(color));
                }
            });
        });
}
