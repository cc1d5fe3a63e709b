use std::time::Instant;

use crate::state::{AppState, ToastKind};
use eframe::egui::{self, Color32, RichText};

fn accent(kind: ToastKind) -> Color32 {
    match kind {
        ToastKind::Info => Color32::from_rgb(59, 130, 246),
        ToastKind::Success => Color32::from_rgb(34, 197, 94),
        ToastKind::Error => Color32::from_rgb(239, 68, 68),
    }
}

/// Stack of notifications in the bottom-right corner, newest at the bottom
pub fn render_toasts(state: &mut AppState, ctx: &egui::Context) {
    state.ui.prune_toasts(Instant::now());
    if !state.ui.has_toasts() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .order(egui::Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            for (i, toast) in state.ui.toasts.iter().enumerate() {
                let color = accent(toast.kind);
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.5, color))
                    .show(ui, |ui| {
                        ui.set_width(300.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(toast.title.as_str()).strong().color(color));
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.small_button("✖").clicked() {
                                    dismissed = Some(i);
                                }
                            });
                        });
                        if !toast.description.is_empty() {
                            ui.add(egui::Label::new(toast.description.as_str()).wrap());
                        }
                    });
                ui.add_space(4.0);
            }
        });

    if let Some(i) = dismissed {
        state.ui.toasts.remove(i);
    }
}
