//! Ordered multi-select over the known signals

use egui::Ui;

/// Checkbox grid over `available`; the caller owns the selection
pub struct SignalPicker<'a> {
    selected: &'a [String],
    available: &'a [String],
    columns: usize,
}

impl<'a> SignalPicker<'a> {
    pub fn new(selected: &'a [String], available: &'a [String]) -> Self {
        Self {
            selected,
            available,
            columns: 2,
        }
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Show one checkbox per signal; returns the signal whose box was clicked
    pub fn show(self, ui: &mut Ui) -> Option<String> {
        let Self {
            selected,
            available,
            columns,
        } = self;

        let mut toggled = None;
        ui.vertical(|ui| {
            ui.columns(columns, |cols| {
                for (i, signal) in available.iter().enumerate() {
                    let mut checked = selected.contains(signal);
                    if cols[i % columns].checkbox(&mut checked, signal.as_str()).changed() {
                        toggled = Some(signal.clone());
                    }
                }
            });

            if !selected.is_empty() {
                ui.label(
                    egui::RichText::new(format!("Selected: {}", selected.join(", ")))
                        .small()
                        .weak(),
                );
            }
        });
        toggled
    }
}
