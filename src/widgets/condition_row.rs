//! One editable `signal operator value` row

use crate::model::{Comparison, Condition};
use egui::{ComboBox, Ui};

pub struct ConditionRow<'a> {
    condition: &'a mut Condition,
    signals: &'a [String],
    operators: &'a [Comparison],
}

impl<'a> ConditionRow<'a> {
    pub fn new(condition: &'a mut Condition, signals: &'a [String]) -> Self {
        Self {
            condition,
            signals,
            operators: &Comparison::QUERY,
        }
    }

    /// Restrict the operator picker
    pub fn operators(mut self, operators: &'a [Comparison]) -> Self {
        self.operators = operators;
        self
    }

    /// Show the row; returns true when its remove button was clicked
    pub fn show(self, ui: &mut Ui) -> bool {
        let mut remove = false;
        ui.horizontal(|ui| {
            ComboBox::from_id_salt(("cond-signal", &self.condition.id))
                .width(110.0)
                .selected_text(self.condition.signal.as_str())
                .show_ui(ui, |ui| {
                    for signal in self.signals {
                        ui.selectable_value(&mut self.condition.signal, signal.clone(), signal.as_str());
                    }
                });

            ComboBox::from_id_salt(("cond-op", &self.condition.id))
                .width(48.0)
                .selected_text(self.condition.operator.display())
                .show_ui(ui, |ui| {
                    for op in self.operators {
                        ui.selectable_value(&mut self.condition.operator, *op, op.display());
                    }
                });

            ui.add(
                egui::TextEdit::singleline(&mut self.condition.value)
                    .hint_text("Value")
                    .desired_width(70.0),
            );

            if ui.small_button("🗑").on_hover_text("Remove condition").clicked() {
                remove = true;
            }
        });
        remove
    }
}
