//! Hour-of-day range input

use crate::constants::filters::{MAX_HOUR, MIN_HOUR};
use egui::{Response, Ui};

/// Two bounded inputs editing a `[from, to]` hour range
pub struct HourRange<'a> {
    label: &'a str,
    range: &'a mut [u8; 2],
}

impl<'a> HourRange<'a> {
    pub fn new(label: &'a str, range: &'a mut [u8; 2]) -> Self {
        Self { label, range }
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            ui.label(self.label);
            ui.add(
                egui::DragValue::new(&mut self.range[0])
                    .range(MIN_HOUR..=MAX_HOUR)
                    .suffix(":00"),
            );
            ui.label("to");
            ui.add(
                egui::DragValue::new(&mut self.range[1])
                    .range(MIN_HOUR..=MAX_HOUR)
                    .suffix(":00"),
            );
        })
        .response
    }
}
