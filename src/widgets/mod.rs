//! Reusable UI widgets for Signal Dash

mod condition_row;
mod hour_range;
mod signal_picker;

pub use condition_row::ConditionRow;
pub use hour_range::HourRange;
pub use signal_picker::SignalPicker;
