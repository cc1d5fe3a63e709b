//! Form drafts behind the chart and signal dialogs

mod chart_form;
mod edit_form;
mod signal_form;

pub use chart_form::ChartDraft;
pub use edit_form::EditDraft;
pub use signal_form::{SignalDraft, PREDEFINED_FUNCTIONS};
