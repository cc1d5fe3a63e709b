mod canvas_view;
mod chart_dialogs;
mod filter_panel;
mod insights;
mod query_panel;
mod sidebar;
mod signal_panel;
mod toasts;
mod windows;

pub use canvas_view::render_canvas;
pub use chart_dialogs::{render_chart_dialog, render_edit_dialog};
pub use filter_panel::render_filter_panel;
pub use insights::render_insights;
pub use query_panel::render_query_panel;
pub use sidebar::render_sidebar;
pub use signal_panel::render_signal_panel;
pub use toasts::render_toasts;
pub use windows::{render_ai_assistant, render_metadata_window, render_signal_info_window};

/// Work a panel asks the app to do once the frame's widgets are drawn
///
/// These need the eframe frame, the worker or a native dialog, which
/// panels do not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    AddChart,
    SaveLocal,
    LoadLocal,
    ExportFile,
    ImportFile,
    CopyConfig,
    PickDataFiles,
    GenerateInsights,
    RunQuery,
    CreateSignal,
}
