//! UI interaction state: panels, canvas gestures, loading flags and toasts

use std::time::{Duration, Instant};

use crate::canvas::{CanvasLayout, GestureController};
use crate::constants::layout::TOAST_LIFETIME_SECS;
use crate::error::DashError;
use crate::mock::RequestKind;

/// Panels and windows that can be toggled independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Filters,
    Query,
    SignalCreation,
    AiAssistant,
    Metadata,
    SignalInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A transient notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    pub created: Instant,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub show_filters: bool,
    pub show_query: bool,
    pub show_signal_creation: bool,
    pub show_ai_assistant: bool,
    pub show_metadata: bool,
    pub show_signal_info: bool,

    /// Chart creation dialog
    pub chart_dialog_open: bool,

    pub layout: CanvasLayout,
    pub gestures: GestureController,

    pub is_analyzing: bool,
    pub is_querying: bool,
    pub is_creating_signal: bool,

    pub toasts: Vec<Toast>,
    pub toast_lifetime: Duration,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_filters: true,
            show_query: false,
            show_signal_creation: false,
            show_ai_assistant: false,
            show_metadata: false,
            show_signal_info: false,
            chart_dialog_open: false,
            layout: CanvasLayout::default(),
            gestures: GestureController::new(),
            is_analyzing: false,
            is_querying: false,
            is_creating_signal: false,
            toasts: Vec::new(),
            toast_lifetime: Duration::from_secs_f32(TOAST_LIFETIME_SECS),
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    fn panel_flag(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Filters => &mut self.show_filters,
            Panel::Query => &mut self.show_query,
            Panel::SignalCreation => &mut self.show_signal_creation,
            Panel::AiAssistant => &mut self.show_ai_assistant,
            Panel::Metadata => &mut self.show_metadata,
            Panel::SignalInfo => &mut self.show_signal_info,
        }
    }

    /// Toggle a specific panel
    pub fn toggle_panel(&mut self, panel: Panel) {
        let flag = self.panel_flag(panel);
        *flag = !*flag;
    }

    pub fn set_panel(&mut self, panel: Panel, open: bool) {
        *self.panel_flag(panel) = open;
    }

    /// Switch canvas layout; an armed gesture is dropped
    pub fn set_layout(&mut self, layout: CanvasLayout) {
        if self.layout != layout {
            self.gestures.release();
            self.layout = layout;
        }
    }

    pub fn set_loading(&mut self, kind: RequestKind, loading: bool) {
        match kind {
            RequestKind::Insights => self.is_analyzing = loading,
            RequestKind::Query => self.is_querying = loading,
            RequestKind::Signal => self.is_creating_signal = loading,
        }
    }

    pub fn is_loading(&self, kind: RequestKind) -> bool {
        match kind {
            RequestKind::Insights => self.is_analyzing,
            RequestKind::Query => self.is_querying,
            RequestKind::Signal => self.is_creating_signal,
        }
    }

    pub fn notify(&mut self, title: impl Into<String>, description: impl Into<String>, kind: ToastKind) {
        let toast = Toast {
            title: title.into(),
            description: description.into(),
            kind,
            created: Instant::now(),
        };
        tracing::debug!(title = %toast.title, kind = ?toast.kind, "notification");
        self.toasts.push(toast);
    }

    pub fn info(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(title, description, ToastKind::Info);
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(title, description, ToastKind::Success);
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(title, description, ToastKind::Error);
    }

    /// Error toast built from a `DashError`
    pub fn report(&mut self, err: &DashError) {
        tracing::warn!(error = %err, "operation failed");
        self.error(err.title(), err.user_message());
    }

    /// Drop toasts older than the lifetime
    pub fn prune_toasts(&mut self, now: Instant) {
        let lifetime = self.toast_lifetime;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created) < lifetime);
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::GestureState;
    use crate::model::{ChartConfig, ChartType, Position};

    #[test]
    fn test_toggle_panel() {
        let mut ui = UiState::new();
        assert!(ui.show_filters);
        ui.toggle_panel(Panel::Filters);
        assert!(!ui.show_filters);
        ui.toggle_panel(Panel::Query);
        assert!(ui.show_query);
        ui.set_panel(Panel::Query, false);
        assert!(!ui.show_query);
    }

    #[test]
    fn test_toasts_expire() {
        let mut ui = UiState::new();
        ui.toast_lifetime = Duration::from_millis(100);
        ui.success("Saved", "Dashboard saved");
        ui.report(&DashError::MissingField { field: "chart title" });
        assert_eq!(ui.toasts.len(), 2);
        assert_eq!(ui.toasts[1].title, "Missing Information");
        assert_eq!(ui.toasts[1].kind, ToastKind::Error);

        let created = ui.toasts[0].created;
        ui.prune_toasts(created + Duration::from_millis(50));
        assert_eq!(ui.toasts.len(), 2);
        ui.prune_toasts(created + Duration::from_secs(1));
        assert!(!ui.has_toasts());
    }

    #[test]
    fn test_loading_flags() {
        let mut ui = UiState::new();
        ui.set_loading(RequestKind::Query, true);
        assert!(ui.is_querying);
        assert!(ui.is_loading(RequestKind::Query));
        assert!(!ui.is_loading(RequestKind::Insights));
    }

    #[test]
    fn test_layout_switch_drops_gesture() {
        let mut ui = UiState::new();
        let chart = ChartConfig::new("a", ChartType::Line, "a", vec![], Position::default());
        ui.gestures.begin_move(&chart, chart.position, Position::new(1.0, 1.0));
        ui.set_layout(CanvasLayout::Grid);
        assert_eq!(ui.gestures.state(), GestureState::Idle);
        assert_eq!(ui.layout, CanvasLayout::Grid);
    }
}
