//! Pointer gesture state machine for moving and resizing charts.
//!
//! A gesture is armed by a pointer-down on a chart header or resize handle
//! and lives in a `DragSession` until pointer-up or until the pointer leaves
//! the canvas. Moves are ignored while idle. All coordinates are relative to
//! the canvas origin.

use super::CanvasLayout;
use crate::model::{ChartConfig, ChartPatch, ChartRegistry, ChartSize, Position};

/// Which resize handle was grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Right edge: width only
    Right,
    /// Bottom edge: height only
    Bottom,
    /// Bottom-right corner: both axes
    Corner,
}

impl ResizeHandle {
    pub fn resizes_width(self) -> bool {
        matches!(self, ResizeHandle::Right | ResizeHandle::Corner)
    }

    pub fn resizes_height(self) -> bool {
        matches!(self, ResizeHandle::Bottom | ResizeHandle::Corner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureMode {
    /// Pointer offset from the chart's top-left at pointer-down
    Move { offset_x: f64, offset_y: f64 },
    Resize {
        handle: ResizeHandle,
        start_pointer: Position,
        start_size: ChartSize,
    },
}

/// An armed gesture on one chart
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub chart_id: String,
    pub mode: GestureMode,
}

impl DragSession {
    /// The update implied by the pointer being at `pointer`
    pub fn patch_for(&self, pointer: Position, layout: CanvasLayout) -> ChartPatch {
        match self.mode {
            GestureMode::Move { offset_x, offset_y } => ChartPatch::position(Position::new(
                (pointer.x - offset_x).max(0.0),
                (pointer.y - offset_y).max(0.0),
            )),
            GestureMode::Resize {
                handle,
                start_pointer,
                start_size,
            } => {
                let mut size = start_size;
                if handle.resizes_width() {
                    size.width = (start_size.width + pointer.x - start_pointer.x).max(layout.min_width());
                }
                if handle.resizes_height() {
                    size.height = (start_size.height + pointer.y - start_pointer.y).max(layout.min_height());
                }
                ChartPatch::size(size)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging,
    Resizing,
}

/// Owns at most one armed gesture for the whole canvas
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    session: Option<DragSession>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        match &self.session {
            None => GestureState::Idle,
            Some(DragSession { mode: GestureMode::Move { .. }, .. }) => GestureState::Dragging,
            Some(DragSession { mode: GestureMode::Resize { .. }, .. }) => GestureState::Resizing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_chart(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.chart_id.as_str())
    }

    /// Pointer-down on a chart header. `origin` is where the chart is drawn.
    ///
    /// Returns false if a gesture is already armed.
    pub fn begin_move(&mut self, chart: &ChartConfig, origin: Position, pointer: Position) -> bool {
        if self.session.is_some() {
            return false;
        }
        tracing::trace!(id = %chart.id, "drag started");
        self.session = Some(DragSession {
            chart_id: chart.id.clone(),
            mode: GestureMode::Move {
                offset_x: pointer.x - origin.x,
                offset_y: pointer.y - origin.y,
            },
        });
        true
    }

    /// Pointer-down on one of a chart's resize handles
    pub fn begin_resize(&mut self, chart: &ChartConfig, handle: ResizeHandle, pointer: Position) -> bool {
        if self.session.is_some() {
            return false;
        }
        tracing::trace!(id = %chart.id, ?handle, "resize started");
        self.session = Some(DragSession {
            chart_id: chart.id.clone(),
            mode: GestureMode::Resize {
                handle,
                start_pointer: pointer,
                start_size: chart.size,
            },
        });
        true
    }

    /// Pointer-move: the chart id and patch to apply, or `None` while idle
    pub fn pointer_moved(&self, pointer: Position, layout: CanvasLayout) -> Option<(String, ChartPatch)> {
        let session = self.session.as_ref()?;
        Some((session.chart_id.clone(), session.patch_for(pointer, layout)))
    }

    /// Apply a pointer-move through the registry's update entry point
    ///
    /// A session whose chart has been removed is dropped.
    pub fn drive(&mut self, registry: &mut ChartRegistry, pointer: Position, layout: CanvasLayout) -> bool {
        let Some((id, patch)) = self.pointer_moved(pointer, layout) else {
            return false;
        };
        if registry.update(&id, patch) {
            true
        } else {
            self.session = None;
            false
        }
    }

    /// Pointer-up or pointer-leave: always returns to idle
    pub fn release(&mut self) -> Option<DragSession> {
        let ended = self.session.take();
        if let Some(session) = &ended {
            tracing::trace!(id = %session.chart_id, "gesture ended");
        }
        ended
    }
}
