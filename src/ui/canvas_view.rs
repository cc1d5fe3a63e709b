use crate::canvas::{render, CanvasLayout, GestureState, ResizeHandle};
use crate::constants::canvas::{CORNER_HANDLE, HANDLE_THICKNESS, HEADER_HEIGHT};
use crate::model::{ChartConfig, Position};
use crate::state::AppState;
use eframe::egui::{self, CursorIcon, Pos2, Rect, RichText, Sense, Stroke, StrokeKind, Vec2};
use eframe::egui::scroll_area::ScrollSource;

/// Width reserved at the right of a chart header for its buttons
const HEADER_BUTTONS_WIDTH: f32 = 64.0;

enum ChartEvent {
    Edit(String),
    Remove(String),
}

/// Main chart canvas with layout toggle, charts and drag/resize handling
pub fn render_canvas(state: &mut AppState, ui: &mut egui::Ui) {
    profiling::scope!("render_canvas");

    ui.horizontal(|ui| {
        ui.heading("Canvas");
        ui.label(RichText::new(format!("{} chart(s)", state.registry.len())).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for layout in [CanvasLayout::Free, CanvasLayout::Grid] {
                if ui.selectable_label(state.ui.layout == layout, layout.label()).clicked() {
                    state.ui.set_layout(layout);
                }
            }
        });
    });
    ui.separator();

    if state.registry.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.heading("📊 No Charts Yet");
            ui.label("Pick a chart type in the sidebar to add your first chart");
        });
        return;
    }

    egui::ScrollArea::both()
        .scroll_source(ScrollSource {
            drag: false,
            ..ScrollSource::ALL
        })
        .auto_shrink([false, false])
        .show(ui, |ui| draw_charts(state, ui));
}

fn draw_charts(state: &mut AppState, ui: &mut egui::Ui) {
    let layout = state.ui.layout;
    let charts: Vec<ChartConfig> = state.registry.charts().to_vec();
    let placements = layout.placements(&charts, ui.available_width() as f64);

    let extent = charts
        .iter()
        .zip(&placements)
        .fold(Vec2::ZERO, |acc, (chart, pos)| {
            acc.max(Vec2::new(
                (pos.x + chart.size.width) as f32,
                (pos.y + chart.size.height) as f32,
            ))
        });
    let (canvas_rect, _) = ui.allocate_exact_size(
        (extent + Vec2::splat(HANDLE_THICKNESS * 2.0)).max(ui.available_size()),
        Sense::hover(),
    );
    let origin = canvas_rect.min;
    let to_local = |p: Pos2| Position::new((p.x - origin.x) as f64, (p.y - origin.y) as f64);

    let mut events = Vec::new();
    let active = state.ui.gestures.active_chart().map(str::to_owned);

    for (chart, pos) in charts.iter().zip(&placements) {
        let rect = Rect::from_min_size(
            origin + Vec2::new(pos.x as f32, pos.y as f32),
            Vec2::new(chart.size.width as f32, chart.size.height as f32),
        );
        let highlighted = active.as_deref() == Some(chart.id.as_str());
        draw_frame(ui, rect, highlighted);

        // header
        let header_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), HEADER_HEIGHT));
        ui.scope_builder(
            egui::UiBuilder::new()
                .max_rect(header_rect.shrink2(Vec2::new(8.0, 4.0)))
                .id_salt(("header", &chart.id)),
            |ui| {
                ui.horizontal(|ui| {
                    ui.label(chart.chart_type.icon());
                    ui.strong(chart.title.as_str());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🗑").on_hover_text("Remove chart").clicked() {
                            events.push(ChartEvent::Remove(chart.id.clone()));
                        }
                        if ui.small_button("✏").on_hover_text("Edit chart").clicked() {
                            events.push(ChartEvent::Edit(chart.id.clone()));
                        }
                    });
                });
            },
        );

        let grip = Rect::from_min_max(
            header_rect.min,
            Pos2::new(header_rect.max.x - HEADER_BUTTONS_WIDTH, header_rect.max.y),
        );
        let grip_response = ui.interact(grip, ui.id().with(("grip", &chart.id)), Sense::drag());
        if layout.allows_drag() {
            let grip_response = grip_response.on_hover_cursor(CursorIcon::Grab);
            if grip_response.drag_started() {
                if let Some(p) = grip_response.interact_pointer_pos() {
                    state.ui.gestures.begin_move(chart, *pos, to_local(p));
                }
            }
        }

        // body
        let body_rect = Rect::from_min_max(
            Pos2::new(rect.min.x + 6.0, header_rect.max.y),
            Pos2::new(rect.max.x - HANDLE_THICKNESS, rect.max.y - HANDLE_THICKNESS),
        );
        ui.scope_builder(
            egui::UiBuilder::new()
                .max_rect(body_rect)
                .id_salt(("body", &chart.id)),
            |ui| {
                ui.set_clip_rect(body_rect.intersect(ui.clip_rect()));
                render::render_chart(ui, chart, &state.dataset, body_rect.size());
            },
        );

        for (handle, handle_rect, cursor) in handle_rects(rect) {
            let response = ui
                .interact(handle_rect, ui.id().with(("resize", &chart.id, handle as u8)), Sense::drag())
                .on_hover_cursor(cursor);
            if response.drag_started() {
                if let Some(p) = response.interact_pointer_pos() {
                    state.ui.gestures.begin_resize(chart, handle, to_local(p));
                }
            }
        }
    }

    drive_gesture(state, ui, to_local);

    for event in events {
        match event {
            ChartEvent::Edit(id) => state.begin_edit(&id),
            ChartEvent::Remove(id) => {
                if state.remove_chart(&id) {
                    state.ui.info("Chart Removed", "Chart has been removed from the canvas");
                }
            }
        }
    }
}

/// Feed pointer state into the gesture controller
///
/// Pointer-up or leaving the visible canvas ends the gesture.
fn drive_gesture(state: &mut AppState, ui: &egui::Ui, to_local: impl Fn(Pos2) -> Position) {
    if !state.ui.gestures.is_active() {
        return;
    }
    let (down, pos) = ui
        .ctx()
        .input(|i| (i.pointer.primary_down(), i.pointer.latest_pos()));

    match pos {
        Some(p) if down && ui.clip_rect().contains(p) => {
            let layout = state.ui.layout;
            state.ui.gestures.drive(&mut state.registry, to_local(p), layout);
            let icon = match state.ui.gestures.state() {
                GestureState::Dragging => CursorIcon::Grabbing,
                _ => CursorIcon::ResizeNwSe,
            };
            ui.ctx().set_cursor_icon(icon);
        }
        _ => {
            state.ui.gestures.release();
        }
    }
}

fn draw_frame(ui: &egui::Ui, rect: Rect, highlighted: bool) {
    let visuals = ui.visuals();
    let stroke = if highlighted {
        Stroke::new(2.0, visuals.selection.stroke.color)
    } else {
        visuals.widgets.noninteractive.bg_stroke
    };
    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, visuals.extreme_bg_color);
    painter.rect_stroke(rect, 6.0, stroke, StrokeKind::Inside);
    painter.line_segment(
        [
            Pos2::new(rect.min.x, rect.min.y + HEADER_HEIGHT),
            Pos2::new(rect.max.x, rect.min.y + HEADER_HEIGHT),
        ],
        visuals.widgets.noninteractive.bg_stroke,
    );
}

/// Right edge, bottom edge and corner grab areas of a chart
fn handle_rects(rect: Rect) -> [(ResizeHandle, Rect, CursorIcon); 3] {
    let right = Rect::from_min_max(
        Pos2::new(rect.max.x - HANDLE_THICKNESS, rect.min.y + HEADER_HEIGHT),
        Pos2::new(rect.max.x, rect.max.y - CORNER_HANDLE),
    );
    let bottom = Rect::from_min_max(
        Pos2::new(rect.min.x, rect.max.y - HANDLE_THICKNESS),
        Pos2::new(rect.max.x - CORNER_HANDLE, rect.max.y),
    );
    let corner = Rect::from_min_max(rect.max - Vec2::splat(CORNER_HANDLE), rect.max);
    [
        (ResizeHandle::Right, right, CursorIcon::ResizeHorizontal),
        (ResizeHandle::Bottom, bottom, CursorIcon::ResizeVertical),
        (ResizeHandle::Corner, corner, CursorIcon::ResizeNwSe),
    ]
}
