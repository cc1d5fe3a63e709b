//! Per-type chart rendering over the sample dataset

use crate::constants::canvas::{ANOMALY_SIGMA, HEATMAP_MAX_CELLS};
use crate::model::{ChartConfig, ChartType, SampleDataset};
use egui::{Color32, Vec2};
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotUi, Points};

/// Fixed intensity of each heatmap cell, row-major over a 3x3 grid
const HEATMAP_INTENSITY: [f32; HEATMAP_MAX_CELLS] = [1.0, 0.62, 0.35, 0.62, 1.0, 0.87, 0.35, 0.87, 1.0];

/// Colour of the `index`th series of a chart
pub fn series_color(index: usize) -> Color32 {
    let colors = [
        Color32::from_rgb(31, 119, 180),  // Blue
        Color32::from_rgb(255, 127, 14),  // Orange
        Color32::from_rgb(44, 160, 44),   // Green
        Color32::from_rgb(214, 39, 40),   // Red
        Color32::from_rgb(148, 103, 189), // Purple
        Color32::from_rgb(140, 86, 75),   // Brown
        Color32::from_rgb(227, 119, 194), // Pink
        Color32::from_rgb(127, 127, 127), // Gray
        Color32::from_rgb(188, 189, 34),  // Yellow
        Color32::from_rgb(23, 190, 207),  // Cyan
    ];
    colors[index % colors.len()]
}

/// Time label for an x-axis mark; only whole row indices get a label
pub fn time_axis_label(dataset: &SampleDataset, value: f64) -> String {
    if (value - value.round()).abs() > 1e-6 || value < 0.0 {
        return String::new();
    }
    dataset.time_label(value.round() as usize).unwrap_or_default().to_string()
}

/// Points further than `sigma` standard deviations from the series mean
pub fn anomaly_points(points: &[[f64; 2]], sigma: f64) -> Vec<[f64; 2]> {
    if points.len() < 2 {
        return Vec::new();
    }
    let n = points.len() as f64;
    let mean = points.iter().map(|p| p[1]).sum::<f64>() / n;
    let variance = points.iter().map(|p| (p[1] - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 {
        return Vec::new();
    }
    points
        .iter()
        .filter(|p| (p[1] - mean).abs() > sigma * std_dev)
        .copied()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapCell {
    pub label: String,
    pub intensity: f32,
}

/// Static heatmap grid: the first three signals crossed with themselves
pub fn heatmap_cells(signals: &[String]) -> Vec<HeatmapCell> {
    let side = signals.len().min(3);
    let mut cells = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let label = if row == col {
                signals[row].clone()
            } else {
                format!("{} × {}", signals[row], signals[col])
            };
            cells.push(HeatmapCell {
                label,
                intensity: HEATMAP_INTENSITY[row * 3 + col],
            });
        }
    }
    cells
}

/// Bar width and x offset for series `index` of `count` grouped series
pub fn bar_layout(index: usize, count: usize) -> (f64, f64) {
    let count = count.max(1);
    let width = 0.8 / count as f64;
    let offset = (index as f64 - (count - 1) as f64 / 2.0) * width;
    (width, offset)
}

/// Draw one chart body into `size`
pub fn render_chart(ui: &mut egui::Ui, chart: &ChartConfig, dataset: &SampleDataset, size: Vec2) {
    profiling::scope!("render_chart");

    match chart.chart_type {
        ChartType::Heatmap => render_heatmap(ui, chart, size),
        ChartType::Unknown(_) => {}
        _ => render_plot(ui, chart, dataset, size),
    }
}

fn render_plot(ui: &mut egui::Ui, chart: &ChartConfig, dataset: &SampleDataset, size: Vec2) {
    let cursor = chart.cursor_enabled();
    let ds = *dataset;

    ui.label(egui::RichText::new(&chart.legend_name).small().weak());

    let plot = Plot::new(&chart.id)
        .width(size.x)
        .height((size.y - ui.spacing().interact_size.y).max(40.0))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(cursor)
        .show_y(cursor)
        .x_axis_label(chart.x_axis_name.clone())
        .y_axis_label(chart.y_axis_name.clone())
        .legend(Legend::default().position(egui_plot::Corner::RightTop))
        .x_axis_formatter(move |mark, _range| time_axis_label(&ds, mark.value));

    plot.show(ui, |plot_ui| {
        for (idx, signal) in chart.signals.iter().enumerate() {
            draw_series(plot_ui, chart, dataset, signal, idx);
        }
    });
}

fn draw_series(plot_ui: &mut PlotUi, chart: &ChartConfig, dataset: &SampleDataset, signal: &str, idx: usize) {
    let color = series_color(idx);
    let points = dataset.points(signal);

    match chart.chart_type {
        ChartType::Line => {
            plot_ui.line(Line::new(signal, points).color(color).width(2.0));
        }
        ChartType::Area => {
            plot_ui.line(Line::new(signal, points).color(color).fill(0.0));
        }
        ChartType::Scatter => {
            plot_ui.points(Points::new(signal, points).color(color).radius(4.0).filled(true));
        }
        ChartType::Bar => {
            let (width, offset) = bar_layout(idx, chart.signals.len());
            let bars: Vec<Bar> = points
                .iter()
                .map(|&[x, y]| Bar::new(x + offset, y).width(width))
                .collect();
            plot_ui.bar_chart(BarChart::new(signal, bars).color(color));
        }
        ChartType::Anomaly => {
            let flagged = anomaly_points(&points, ANOMALY_SIGMA);
            plot_ui.line(Line::new(signal, points).color(color).width(2.0));
            if !flagged.is_empty() {
                plot_ui.points(
                    Points::new(format!("{} anomalies", signal), flagged)
                        .color(Color32::RED)
                        .filled(true)
                        .radius(6.0)
                        .shape(MarkerShape::Diamond),
                );
            }
        }
        ChartType::Heatmap | ChartType::Unknown(_) => {}
    }
}

fn render_heatmap(ui: &mut egui::Ui, chart: &ChartConfig, size: Vec2) {
    let cells = heatmap_cells(&chart.signals);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if cells.is_empty() {
        return;
    }

    let side = (cells.len() as f64).sqrt().round() as usize;
    let cell_size = Vec2::new(rect.width() / side as f32, rect.height() / side as f32);
    let painter = ui.painter_at(rect);

    for (i, cell) in cells.iter().enumerate() {
        let min = rect.min + Vec2::new((i % side) as f32 * cell_size.x, (i / side) as f32 * cell_size.y);
        let cell_rect = egui::Rect::from_min_size(min, cell_size).shrink(2.0);
        let alpha = (cell.intensity * 255.0) as u8;
        painter.rect_filled(cell_rect, 4.0, Color32::from_rgba_unmultiplied(37, 99, 235, alpha));
        painter.text(
            cell_rect.center(),
            egui::Align2::CENTER_CENTER,
            &cell.label,
            egui::FontId::proportional(12.0),
            if cell.intensity > 0.5 { Color32::WHITE } else { Color32::BLACK },
        );
    }
}
