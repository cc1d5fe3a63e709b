//! Canvas layout variants and their size floors

use crate::constants::canvas::{GRID_COLUMNS, GRID_GAP};
use crate::constants::sizing::*;
use crate::model::{ChartConfig, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasLayout {
    /// Two-column grid; stored positions are ignored and charts cannot be dragged
    Grid,
    /// Charts sit at their stored positions and can be dragged
    #[default]
    Free,
}

impl CanvasLayout {
    pub fn label(self) -> &'static str {
        match self {
            CanvasLayout::Grid => "Grid",
            CanvasLayout::Free => "Free Canvas",
        }
    }

    pub fn allows_drag(self) -> bool {
        matches!(self, CanvasLayout::Free)
    }

    pub fn min_width(self) -> f64 {
        match self {
            CanvasLayout::Grid => GRID_MIN_WIDTH,
            CanvasLayout::Free => FREE_MIN_WIDTH,
        }
    }

    pub fn min_height(self) -> f64 {
        match self {
            CanvasLayout::Grid => GRID_MIN_HEIGHT,
            CanvasLayout::Free => FREE_MIN_HEIGHT,
        }
    }

    /// Where each chart is drawn, in canvas-local coordinates
    pub fn placements(self, charts: &[ChartConfig], canvas_width: f64) -> Vec<Position> {
        match self {
            CanvasLayout::Free => charts.iter().map(|c| c.position).collect(),
            CanvasLayout::Grid => grid_positions(charts, canvas_width),
        }
    }
}

fn grid_positions(charts: &[ChartConfig], canvas_width: f64) -> Vec<Position> {
    let gap = GRID_GAP as f64;
    let column_width = (canvas_width / GRID_COLUMNS as f64).max(GRID_MIN_WIDTH + gap);
    let mut positions = Vec::with_capacity(charts.len());
    let mut row_top = gap;

    for row in charts.chunks(GRID_COLUMNS) {
        let mut row_height: f64 = 0.0;
        for (col, chart) in row.iter().enumerate() {
            positions.push(Position::new(gap + col as f64 * column_width, row_top));
            row_height = row_height.max(chart.size.height);
        }
        row_top += row_height + gap;
    }
    positions
}
