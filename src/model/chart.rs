//! Chart configuration types

use crate::constants::chart::*;
use serde::{Deserialize, Serialize};

/// Rendering strategy for a chart, stored as its lowercase name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartType {
    Line,
    Bar,
    Scatter,
    Area,
    Heatmap,
    Anomaly,
    /// A type name this build does not know. Renders nothing and is saved back verbatim.
    Unknown(String),
}

impl From<String> for ChartType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "line" => ChartType::Line,
            "bar" => ChartType::Bar,
            "scatter" => ChartType::Scatter,
            "area" => ChartType::Area,
            "heatmap" => ChartType::Heatmap,
            "anomaly" => ChartType::Anomaly,
            _ => ChartType::Unknown(name),
        }
    }
}

impl From<ChartType> for String {
    fn from(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Unknown(name) => name,
            known => known.short_name().to_string(),
        }
    }
}

impl ChartType {
    /// Types offered by the creation and edit forms
    pub const SELECTABLE: [ChartType; 6] = [
        ChartType::Line,
        ChartType::Bar,
        ChartType::Scatter,
        ChartType::Area,
        ChartType::Heatmap,
        ChartType::Anomaly,
    ];

    pub fn label(&self) -> &str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Bar => "Bar Chart",
            ChartType::Scatter => "Scatter Plot",
            ChartType::Area => "Area Chart",
            ChartType::Heatmap => "Heatmap",
            ChartType::Anomaly => "Anomaly Chart",
            ChartType::Unknown(_) => "Unknown",
        }
    }

    pub fn short_name(&self) -> &str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Scatter => "scatter",
            ChartType::Area => "area",
            ChartType::Heatmap => "heatmap",
            ChartType::Anomaly => "anomaly",
            ChartType::Unknown(name) => name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ChartType::Line => "Best for time-series trends",
            ChartType::Bar => "Compare discrete values",
            ChartType::Scatter => "Show correlations",
            ChartType::Area => "Emphasize magnitude",
            ChartType::Heatmap => "Signal correlation overview",
            ChartType::Anomaly => "Highlight unusual readings",
            ChartType::Unknown(_) => "",
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            ChartType::Line => "📈",
            ChartType::Bar => "📊",
            ChartType::Scatter => "⚫",
            ChartType::Area => "⛰",
            ChartType::Heatmap => "▦",
            ChartType::Anomaly => "⚠",
            ChartType::Unknown(_) => "?",
        }
    }
}

/// Top-left corner of a chart, relative to the canvas origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
}

impl ChartSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Comparison operator used by signal filters and query conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "==", alias = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
}

impl Comparison {
    /// Operators a chart signal filter may use
    pub const CHART_FILTER: [Comparison; 5] = [
        Comparison::Gt,
        Comparison::Lt,
        Comparison::Ge,
        Comparison::Le,
        Comparison::Eq,
    ];

    /// Operators a dataset query may use
    pub const QUERY: [Comparison; 6] = [
        Comparison::Gt,
        Comparison::Lt,
        Comparison::Ge,
        Comparison::Le,
        Comparison::Eq,
        Comparison::Ne,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Gt => ">",
            Comparison::Lt => "<",
            Comparison::Ge => ">=",
            Comparison::Le => "<=",
            Comparison::Eq => "==",
            Comparison::Ne => "!=",
        }
    }

    /// Symbol shown in operator pickers
    pub fn display(self) -> &'static str {
        match self {
            Comparison::Ge => "≥",
            Comparison::Le => "≤",
            Comparison::Eq => "=",
            Comparison::Ne => "≠",
            other => other.symbol(),
        }
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Comparison::Gt
    }
}

/// A stored-but-never-applied per-chart filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalFilter {
    pub signal: String,
    pub condition: Comparison,
    pub value: f64,
}

impl SignalFilter {
    pub fn new(signal: impl Into<String>) -> Self {
        Self {
            signal: signal.into(),
            condition: Comparison::default(),
            value: 0.0,
        }
    }
}

/// The persisted description of one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub title: String,
    /// Kept for file compatibility; charts always draw the sample dataset
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub size: ChartSize,
    #[serde(default)]
    pub signals: Vec<String>,
    #[serde(default)]
    pub signal_filters: Vec<SignalFilter>,
    #[serde(default = "default_legend")]
    pub legend_name: String,
    #[serde(default = "default_x_axis")]
    pub x_axis_name: String,
    #[serde(default = "default_y_axis")]
    pub y_axis_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_cursor: Option<bool>,
}

fn default_legend() -> String {
    DEFAULT_LEGEND.to_string()
}

fn default_x_axis() -> String {
    DEFAULT_X_AXIS.to_string()
}

fn default_y_axis() -> String {
    DEFAULT_Y_AXIS.to_string()
}

impl ChartConfig {
    /// Create a chart with default size, labels and no filters
    pub fn new(
        id: impl Into<String>,
        chart_type: ChartType,
        title: impl Into<String>,
        signals: Vec<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            chart_type,
            title: title.into(),
            data: Vec::new(),
            position,
            size: ChartSize::default(),
            signals,
            signal_filters: Vec::new(),
            legend_name: default_legend(),
            x_axis_name: default_x_axis(),
            y_axis_name: default_y_axis(),
            enable_cursor: None,
        }
    }

    pub fn cursor_enabled(&self) -> bool {
        self.enable_cursor.unwrap_or(false)
    }

    /// Merge a partial update into this chart. The id is never touched.
    pub fn apply(&mut self, patch: ChartPatch) {
        let ChartPatch {
            title,
            chart_type,
            position,
            size,
            signals,
            signal_filters,
            legend_name,
            x_axis_name,
            y_axis_name,
            enable_cursor,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(chart_type) = chart_type {
            self.chart_type = chart_type;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(signals) = signals {
            self.signals = signals;
        }
        if let Some(filters) = signal_filters {
            self.signal_filters = filters;
        }
        if let Some(legend) = legend_name {
            self.legend_name = legend;
        }
        if let Some(x) = x_axis_name {
            self.x_axis_name = x;
        }
        if let Some(y) = y_axis_name {
            self.y_axis_name = y;
        }
        if let Some(cursor) = enable_cursor {
            self.enable_cursor = Some(cursor);
        }
    }
}

/// Partial update of a chart, applied through the registry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartPatch {
    pub title: Option<String>,
    pub chart_type: Option<ChartType>,
    pub position: Option<Position>,
    pub size: Option<ChartSize>,
    pub signals: Option<Vec<String>>,
    pub signal_filters: Option<Vec<SignalFilter>>,
    pub legend_name: Option<String>,
    pub x_axis_name: Option<String>,
    pub y_axis_name: Option<String>,
    pub enable_cursor: Option<bool>,
}

impl ChartPatch {
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn size(size: ChartSize) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }
}

/// Toggle `signal` in an ordered set: append if absent, remove if present
pub fn toggle_signal(signals: &mut Vec<String>, signal: &str) {
    if let Some(idx) = signals.iter().position(|s| s == signal) {
        signals.remove(idx);
    } else {
        signals.push(signal.to_string());
    }
}
