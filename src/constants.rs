//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Chart defaults applied when a chart is created
pub mod chart {
    /// Default chart width in pixels
    pub const DEFAULT_WIDTH: f64 = 400.0;

    /// Default chart height in pixels
    pub const DEFAULT_HEIGHT: f64 = 300.0;

    /// Upper bound (exclusive) of the random initial x/y offset
    pub const INITIAL_POSITION_SPREAD: u32 = 200;

    pub const DEFAULT_LEGEND: &str = "Legend";
    pub const DEFAULT_X_AXIS: &str = "Time";
    pub const DEFAULT_Y_AXIS: &str = "Value";

    /// Prefix of timestamp-derived chart identifiers
    pub const ID_PREFIX: &str = "chart-";
}

/// Size floors and slider bounds for resizing
pub mod sizing {
    /// Grid layout minimum width
    pub const GRID_MIN_WIDTH: f64 = 200.0;

    /// Grid layout minimum height
    pub const GRID_MIN_HEIGHT: f64 = 150.0;

    /// Free canvas minimum width
    pub const FREE_MIN_WIDTH: f64 = 300.0;

    /// Free canvas minimum height
    pub const FREE_MIN_HEIGHT: f64 = 200.0;

    /// Edit dialog slider ranges
    pub const EDIT_WIDTH_RANGE: std::ops::RangeInclusive<f64> = 200.0..=800.0;
    pub const EDIT_HEIGHT_RANGE: std::ops::RangeInclusive<f64> = 150.0..=600.0;
    pub const EDIT_STEP: f64 = 50.0;
}

/// Mock backend timings
pub mod mock {
    /// Artificial delay before canned insights are returned
    pub const INSIGHT_DELAY_MS: u64 = 2000;

    /// Artificial delay before a mock query result is returned
    pub const QUERY_DELAY_MS: u64 = 1000;

    /// Artificial delay before a mock signal is "created"
    pub const SIGNAL_DELAY_MS: u64 = 1000;

    /// Confidence range of generated prediction insights
    pub const PREDICTION_CONFIDENCE: std::ops::RangeInclusive<u8> = 70..=95;
}

/// Filter panel defaults
pub mod filters {
    pub const DEFAULT_DATE_START: &str = "2024-01-01";
    pub const DEFAULT_DATE_END: &str = "2024-12-31";

    /// Hour-of-day bounds for the time range slider
    pub const MIN_HOUR: u8 = 0;
    pub const MAX_HOUR: u8 = 24;

    /// Date format used by the date range inputs
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Signal list defaults
pub mod signals {
    /// Signals available before any signal is created
    pub const INITIAL: [&str; 5] = ["signal1", "signal2", "signal3", "temperature", "pressure"];

    /// File extensions accepted as signal data files
    pub const DATA_EXTENSIONS: [&str; 4] = ["csv", "json", "txt", "parquet"];

    /// Number of uploaded file names shown before collapsing into "+N more"
    pub const VISIBLE_FILES: usize = 3;
}

/// Canvas rendering constants
pub mod canvas {
    /// Height of the draggable chart header
    pub const HEADER_HEIGHT: f32 = 28.0;

    /// Thickness of the edge resize handles
    pub const HANDLE_THICKNESS: f32 = 8.0;

    /// Side length of the corner resize handle
    pub const CORNER_HANDLE: f32 = 14.0;

    /// Gap between charts in grid layout
    pub const GRID_GAP: f32 = 16.0;

    /// Number of columns in grid layout
    pub const GRID_COLUMNS: usize = 2;

    /// Heatmap grid is capped at 3x3
    pub const HEATMAP_MAX_CELLS: usize = 9;

    /// Sample points further than this many sigma from the mean are flagged
    pub const ANOMALY_SIGMA: f64 = 1.5;
}

/// UI layout defaults
pub mod layout {
    /// Sidebar default width
    pub const SIDEBAR_WIDTH: f32 = 300.0;

    /// Insight strip default height
    pub const INSIGHTS_HEIGHT: f32 = 190.0;

    /// How long a toast stays on screen, in seconds
    pub const TOAST_LIFETIME_SECS: f32 = 4.0;
}

/// Configuration persistence
pub mod config {
    /// Runtime settings file name
    pub const SETTINGS_FILE: &str = "signal-dash.json";

    /// Key under which the dashboard is stored in app storage
    pub const STORAGE_KEY: &str = "dashboard-config";

    /// Prefix of exported dashboard files
    pub const EXPORT_PREFIX: &str = "dashboard-config-";
}
