//! Dashboard data model: charts, signals, insights and saved layouts

mod chart;
mod dashboard;
mod insight;
mod query;
mod registry;
mod sample;

pub use chart::{toggle_signal, ChartConfig, ChartPatch, ChartSize, ChartType, Comparison, Position, SignalFilter};
pub use dashboard::{DashboardConfig, FilterSnapshot};
pub use insight::{initial_insights, Insight, InsightKind};
pub use query::{query_string, Condition, QueryResult, QuickQuery, QUICK_QUERIES};
pub use registry::ChartRegistry;
pub use sample::{SampleDataset, SeriesSummary};
