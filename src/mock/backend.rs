//! Analysis backends: the trait seam and the canned mock

use crate::constants::mock::PREDICTION_CONFIDENCE;
use crate::error::Result;
use crate::model::{query_string, Condition, Insight, InsightKind, QueryResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Artificial latency of each mock operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockDelays {
    pub insights: Duration,
    pub query: Duration,
    pub signal: Duration,
}

impl MockDelays {
    /// No waiting at all
    #[cfg(test)]
    pub fn zero() -> Self {
        Self {
            insights: Duration::ZERO,
            query: Duration::ZERO,
            signal: Duration::ZERO,
        }
    }
}

/// Something that can analyse signals, run queries and derive new signals
///
/// Implementations run on the worker thread and may block.
pub trait AnalysisBackend: Send + 'static {
    /// Insights to prepend to the current list
    fn generate_insights(&mut self) -> Result<Vec<Insight>>;

    fn run_query(&mut self, conditions: &[Condition]) -> Result<QueryResult>;

    /// Returns the name of the created signal
    fn create_signal(&mut self, name: &str, formula: &str) -> Result<String>;
}

/// (title, description, signal) of the predictions the mock can emit
const PREDICTIONS: [(&str, &str, &str); 3] = [
    (
        "Trend Forecast",
        "Signal2 likely to increase by 15% in next time window based on current pattern",
        "signal2",
    ),
    (
        "Pressure Drift",
        "Pressure expected to rise slowly over the next 8 hours",
        "pressure",
    ),
    (
        "Temperature Peak",
        "Temperature likely to peak near 12:00 based on the daily cycle",
        "temperature",
    ),
];

const QUERY_COLUMNS: [&str; 5] = ["time", "BattU", "SDRFs", "I", "match"];

const QUERY_ROWS: [[&str; 5]; 3] = [
    ["2025-01-16 12:40", "12.5", "1250", "820", "Yes"],
    ["2025-01-16 13:15", "12.1", "1350", "890", "Yes"],
    ["2025-01-16 14:30", "12.7", "1100", "720", "No"],
];

/// Sleeps for a fixed delay and returns canned payloads
pub struct MockBackend {
    delays: MockDelays,
    rng: StdRng,
}

impl MockBackend {
    pub fn new(delays: MockDelays) -> Self {
        Self::with_rng(delays, StdRng::from_os_rng())
    }

    pub fn with_rng(delays: MockDelays, rng: StdRng) -> Self {
        Self { delays, rng }
    }

    fn wait(delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl AnalysisBackend for MockBackend {
    fn generate_insights(&mut self) -> Result<Vec<Insight>> {
        profiling::scope!("mock_insights");
        Self::wait(self.delays.insights);

        let (title, description, signal) = PREDICTIONS[self.rng.random_range(0..PREDICTIONS.len())];
        let confidence = self.rng.random_range(PREDICTION_CONFIDENCE);
        let id = chrono::Utc::now().timestamp_millis().to_string();

        Ok(vec![
            Insight::new(id, InsightKind::Prediction, title, description, confidence).with_signal(signal),
        ])
    }

    fn run_query(&mut self, conditions: &[Condition]) -> Result<QueryResult> {
        profiling::scope!("mock_query");
        Self::wait(self.delays.query);

        Ok(QueryResult {
            query: query_string(conditions),
            columns: QUERY_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: QUERY_ROWS
                .iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
        })
    }

    fn create_signal(&mut self, name: &str, formula: &str) -> Result<String> {
        Self::wait(self.delays.signal);
        tracing::debug!(name, formula, "mock signal created");
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Comparison;

    fn backend(seed: u64) -> MockBackend {
        MockBackend::with_rng(MockDelays::zero(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_prediction_confidence_range() {
        for seed in 0..50 {
            let insights = backend(seed).generate_insights().unwrap();
            assert_eq!(insights.len(), 1);
            let insight = &insights[0];
            assert_eq!(insight.kind, InsightKind::Prediction);
            assert!(PREDICTION_CONFIDENCE.contains(&insight.confidence));
            assert!(insight.signal.is_some());
        }
    }

    #[test]
    fn test_query_table() {
        let conds = vec![
            Condition::new("1", "BattU", Comparison::Gt, "12"),
            Condition::new("2", "I", Comparison::Gt, "800"),
        ];
        let result = backend(1).run_query(&conds).unwrap();
        assert_eq!(result.query, "BattU > 12 AND I > 800");
        assert_eq!(result.columns, vec!["time", "BattU", "SDRFs", "I", "match"]);
        assert_eq!(result.row_count(), 3);
        assert_eq!(result.rows[2][4], "No");
    }

    #[test]
    fn test_create_signal_echoes_name() {
        let name = backend(1).create_signal("power", "BattU * I").unwrap();
        assert_eq!(name, "power");
    }
}
