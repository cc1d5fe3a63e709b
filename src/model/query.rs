//! Conditions and mock query results

use super::chart::Comparison;
use serde::{Deserialize, Serialize};

/// One `signal operator value` clause, joined with AND when shown
///
/// Used by the filter panel's conditional filters and by dataset queries.
/// The value stays free text; nothing ever evaluates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub signal: String,
    pub operator: Comparison,
    #[serde(default)]
    pub value: String,
}

impl Condition {
    pub fn new(
        id: impl Into<String>,
        signal: impl Into<String>,
        operator: Comparison,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            signal: signal.into(),
            operator,
            value: value.into(),
        }
    }

    /// `signal op value`
    pub fn clause(&self) -> String {
        format!("{} {} {}", self.signal, self.operator.symbol(), self.value)
    }
}

/// Render conditions the way the query panel displays them
pub fn query_string(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(Condition::clause)
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Tabular payload returned by a query
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    pub query: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl QueryResult {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A named preset that replaces the current query conditions
pub struct QuickQuery {
    pub label: &'static str,
    pub clauses: &'static [(&'static str, Comparison, &'static str)],
}

pub const QUICK_QUERIES: [QuickQuery; 3] = [
    QuickQuery {
        label: "High Battery & Current",
        clauses: &[("BattU", Comparison::Gt, "12"), ("I", Comparison::Gt, "800")],
    },
    QuickQuery {
        label: "SDRF Anomalies",
        clauses: &[("SDRFs", Comparison::Gt, "1200")],
    },
    QuickQuery {
        label: "Temperature Range",
        clauses: &[
            ("temperature", Comparison::Gt, "20"),
            ("temperature", Comparison::Lt, "25"),
        ],
    },
];

impl QuickQuery {
    /// Expand into conditions, ids derived from `stamp`
    pub fn conditions(&self, stamp: i64) -> Vec<Condition> {
        self.clauses
            .iter()
            .enumerate()
            .map(|(i, (signal, op, value))| Condition::new(format!("{}-{}", stamp, i), *signal, *op, *value))
            .collect()
    }
}
