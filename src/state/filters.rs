//! Global filter panel state
//!
//! Filters are recorded and saved with the dashboard but never narrow the
//! data that charts draw.

use chrono::NaiveDate;

use crate::constants::filters::*;
use crate::error::{DashError, Result};
use crate::model::{query_string, Comparison, Condition, FilterSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Inclusive `YYYY-MM-DD` bounds
    pub date_start: String,
    pub date_end: String,

    /// Hour-of-day bounds, 0..=24
    pub time_range: [u8; 2],

    /// `None` means all files
    pub selected_file: Option<String>,

    /// Conditional filters, shown joined by AND
    pub conditions: Vec<Condition>,

    next_condition: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            date_start: DEFAULT_DATE_START.to_string(),
            date_end: DEFAULT_DATE_END.to_string(),
            time_range: [MIN_HOUR, MAX_HOUR],
            selected_file: None,
            conditions: Vec::new(),
            next_condition: 0,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset Filters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Append a `signal > ""` condition and return its id
    pub fn add_condition(&mut self, signal: &str) -> String {
        // restored conditions may already use low numbers
        let id = loop {
            self.next_condition += 1;
            let candidate = format!("filter-{}", self.next_condition);
            if !self.conditions.iter().any(|c| c.id == candidate) {
                break candidate;
            }
        };
        self.conditions
            .push(Condition::new(id.clone(), signal, Comparison::default(), ""));
        id
    }

    pub fn remove_condition(&mut self, id: &str) -> bool {
        let before = self.conditions.len();
        self.conditions.retain(|c| c.id != id);
        self.conditions.len() != before
    }

    pub fn condition_summary(&self) -> String {
        query_string(&self.conditions)
    }

    /// Check if any filters differ from the defaults
    pub fn has_active_filters(&self) -> bool {
        self.date_start != DEFAULT_DATE_START
            || self.date_end != DEFAULT_DATE_END
            || self.time_range != [MIN_HOUR, MAX_HOUR]
            || self.selected_file.is_some()
            || !self.conditions.is_empty()
    }

    /// Apply Filters: validate and normalize in place
    ///
    /// Reversed ranges are swapped and hours clamped to 0..=24. An unparsable
    /// date is reported and leaves the dates as typed.
    pub fn validate(&mut self) -> Result<()> {
        let start = parse_date(&self.date_start)?;
        let end = parse_date(&self.date_end)?;
        if start > end {
            std::mem::swap(&mut self.date_start, &mut self.date_end);
        }

        for hour in &mut self.time_range {
            *hour = (*hour).min(MAX_HOUR);
        }
        if self.time_range[0] > self.time_range[1] {
            self.time_range.swap(0, 1);
        }

        tracing::debug!(
            from = %self.date_start,
            to = %self.date_end,
            hours = ?self.time_range,
            conditions = self.conditions.len(),
            "filters applied"
        );
        Ok(())
    }

    pub fn to_snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            date_range: [self.date_start.clone(), self.date_end.clone()],
            time_range: self.time_range,
            selected_files: self.selected_file.iter().cloned().collect(),
            signal_filters: self.conditions.clone(),
        }
    }

    /// Restore from a loaded dashboard
    pub fn restore(&mut self, snapshot: FilterSnapshot) {
        let FilterSnapshot {
            date_range: [start, end],
            time_range,
            selected_files,
            signal_filters,
        } = snapshot;

        self.date_start = start;
        self.date_end = end;
        self.time_range = [time_range[0].min(MAX_HOUR), time_range[1].min(MAX_HOUR)];
        self.selected_file = selected_files.into_iter().next();
        self.conditions = signal_filters;
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| DashError::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let f = FilterState::new();
        assert_eq!(f.date_start, "2024-01-01");
        assert_eq!(f.date_end, "2024-12-31");
        assert_eq!(f.time_range, [0, 24]);
        assert!(!f.has_active_filters());
    }

    #[test]
    fn test_validate_swaps_reversed_ranges() {
        let mut f = FilterState::new();
        f.date_start = "2024-06-01".into();
        f.date_end = "2024-02-01".into();
        f.time_range = [20, 4];
        f.validate().unwrap();
        assert_eq!(f.date_start, "2024-02-01");
        assert_eq!(f.date_end, "2024-06-01");
        assert_eq!(f.time_range, [4, 20]);
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let mut f = FilterState::new();
        f.date_end = "2024-13-45".into();
        let err = f.validate().unwrap_err();
        assert!(matches!(err, DashError::InvalidDate { .. }));
        assert_eq!(f.date_end, "2024-13-45");
    }

    #[test]
    fn test_conditions() {
        let mut f = FilterState::new();
        let a = f.add_condition("signal1");
        let b = f.add_condition("pressure");
        assert_ne!(a, b);
        f.conditions[0].value = "10".into();
        f.conditions[1].operator = Comparison::Le;
        f.conditions[1].value = "101.5".into();
        assert_eq!(f.condition_summary(), "signal1 > 10 AND pressure <= 101.5");

        assert!(f.remove_condition(&a));
        assert!(!f.remove_condition(&a));
        assert_eq!(f.conditions.len(), 1);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut f = FilterState::new();
        f.selected_file = Some("run.csv".into());
        f.time_range = [3, 9];
        f.add_condition("signal2");
        let snapshot = f.to_snapshot();
        assert_eq!(snapshot.selected_files, vec!["run.csv".to_string()]);

        let mut restored = FilterState::new();
        restored.restore(snapshot);
        assert_eq!(restored.selected_file.as_deref(), Some("run.csv"));
        assert_eq!(restored.time_range, [3, 9]);
        assert_eq!(restored.conditions, f.conditions);

        restored.reset();
        assert!(!restored.has_active_filters());
    }
}
