//! Dataset query builder state

use crate::model::{query_string, Comparison, Condition, QueryResult, QuickQuery};

#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub conditions: Vec<Condition>,
    /// Last result; `None` until a query has completed
    pub result: Option<QueryResult>,
    next_condition: u64,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> String {
        self.next_condition += 1;
        format!("query-{}", self.next_condition)
    }

    /// Append an empty `signal > ""` condition
    pub fn add_condition(&mut self, signal: &str) -> String {
        let id = self.fresh_id();
        self.conditions
            .push(Condition::new(id.clone(), signal, Comparison::default(), ""));
        id
    }

    pub fn remove_condition(&mut self, id: &str) {
        self.conditions.retain(|c| c.id != id);
    }

    /// Replace all conditions with a preset
    pub fn apply_quick(&mut self, preset: &QuickQuery) {
        self.next_condition += 1;
        self.conditions = preset.conditions(self.next_condition as i64);
    }

    pub fn clear(&mut self) {
        self.conditions.clear();
        self.result = None;
    }

    pub fn preview(&self) -> String {
        query_string(&self.conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QUICK_QUERIES;

    #[test]
    fn test_quick_query_replaces_conditions() {
        let mut q = QueryState::new();
        q.add_condition("signal1");
        q.add_condition("signal2");
        q.apply_quick(&QUICK_QUERIES[1]);
        assert_eq!(q.conditions.len(), 1);
        assert_eq!(q.preview(), "SDRFs > 1200");
    }

    #[test]
    fn test_condition_ids_are_unique() {
        let mut q = QueryState::new();
        let a = q.add_condition("BattU");
        let b = q.add_condition("I");
        assert_ne!(a, b);
        q.remove_condition(&a);
        assert_eq!(q.conditions.len(), 1);
        assert_eq!(q.conditions[0].id, b);
    }

    #[test]
    fn test_presets_get_distinct_ids() {
        let mut q = QueryState::new();
        q.apply_quick(&QUICK_QUERIES[0]);
        let first: Vec<String> = q.conditions.iter().map(|c| c.id.clone()).collect();
        q.apply_quick(&QUICK_QUERIES[0]);
        assert!(q.conditions.iter().all(|c| !first.contains(&c.id)));
    }
}
