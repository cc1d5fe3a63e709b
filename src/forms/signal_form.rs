//! Derived signal draft
//!
//! Formulas are free text and are never parsed or evaluated.

use crate::error::{DashError, Result};
use crate::model::toggle_signal;

pub struct PredefinedFunction {
    pub name: &'static str,
    pub description: &'static str,
    /// Template using `signal1`, `signal2` placeholders
    pub formula: &'static str,
}

pub const PREDEFINED_FUNCTIONS: [PredefinedFunction; 6] = [
    PredefinedFunction {
        name: "sum",
        description: "Sum of selected signals",
        formula: "signal1 + signal2",
    },
    PredefinedFunction {
        name: "mean",
        description: "Average of selected signals",
        formula: "(signal1 + signal2) / 2",
    },
    PredefinedFunction {
        name: "diff",
        description: "Difference between signals",
        formula: "signal1 - signal2",
    },
    PredefinedFunction {
        name: "ratio",
        description: "Ratio of signals",
        formula: "signal1 / signal2",
    },
    PredefinedFunction {
        name: "zscore",
        description: "Z-score normalization",
        formula: "(signal1 - mean) / std",
    },
    PredefinedFunction {
        name: "moving_avg",
        description: "Moving average",
        formula: "rolling_mean(signal1, window=5)",
    },
];

pub fn find_function(name: &str) -> Option<&'static PredefinedFunction> {
    PREDEFINED_FUNCTIONS.iter().find(|f| f.name == name)
}

/// Replace `signal<i+1>` with the `i`th selected name, each placeholder once
pub fn fill_template(template: &str, selected: &[String]) -> String {
    // two passes so a selected name that looks like a placeholder is left alone
    let mut formula = template.to_string();
    for i in (0..selected.len()).rev() {
        formula = formula.replacen(&format!("signal{}", i + 1), &format!("\u{0}{}\u{0}", i), 1);
    }
    for (i, name) in selected.iter().enumerate() {
        formula = formula.replacen(&format!("\u{0}{}\u{0}", i), name, 1);
    }
    formula
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalDraft {
    pub name: String,
    pub formula: String,
    /// Base signals in selection order
    pub base_signals: Vec<String>,
    pub function: Option<&'static str>,
}

impl SignalDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_base_signal(&mut self, signal: &str) {
        toggle_signal(&mut self.base_signals, signal);
    }

    /// Choose a predefined function
    ///
    /// The formula is only filled when at least two base signals are selected.
    /// Returns whether the formula changed.
    pub fn apply_function(&mut self, name: &str) -> bool {
        let Some(function) = find_function(name) else {
            return false;
        };
        self.function = Some(function.name);
        if self.base_signals.len() < 2 {
            return false;
        }
        self.formula = fill_template(function.formula, &self.base_signals);
        true
    }

    /// Trimmed `(name, formula)` ready to send
    pub fn validate(&self) -> Result<(String, String)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DashError::MissingField { field: "signal name" });
        }
        let formula = self.formula.trim();
        if formula.is_empty() {
            return Err(DashError::MissingField { field: "formula" });
        }
        Ok((name.to_string(), formula.to_string()))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_fills_with_two_signals() {
        let mut draft = SignalDraft::new();
        draft.toggle_base_signal("BattU");
        draft.toggle_base_signal("I");
        assert!(draft.apply_function("mean"));
        assert_eq!(draft.formula, "(BattU + I) / 2");
        assert_eq!(draft.function, Some("mean"));
    }

    #[test]
    fn test_function_needs_two_signals() {
        let mut draft = SignalDraft::new();
        draft.formula = "signal1 * 2".into();
        draft.toggle_base_signal("BattU");
        assert!(!draft.apply_function("sum"));
        assert_eq!(draft.formula, "signal1 * 2");
        assert!(!draft.apply_function("nope"));
    }

    #[test]
    fn test_fill_template_placeholder_lookalike() {
        let selected = vec!["signal2".to_string(), "signal1".to_string()];
        assert_eq!(fill_template("signal1 - signal2", &selected), "signal2 - signal1");
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(fill_template("rolling_mean(signal1, window=5)", &three), "rolling_mean(a, window=5)");
    }

    #[test]
    fn test_validate() {
        let mut draft = SignalDraft::new();
        assert!(matches!(
            draft.validate(),
            Err(DashError::MissingField { field: "signal name" })
        ));
        draft.name = " power ".into();
        assert!(matches!(
            draft.validate(),
            Err(DashError::MissingField { field: "formula" })
        ));
        draft.formula = "BattU * I".into();
        assert_eq!(draft.validate().unwrap(), ("power".to_string(), "BattU * I".to_string()));
    }

    #[test]
    fn test_predefined_names() {
        let names: Vec<&str> = PREDEFINED_FUNCTIONS.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["sum", "mean", "diff", "ratio", "zscore", "moving_avg"]);
    }
}
