//! Fixed sample dataset drawn by every chart

/// Time labels of the sample rows
const TIMES: [&str; 7] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00", "24:00"];

const SIGNAL1: [f64; 7] = [4000.0, 3000.0, 2000.0, 2780.0, 1890.0, 2390.0, 3490.0];
const SIGNAL2: [f64; 7] = [2400.0, 1398.0, 9800.0, 3908.0, 4800.0, 3800.0, 4300.0];
const SIGNAL3: [f64; 7] = [2400.0, 2210.0, 2290.0, 2000.0, 2181.0, 2500.0, 2100.0];
const TEMPERATURE: [f64; 7] = [22.5, 21.8, 23.2, 25.1, 24.6, 23.8, 22.9];
const PRESSURE: [f64; 7] = [101.3, 101.1, 101.5, 101.2, 101.4, 101.6, 101.3];

/// Column-oriented sample data keyed by signal name
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataset;

/// min/max/mean of one sample series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SampleDataset {
    pub fn new() -> Self {
        Self
    }

    /// Label for a row index, `None` outside the dataset
    pub fn time_label(&self, idx: usize) -> Option<&'static str> {
        TIMES.get(idx).copied()
    }

    /// Values of a signal, `None` for names the sample does not carry
    pub fn series(&self, signal: &str) -> Option<&'static [f64]> {
        match signal {
            "signal1" => Some(&SIGNAL1),
            "signal2" => Some(&SIGNAL2),
            "signal3" => Some(&SIGNAL3),
            "temperature" => Some(&TEMPERATURE),
            "pressure" => Some(&PRESSURE),
            _ => None,
        }
    }

    /// `[row, value]` points for plotting; empty for unknown signals
    pub fn points(&self, signal: &str) -> Vec<[f64; 2]> {
        self.series(signal)
            .map(|values| {
                values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [i as f64, v])
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn summary(&self, signal: &str) -> Option<SeriesSummary> {
        let values = self.series(signal)?;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(SeriesSummary { min, max, mean })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_signal_points() {
        let ds = SampleDataset::new();
        let pts = ds.points("temperature");
        assert_eq!(pts.len(), 7);
        assert_eq!(pts[3], [3.0, 25.1]);
    }

    #[test]
    fn test_unknown_signal_is_empty() {
        let ds = SampleDataset::new();
        assert!(ds.points("humidity").is_empty());
        assert!(ds.summary("humidity").is_none());
    }

    #[test]
    fn test_summary() {
        let s = SampleDataset::new().summary("signal2").unwrap();
        assert_eq!(s.min, 1398.0);
        assert_eq!(s.max, 9800.0);
        assert!(s.mean > s.min && s.mean < s.max);
    }

    #[test]
    fn test_time_labels() {
        let ds = SampleDataset::new();
        assert_eq!(ds.time_label(0), Some("00:00"));
        assert_eq!(ds.time_label(6), Some("24:00"));
        assert_eq!(ds.time_label(7), None);
    }
}
