//! Uniform algorithm result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Tour;

/// Algorithm-specific numeric metrics, keyed by name.
pub type Metrics = BTreeMap<String, f64>;

/// The outcome of one `run` call, identical in shape across algorithms so a
/// caller can rank them by `cost` and `elapsed_time` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// The closed tour found.
    pub tour: Tour,

    /// Sum of consecutive edge weights along `tour`.
    pub cost: f64,

    /// Wall-clock duration of the run, in seconds.
    pub elapsed_time: f64,

    pub metrics: Metrics,
}

impl AlgorithmResult {
    pub fn new(tour: Tour, cost: f64, elapsed_time: f64) -> Self {
        Self {
            tour,
            cost,
            elapsed_time,
            metrics: Metrics::new(),
        }
    }

    /// Adds a metric, replacing any previous value under the same name.
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let tour = Tour::close(vec![0, 1]).expect("valid");
        let result = AlgorithmResult::new(tour, 3.0, 0.01).with_metric("iterations", 5.0);
        assert_eq!(result.metric("iterations"), Some(5.0));
        assert_eq!(result.metric("mst_weight"), None);
    }

    #[test]
    fn test_serialize() {
        let tour = Tour::close(vec![1, 0]).expect("valid");
        let result = AlgorithmResult::new(tour, 2.0, 0.5).with_metric("mst_weight", 1.0);
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["tour"]["cities"], serde_json::json!([1, 0, 1]));
        assert_eq!(json["metrics"]["mst_weight"], serde_json::json!(1.0));
    }

    #[test]
    fn test_deserialize_rejects_invalid_tour() {
        let json = r#"{"tour":{"cities":[3]},"cost":0.0,"elapsed_time":0.0,"metrics":{}}"#;
        assert!(serde_json::from_str::<AlgorithmResult>(json).is_err());

        let json = r#"{"tour":{"cities":[0,1,0]},"cost":2.0,"elapsed_time":0.1,"metrics":{}}"#;
        let result: AlgorithmResult = serde_json::from_str(json).expect("deserialize");
        assert_eq!(result.tour.num_visited(), 2);
    }
}
