//! Aggregation engine for run metrics
//!
//! Derives summary statistics from the runs belonging to one experiment.
//! All computations follow the exclude-nulls policy: a run missing a
//! metric is excluded from both numerator and denominator, never treated
//! as zero. Zero and "no data" are distinct results.

use serde::{Deserialize, Serialize};

use crate::domain::run::Run;

// ============================================================================
// ExperimentStats
// ============================================================================

/// Derived statistics for one experiment's runs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperimentStats {
    /// Total number of runs, whether or not they carry metrics
    pub total_runs: usize,
    /// Mean accuracy over runs that carry an accuracy value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_accuracy: Option<f64>,
    /// Maximum accuracy over runs that carry an accuracy value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_accuracy: Option<f64>,
    /// Mean loss over runs that carry a loss value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_loss: Option<f64>,
}

impl ExperimentStats {
    /// Compute statistics from a set of runs
    ///
    /// Pure function of its input. An experiment with runs but no
    /// accuracy values still reports `total_runs > 0` with
    /// `avg_accuracy == None`; the two facts are independent.
    pub fn from_runs(runs: &[Run]) -> Self {
        let accuracies: Vec<f64> = runs.iter().filter_map(|r| r.accuracy()).collect();
        let losses: Vec<f64> = runs.iter().filter_map(|r| r.loss()).collect();

        Self {
            total_runs: runs.len(),
            avg_accuracy: mean(&accuracies),
            best_accuracy: accuracies.iter().copied().reduce(f64::max),
            avg_loss: mean(&losses),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

// ============================================================================
// MetricSummary
// ============================================================================

/// Which run metric a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Accuracy,
    Loss,
    LatencyMs,
}

impl MetricKind {
    fn extract(&self, run: &Run) -> Option<f64> {
        match self {
            Self::Accuracy => run.accuracy(),
            Self::Loss => run.loss(),
            Self::LatencyMs => run.latency_ms(),
        }
    }
}

/// Summary of a single metric across an experiment's runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub metric: MetricKind,
    /// Number of runs that carry the metric
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl MetricSummary {
    /// Summarize one metric over the given runs
    ///
    /// Returns `None` when no run carries the metric.
    pub fn from_runs(runs: &[Run], metric: MetricKind) -> Option<Self> {
        let values: Vec<f64> = runs.iter().filter_map(|r| metric.extract(r)).collect();
        if values.is_empty() {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            metric,
            count: values.len(),
            mean: values.iter().sum::<f64>() / values.len() as f64,
            min,
            max,
            range: max - min,
        })
    }
}

// ============================================================================
// Hyperparameter comparison
// ============================================================================

/// Sorted union of hyperparameter keys across runs
///
/// Used when comparing runs side by side: each run may carry a different
/// key set, so the comparison table is built over the union.
pub fn hyperparameter_keys(runs: &[Run]) -> Vec<String> {
    let mut keys: Vec<String> = runs
        .iter()
        .flat_map(|r| r.hyperparameters().keys().map(String::from))
        .collect();
    keys.sort();
    keys.dedup();
    keys
}
