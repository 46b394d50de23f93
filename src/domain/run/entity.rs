//! Run domain entities
//!
//! A run is one execution attempt within an experiment. Runs are
//! immutable once created: the type exposes no mutators and the
//! repository layer offers no update operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::validation::{self, RunValidationError};
use crate::domain::experiment::ExperimentId;

// ============================================================================
// RunId
// ============================================================================

/// Opaque unique identifier for a run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new unique ID
    pub fn generate() -> Self {
        Self(format!("run-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RunId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RunId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// RunStatus
// ============================================================================

/// Status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Run is still in progress
    Running,
    /// Run finished normally
    #[default]
    Completed,
    /// Run aborted or errored
    Failed,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RunStatus {
    type Err = RunValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(Self::Running),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(RunValidationError::InvalidStatus(other.to_string())),
        }
    }
}

// ============================================================================
// Hyperparameters
// ============================================================================

/// Arbitrary string-keyed mapping of hyperparameter values
///
/// Stored as a JSON text column by the collaborator store; this type is
/// the structured in-memory form. Encoding then decoding reproduces the
/// mapping exactly: numbers stay numbers and key order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hyperparameters(Map<String, Value>);

impl Hyperparameters {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the stored string form
    ///
    /// A malformed or non-object payload is a typed failure, never
    /// silently coerced to an empty mapping.
    pub fn from_json_str(raw: &str) -> Result<Self, RunValidationError> {
        if raw.is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(RunValidationError::HyperparametersNotAnObject(
                other.to_string(),
            )),
            Err(e) => Err(RunValidationError::MalformedHyperparameters(e.to_string())),
        }
    }

    /// Encode to the stored string form
    pub fn to_json_string(&self) -> String {
        // An in-memory map of JSON values always serializes.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    /// Insert a value, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Hyperparameters {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// ============================================================================
// Run
// ============================================================================

/// One execution attempt within an experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    id: RunId,
    experiment_id: ExperimentId,
    name: String,
    hyperparameters: Hyperparameters,
    accuracy: Option<f64>,
    loss: Option<f64>,
    latency_ms: Option<f64>,
    notes: String,
    status: RunStatus,
    created_at: DateTime<Utc>,
}

impl Run {
    // Getters only; a run never changes after creation.

    pub fn id(&self) -> &RunId {
        &self.id
    }

    pub fn experiment_id(&self) -> &ExperimentId {
        &self.experiment_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyperparameters
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    pub fn loss(&self) -> Option<f64> {
        self.loss
    }

    pub fn latency_ms(&self) -> Option<f64> {
        self.latency_ms
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// ============================================================================
// RunBuilder
// ============================================================================

/// Builder for [`Run`]; `build()` validates every field before the run
/// comes into existence
#[derive(Debug, Clone)]
pub struct RunBuilder {
    experiment_id: ExperimentId,
    name: String,
    hyperparameters: Hyperparameters,
    accuracy: Option<f64>,
    loss: Option<f64>,
    latency_ms: Option<f64>,
    notes: String,
    status: RunStatus,
}

impl RunBuilder {
    /// Start a run for the given experiment
    pub fn new(experiment_id: ExperimentId) -> Self {
        Self {
            experiment_id,
            name: String::new(),
            hyperparameters: Hyperparameters::new(),
            accuracy: None,
            loss: None,
            latency_ms: None,
            notes: String::new(),
            status: RunStatus::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn hyperparameters(mut self, hyperparameters: Hyperparameters) -> Self {
        self.hyperparameters = hyperparameters;
        self
    }

    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn loss(mut self, loss: f64) -> Self {
        self.loss = Some(loss);
        self
    }

    pub fn latency_ms(mut self, latency_ms: f64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn status(mut self, status: RunStatus) -> Self {
        self.status = status;
        self
    }

    /// Validate and construct the run with a fresh ID and timestamp
    pub fn build(self) -> Result<Run, RunValidationError> {
        validation::validate_run_name(&self.name)?;
        validation::validate_metrics(self.accuracy, self.loss, self.latency_ms)?;
        validation::validate_notes(&self.notes)?;

        Ok(Run {
            id: RunId::generate(),
            experiment_id: self.experiment_id,
            name: self.name,
            hyperparameters: self.hyperparameters,
            accuracy: self.accuracy,
            loss: self.loss,
            latency_ms: self.latency_ms,
            notes: self.notes,
            status: self.status,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod hyperparameters_tests {
        use super::*;

        #[test]
        fn test_roundtrip_preserves_values_and_order() {
            let raw = r#"{"learning_rate":2e-5,"epochs":3,"batch_size":16}"#;
            let hp = Hyperparameters::from_json_str(raw).unwrap();
            assert_eq!(hp.len(), 3);
            assert_eq!(hp.get("epochs"), Some(&Value::from(3)));

            let encoded = hp.to_json_string();
            let decoded = Hyperparameters::from_json_str(&encoded).unwrap();
            assert_eq!(decoded, hp);
            assert_eq!(
                decoded.keys().collect::<Vec<_>>(),
                vec!["learning_rate", "epochs", "batch_size"]
            );
        }

        #[test]
        fn test_numbers_stay_numbers() {
            let hp = Hyperparameters::from_json_str(r#"{"lr": 0.001}"#).unwrap();
            let encoded = hp.to_json_string();
            assert!(encoded.contains("0.001"));
            assert!(!encoded.contains("\"0.001\""));
        }

        #[test]
        fn test_empty_string_decodes_to_empty_mapping() {
            let hp = Hyperparameters::from_json_str("").unwrap();
            assert!(hp.is_empty());
        }

        #[test]
        fn test_malformed_payload_is_an_error() {
            assert!(matches!(
                Hyperparameters::from_json_str("{not json"),
                Err(RunValidationError::MalformedHyperparameters(_))
            ));
        }

        #[test]
        fn test_non_object_payload_is_an_error() {
            assert!(matches!(
                Hyperparameters::from_json_str("[1, 2, 3]"),
                Err(RunValidationError::HyperparametersNotAnObject(_))
            ));
        }
    }

    mod run_builder_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let run = RunBuilder::new(ExperimentId::from("exp-1")).build().unwrap();
            assert_eq!(run.experiment_id().as_str(), "exp-1");
            assert_eq!(run.name(), "");
            assert!(run.hyperparameters().is_empty());
            assert_eq!(run.accuracy(), None);
            assert_eq!(run.status(), RunStatus::Completed);
            assert!(run.id().as_str().starts_with("run-"));
        }

        #[test]
        fn test_full_run() {
            let run = RunBuilder::new(ExperimentId::from("exp-1"))
                .name("lr=2e-5, epochs=3")
                .hyperparameters(
                    Hyperparameters::new()
                        .with("learning_rate", 2e-5)
                        .with("epochs", 3),
                )
                .accuracy(0.891)
                .loss(0.312)
                .latency_ms(45.2)
                .notes("baseline")
                .status(RunStatus::Completed)
                .build()
                .unwrap();

            assert_eq!(run.name(), "lr=2e-5, epochs=3");
            assert_eq!(run.accuracy(), Some(0.891));
            assert_eq!(run.loss(), Some(0.312));
            assert_eq!(run.latency_ms(), Some(45.2));
            assert_eq!(run.notes(), "baseline");
        }

        #[test]
        fn test_accuracy_out_of_range_rejected() {
            let err = RunBuilder::new(ExperimentId::from("exp-1"))
                .accuracy(1.5)
                .build()
                .unwrap_err();
            assert_eq!(err, RunValidationError::AccuracyOutOfRange(1.5));
        }

        #[test]
        fn test_negative_loss_rejected() {
            let err = RunBuilder::new(ExperimentId::from("exp-1"))
                .loss(-0.1)
                .build()
                .unwrap_err();
            assert_eq!(err, RunValidationError::NegativeLoss(-0.1));
        }

        #[test]
        fn test_negative_latency_rejected() {
            let err = RunBuilder::new(ExperimentId::from("exp-1"))
                .latency_ms(-5.0)
                .build()
                .unwrap_err();
            assert_eq!(err, RunValidationError::NegativeLatency(-5.0));
        }
    }

    mod run_status_tests {
        use super::*;

        #[test]
        fn test_default_is_completed() {
            assert_eq!(RunStatus::default(), RunStatus::Completed);
        }

        #[test]
        fn test_parse_roundtrip() {
            for status in [RunStatus::Running, RunStatus::Completed, RunStatus::Failed] {
                assert_eq!(status.as_str().parse::<RunStatus>().unwrap(), status);
            }
        }

        #[test]
        fn test_unknown_status_rejected() {
            assert!(matches!(
                "archived".parse::<RunStatus>(),
                Err(RunValidationError::InvalidStatus(_))
            ));
        }
    }
}
