//! Experiment domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::{validate_description, validate_name, ExperimentValidationError};

// ============================================================================
// ExperimentId
// ============================================================================

/// Opaque unique identifier for an experiment, assigned on creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExperimentId(String);

impl ExperimentId {
    /// Create an ID from an existing value (e.g. loaded from a store)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new unique ID
    pub fn generate() -> Self {
        Self(format!("exp-{}", uuid::Uuid::new_v4()))
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ExperimentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ExperimentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ExperimentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// ExperimentStatus
// ============================================================================

/// Lifecycle status of an experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentStatus {
    /// Experiment is being set up, no runs expected yet
    #[default]
    Draft,
    /// Experiment is actively producing runs
    Running,
    /// Experiment has finished
    Completed,
    /// Experiment was aborted or broke
    Failed,
    /// Experiment is kept for the record but no longer active
    Archived,
}

impl ExperimentStatus {
    /// All valid status values, in declaration order
    pub const ALL: [ExperimentStatus; 5] = [
        Self::Draft,
        Self::Running,
        Self::Completed,
        Self::Failed,
        Self::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExperimentStatus {
    type Err = ExperimentValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "running" => Ok(Self::Running),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "archived" => Ok(Self::Archived),
            other => Err(ExperimentValidationError::InvalidStatus(other.to_string())),
        }
    }
}

// ============================================================================
// Experiment
// ============================================================================

/// A named unit of tracked work owning zero or more runs and tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experiment {
    id: ExperimentId,
    name: String,
    description: String,
    status: ExperimentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Experiment {
    /// Create a new experiment in Draft status with a generated ID
    ///
    /// Rejects a name that is empty after trimming or longer than the
    /// allowed bound; the name is stored as given, not auto-corrected.
    pub fn new(name: impl Into<String>) -> Result<Self, ExperimentValidationError> {
        let name = name.into();
        validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            id: ExperimentId::generate(),
            name,
            description: String::new(),
            status: ExperimentStatus::default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstruct an experiment from stored fields, without re-validation
    pub fn from_parts(
        id: ExperimentId,
        name: impl Into<String>,
        description: impl Into<String>,
        status: ExperimentStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            status,
            created_at,
            updated_at,
        }
    }

    // Builder methods

    /// Set the description
    pub fn with_description(
        mut self,
        description: impl Into<String>,
    ) -> Result<Self, ExperimentValidationError> {
        let description = description.into();
        validate_description(&description)?;
        self.description = description;
        Ok(self)
    }

    /// Set the initial status
    pub fn with_status(mut self, status: ExperimentStatus) -> Self {
        self.status = status;
        self
    }

    // Getters

    pub fn id(&self) -> &ExperimentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> ExperimentStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators
    //
    // Every field write refreshes `updated_at`. Child run/tag writes do
    // not go through here and leave the experiment record untouched.

    /// Rename the experiment
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ExperimentValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Replace the description
    pub fn set_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), ExperimentValidationError> {
        let description = description.into();
        validate_description(&description)?;
        self.description = description;
        self.touch();
        Ok(())
    }

    /// Change the lifecycle status
    pub fn set_status(&mut self, status: ExperimentStatus) {
        self.status = status;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod experiment_status_tests {
        use super::*;

        #[test]
        fn test_default_status() {
            assert_eq!(ExperimentStatus::default(), ExperimentStatus::Draft);
        }

        #[test]
        fn test_status_display_roundtrip() {
            for status in ExperimentStatus::ALL {
                let parsed: ExperimentStatus = status.as_str().parse().unwrap();
                assert_eq!(parsed, status);
            }
        }

        #[test]
        fn test_unknown_status_rejected() {
            let err = "paused".parse::<ExperimentStatus>().unwrap_err();
            assert_eq!(
                err,
                ExperimentValidationError::InvalidStatus("paused".to_string())
            );
        }

        #[test]
        fn test_status_serialization() {
            let json = serde_json::to_string(&ExperimentStatus::Archived).unwrap();
            assert_eq!(json, "\"archived\"");
        }
    }

    mod experiment_tests {
        use super::*;

        #[test]
        fn test_experiment_creation() {
            let exp = Experiment::new("BERT Fine-tuning").unwrap();
            assert_eq!(exp.name(), "BERT Fine-tuning");
            assert_eq!(exp.description(), "");
            assert_eq!(exp.status(), ExperimentStatus::Draft);
            assert!(exp.id().as_str().starts_with("exp-"));
            assert_eq!(exp.created_at(), exp.updated_at());
        }

        #[test]
        fn test_generated_ids_are_unique() {
            let a = Experiment::new("a").unwrap();
            let b = Experiment::new("b").unwrap();
            assert_ne!(a.id(), b.id());
        }

        #[test]
        fn test_whitespace_only_name_rejected() {
            assert!(Experiment::new("   ").is_err());
            assert!(Experiment::new("").is_err());
        }

        #[test]
        fn test_mutation_refreshes_updated_at() {
            let mut exp = Experiment::new("Test").unwrap();
            let before = exp.updated_at();
            exp.set_status(ExperimentStatus::Running);
            assert!(exp.updated_at() >= before);
            assert_eq!(exp.status(), ExperimentStatus::Running);
        }

        #[test]
        fn test_set_name_validates() {
            let mut exp = Experiment::new("Test").unwrap();
            assert!(exp.set_name("  ").is_err());
            assert_eq!(exp.name(), "Test");
            exp.set_name("Renamed").unwrap();
            assert_eq!(exp.name(), "Renamed");
        }

        #[test]
        fn test_with_description() {
            let exp = Experiment::new("Test")
                .unwrap()
                .with_description("sentiment analysis on product reviews")
                .unwrap();
            assert_eq!(exp.description(), "sentiment analysis on product reviews");
        }
    }
}
