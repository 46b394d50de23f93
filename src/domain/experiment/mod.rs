//! Experiment domain module
//!
//! Defines the experiment entity, its validation rules, and the
//! aggregation engine that derives summary statistics from runs.

mod entity;
mod repository;
mod stats;
mod validation;

pub use entity::{Experiment, ExperimentId, ExperimentStatus};
pub use repository::{ExperimentQuery, ExperimentRepository};
pub use stats::{hyperparameter_keys, ExperimentStats, MetricKind, MetricSummary};
pub use validation::{
    validate_description, validate_exhaustive, validate_name, validate_status,
    ExperimentValidationError, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
};
