//! Run domain module
//!
//! Runs carry a hyperparameter mapping and optional metrics. They belong
//! to exactly one experiment and never change after creation.

mod entity;
mod repository;
mod validation;

pub use entity::{Hyperparameters, Run, RunBuilder, RunId, RunStatus};
pub use repository::RunRepository;
pub use validation::{
    validate_exhaustive, validate_metrics, validate_notes, validate_run_name,
    RunValidationError, MAX_NOTES_LENGTH, MAX_RUN_NAME_LENGTH,
};
