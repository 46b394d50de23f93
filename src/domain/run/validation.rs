//! Run validation utilities

use thiserror::Error;

use crate::domain::DomainError;

/// Maximum length for run names
pub const MAX_RUN_NAME_LENGTH: usize = 200;

/// Maximum length for run notes
pub const MAX_NOTES_LENGTH: usize = 5000;

/// Validation errors for runs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RunValidationError {
    #[error("Run name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Accuracy must be between 0 and 1, got {0}")]
    AccuracyOutOfRange(f64),

    #[error("Loss must be non-negative, got {0}")]
    NegativeLoss(f64),

    #[error("Latency must be non-negative, got {0}")]
    NegativeLatency(f64),

    #[error("Notes exceed maximum length of {0} characters")]
    NotesTooLong(usize),

    #[error("Invalid run status: '{0}'")]
    InvalidStatus(String),

    #[error("Hyperparameters are not valid JSON: {0}")]
    MalformedHyperparameters(String),

    #[error("Hyperparameters must be a JSON object, got: {0}")]
    HyperparametersNotAnObject(String),
}

impl From<RunValidationError> for DomainError {
    fn from(err: RunValidationError) -> Self {
        let field = match &err {
            RunValidationError::NameTooLong(_) => "name",
            RunValidationError::AccuracyOutOfRange(_) => "accuracy",
            RunValidationError::NegativeLoss(_) => "loss",
            RunValidationError::NegativeLatency(_) => "latency_ms",
            RunValidationError::NotesTooLong(_) => "notes",
            RunValidationError::InvalidStatus(_) => "status",
            RunValidationError::MalformedHyperparameters(_)
            | RunValidationError::HyperparametersNotAnObject(_) => "hyperparameters",
        };
        DomainError::validation(field, err.to_string())
    }
}

/// Validate a run name (empty is allowed)
pub fn validate_run_name(name: &str) -> Result<(), RunValidationError> {
    if name.chars().count() > MAX_RUN_NAME_LENGTH {
        return Err(RunValidationError::NameTooLong(MAX_RUN_NAME_LENGTH));
    }
    Ok(())
}

/// Validate optional metric values, stopping at the first violation
pub fn validate_metrics(
    accuracy: Option<f64>,
    loss: Option<f64>,
    latency_ms: Option<f64>,
) -> Result<(), RunValidationError> {
    if let Some(a) = accuracy {
        if !(0.0..=1.0).contains(&a) {
            return Err(RunValidationError::AccuracyOutOfRange(a));
        }
    }

    if let Some(l) = loss {
        if l < 0.0 {
            return Err(RunValidationError::NegativeLoss(l));
        }
    }

    if let Some(ms) = latency_ms {
        if ms < 0.0 {
            return Err(RunValidationError::NegativeLatency(ms));
        }
    }

    Ok(())
}

/// Validate run notes
pub fn validate_notes(notes: &str) -> Result<(), RunValidationError> {
    if notes.chars().count() > MAX_NOTES_LENGTH {
        return Err(RunValidationError::NotesTooLong(MAX_NOTES_LENGTH));
    }
    Ok(())
}

/// Validate all run fields, accumulating every violation
pub fn validate_exhaustive(
    name: &str,
    accuracy: Option<f64>,
    loss: Option<f64>,
    latency_ms: Option<f64>,
    notes: &str,
) -> Vec<RunValidationError> {
    let mut errors = Vec::new();

    if let Err(e) = validate_run_name(name) {
        errors.push(e);
    }

    if let Some(a) = accuracy {
        if !(0.0..=1.0).contains(&a) {
            errors.push(RunValidationError::AccuracyOutOfRange(a));
        }
    }

    if let Some(l) = loss {
        if l < 0.0 {
            errors.push(RunValidationError::NegativeLoss(l));
        }
    }

    if let Some(ms) = latency_ms {
        if ms < 0.0 {
            errors.push(RunValidationError::NegativeLatency(ms));
        }
    }

    if let Err(e) = validate_notes(notes) {
        errors.push(e);
    }

    errors
}
