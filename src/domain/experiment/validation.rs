//! Experiment validation utilities
//!
//! Validation checks run in a fixed order: required fields first (name),
//! then length bounds, then enumerated-value membership. Callers that can
//! surface only one error use the `Result`-returning functions; callers
//! that report everything at once use [`validate_exhaustive`].

use std::str::FromStr;
use thiserror::Error;

use super::entity::ExperimentStatus;
use crate::domain::DomainError;

/// Maximum length for experiment names
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for experiment descriptions
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Validation errors for experiments
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExperimentValidationError {
    #[error("Experiment name cannot be empty")]
    EmptyName,

    #[error("Experiment name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Experiment description exceeds maximum length of {0} characters")]
    DescriptionTooLong(usize),

    #[error("Invalid experiment status: '{0}'")]
    InvalidStatus(String),
}

impl From<ExperimentValidationError> for DomainError {
    fn from(err: ExperimentValidationError) -> Self {
        let field = match &err {
            ExperimentValidationError::EmptyName
            | ExperimentValidationError::NameTooLong(_) => "name",
            ExperimentValidationError::DescriptionTooLong(_) => "description",
            ExperimentValidationError::InvalidStatus(_) => "status",
        };
        DomainError::validation(field, err.to_string())
    }
}

/// Validate an experiment name, stopping at the first violation
///
/// A name of only whitespace is invalid, not auto-corrected.
pub fn validate_name(name: &str) -> Result<(), ExperimentValidationError> {
    if name.trim().is_empty() {
        return Err(ExperimentValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ExperimentValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an experiment description
pub fn validate_description(description: &str) -> Result<(), ExperimentValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ExperimentValidationError::DescriptionTooLong(
            MAX_DESCRIPTION_LENGTH,
        ));
    }

    Ok(())
}

/// Validate a status string against the allowed set
pub fn validate_status(status: &str) -> Result<ExperimentStatus, ExperimentValidationError> {
    ExperimentStatus::from_str(status)
}

/// Validate all experiment fields, accumulating every violation
///
/// Returns an empty vector when the input is valid. Violations appear in
/// validation order: name, then description, then status.
pub fn validate_exhaustive(
    name: &str,
    description: &str,
    status: &str,
) -> Vec<ExperimentValidationError> {
    let mut errors = Vec::new();

    if let Err(e) = validate_name(name) {
        errors.push(e);
    }

    if let Err(e) = validate_description(description) {
        errors.push(e);
    }

    if let Err(e) = validate_status(status) {
        errors.push(e);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name_validation {
        use super::*;

        #[test]
        fn test_valid_names() {
            assert!(validate_name("BERT Fine-tuning").is_ok());
            assert!(validate_name("x").is_ok());
            assert!(validate_name(&"a".repeat(200)).is_ok());
        }

        #[test]
        fn test_empty_name() {
            assert_eq!(validate_name(""), Err(ExperimentValidationError::EmptyName));
        }

        #[test]
        fn test_whitespace_only_name() {
            assert_eq!(
                validate_name("   \t "),
                Err(ExperimentValidationError::EmptyName)
            );
        }

        #[test]
        fn test_name_too_long() {
            assert_eq!(
                validate_name(&"a".repeat(201)),
                Err(ExperimentValidationError::NameTooLong(200))
            );
        }
    }

    mod description_validation {
        use super::*;

        #[test]
        fn test_empty_description_allowed() {
            assert!(validate_description("").is_ok());
        }

        #[test]
        fn test_description_too_long() {
            assert_eq!(
                validate_description(&"d".repeat(2001)),
                Err(ExperimentValidationError::DescriptionTooLong(2000))
            );
        }
    }

    mod status_validation {
        use super::*;

        #[test]
        fn test_valid_statuses() {
            assert_eq!(validate_status("draft"), Ok(ExperimentStatus::Draft));
            assert_eq!(validate_status("running"), Ok(ExperimentStatus::Running));
            assert_eq!(validate_status("archived"), Ok(ExperimentStatus::Archived));
        }

        #[test]
        fn test_invalid_status() {
            assert_eq!(
                validate_status("paused"),
                Err(ExperimentValidationError::InvalidStatus("paused".to_string()))
            );
        }
    }

    mod exhaustive_validation {
        use super::*;

        #[test]
        fn test_valid_input_yields_no_errors() {
            assert!(validate_exhaustive("Test", "", "draft").is_empty());
        }

        #[test]
        fn test_all_violations_collected_in_order() {
            let errors = validate_exhaustive("", &"d".repeat(2001), "bogus");
            assert_eq!(errors.len(), 3);
            assert_eq!(errors[0], ExperimentValidationError::EmptyName);
            assert_eq!(
                errors[1],
                ExperimentValidationError::DescriptionTooLong(2000)
            );
            assert_eq!(
                errors[2],
                ExperimentValidationError::InvalidStatus("bogus".to_string())
            );
        }

        #[test]
        fn test_first_error_matches_exhaustive_head() {
            // The single-error mode reports the same violation the
            // exhaustive mode lists first.
            let first = validate_name("").unwrap_err();
            let all = validate_exhaustive("", "", "draft");
            assert_eq!(first, all[0]);
        }
    }

    #[test]
    fn test_conversion_to_domain_error() {
        let err: DomainError = ExperimentValidationError::EmptyName.into();
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "name"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
