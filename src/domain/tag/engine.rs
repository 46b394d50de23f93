//! Tag engine: normalization, validation, add/list/remove
//!
//! The engine is storage-representation-agnostic: it operates on the tag
//! set the caller loaded for one experiment, and its contract holds
//! whether the store keeps tags as rows or as a CSV column (see
//! [`super::csv_column`]). Duplicate detection here is check-then-insert;
//! the collaborator store must make the insert atomic for concurrent
//! adds of the same normalized name.

use serde::Deserialize;
use thiserror::Error;

use super::entity::Tag;
use crate::domain::experiment::ExperimentId;
use crate::domain::DomainError;

/// Maximum length for tag names, measured on the normalized form
pub const MAX_TAG_NAME_LENGTH: usize = 50;

/// Validation errors for tag names
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    #[error("Tag name cannot be empty")]
    EmptyName,

    #[error("Tag name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Tag name cannot contain spaces: '{0}'")]
    EmbeddedWhitespace(String),
}

impl From<TagValidationError> for DomainError {
    fn from(err: TagValidationError) -> Self {
        DomainError::validation("name", err.to_string())
    }
}

/// Tag validation policy
///
/// Embedded spaces in tag names are permitted by default; a deployment
/// that wants the stricter rule sets `allow_embedded_spaces` to false.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TagPolicy {
    pub allow_embedded_spaces: bool,
}

impl Default for TagPolicy {
    fn default() -> Self {
        Self {
            allow_embedded_spaces: true,
        }
    }
}

/// Normalize a candidate tag name: trim, then lower-case
///
/// Returns the normalized name or a validation failure; never truncates.
pub fn normalize_tag_name(name: &str) -> Result<String, TagValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(TagValidationError::EmptyName);
    }

    // Lower-case before measuring; some characters expand when
    // lower-cased, and the stored name is what the bound applies to.
    let lowered = trimmed.to_lowercase();

    if lowered.chars().count() > MAX_TAG_NAME_LENGTH {
        return Err(TagValidationError::NameTooLong(MAX_TAG_NAME_LENGTH));
    }

    Ok(lowered)
}

/// Tag engine for one experiment's tag set
#[derive(Debug, Clone, Default)]
pub struct TagEngine {
    policy: TagPolicy,
}

impl TagEngine {
    /// Create an engine with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an explicit policy
    pub fn with_policy(policy: TagPolicy) -> Self {
        Self { policy }
    }

    /// Normalize and validate a candidate name under the engine's policy
    pub fn normalize(&self, name: &str) -> Result<String, TagValidationError> {
        let normalized = normalize_tag_name(name)?;

        if !self.policy.allow_embedded_spaces && normalized.contains(char::is_whitespace) {
            return Err(TagValidationError::EmbeddedWhitespace(normalized));
        }

        Ok(normalized)
    }

    /// Add a tag to an experiment's existing tag set
    ///
    /// Fails with `Conflict` when a tag with the same normalized name
    /// already exists for this experiment; the caller distinguishes that
    /// from `NotFound` (missing experiment, checked before calling) and
    /// from validation failures.
    pub fn add(
        &self,
        experiment_id: &ExperimentId,
        existing: &[Tag],
        candidate: &str,
    ) -> Result<Tag, DomainError> {
        let normalized = self.normalize(candidate)?;

        if existing.iter().any(|t| t.name() == normalized) {
            return Err(DomainError::conflict(format!(
                "tag '{normalized}' already exists for experiment '{experiment_id}'"
            )));
        }

        Ok(Tag::new(experiment_id.clone(), normalized))
    }

    /// Remove the tag matching the (normalized) name, if present
    ///
    /// Removing a tag that was never added is a no-op: the set comes
    /// back unchanged. A malformed name is still a validation failure.
    pub fn remove(&self, existing: Vec<Tag>, name: &str) -> Result<Vec<Tag>, DomainError> {
        let normalized = self.normalize(name)?;
        Ok(existing
            .into_iter()
            .filter(|t| t.name() != normalized)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exp_id() -> ExperimentId {
        ExperimentId::from("exp-1")
    }

    mod normalization_tests {
        use super::*;

        #[test]
        fn test_trim_and_lowercase() {
            assert_eq!(normalize_tag_name("  NLP "), Ok("nlp".to_string()));
            assert_eq!(normalize_tag_name("Production"), Ok("production".to_string()));
        }

        #[test]
        fn test_empty_after_trim_rejected() {
            assert_eq!(normalize_tag_name("   "), Err(TagValidationError::EmptyName));
            assert_eq!(normalize_tag_name(""), Err(TagValidationError::EmptyName));
        }

        #[test]
        fn test_length_measured_after_trimming() {
            // 50 chars plus surrounding whitespace is still valid.
            let padded = format!("  {}  ", "a".repeat(50));
            assert!(normalize_tag_name(&padded).is_ok());

            assert_eq!(
                normalize_tag_name(&"a".repeat(51)),
                Err(TagValidationError::NameTooLong(50))
            );
        }

        #[test]
        fn test_long_names_rejected_not_truncated() {
            let name = "x".repeat(60);
            let result = normalize_tag_name(&name);
            assert!(result.is_err());
        }

        #[test]
        fn test_length_measured_on_lowercased_form() {
            // 'İ' lower-cases to two chars, so 50 of them normalize to
            // 100 chars and must be rejected.
            let expanding = "İ".repeat(50);
            assert_eq!(
                normalize_tag_name(&expanding),
                Err(TagValidationError::NameTooLong(50))
            );

            // 25 of them lower-case to exactly 50 chars and pass.
            let at_bound = "İ".repeat(25);
            let normalized = normalize_tag_name(&at_bound).unwrap();
            assert_eq!(normalized.chars().count(), 50);
        }
    }

    mod policy_tests {
        use super::*;

        #[test]
        fn test_default_policy_allows_embedded_spaces() {
            let engine = TagEngine::new();
            assert_eq!(engine.normalize("data prep"), Ok("data prep".to_string()));
        }

        #[test]
        fn test_strict_policy_rejects_embedded_spaces() {
            let engine = TagEngine::with_policy(TagPolicy {
                allow_embedded_spaces: false,
            });
            assert_eq!(
                engine.normalize("data prep"),
                Err(TagValidationError::EmbeddedWhitespace("data prep".to_string()))
            );
            // Surrounding whitespace is trimmed away before the check.
            assert_eq!(engine.normalize("  nlp "), Ok("nlp".to_string()));
        }

        #[test]
        fn test_policy_deserializes_with_defaults() {
            let policy: TagPolicy = serde_json::from_str("{}").unwrap();
            assert!(policy.allow_embedded_spaces);

            let strict: TagPolicy =
                serde_json::from_str(r#"{"allow_embedded_spaces": false}"#).unwrap();
            assert!(!strict.allow_embedded_spaces);
        }
    }

    mod add_tests {
        use super::*;

        #[test]
        fn test_add_normalizes() {
            let engine = TagEngine::new();
            let tag = engine.add(&exp_id(), &[], "NLP ").unwrap();
            assert_eq!(tag.name(), "nlp");
            assert_eq!(tag.experiment_id(), &exp_id());
            assert!(tag.id().as_str().starts_with("tag-"));
        }

        #[test]
        fn test_duplicate_add_conflicts() {
            let engine = TagEngine::new();
            let first = engine.add(&exp_id(), &[], "nlp").unwrap();
            let err = engine.add(&exp_id(), &[first], "NLP").unwrap_err();
            assert!(err.is_conflict());
        }

        #[test]
        fn test_same_name_on_two_experiments_is_fine() {
            let engine = TagEngine::new();
            let a = engine.add(&ExperimentId::from("exp-a"), &[], "nlp").unwrap();
            let b = engine.add(&ExperimentId::from("exp-b"), &[], "nlp").unwrap();
            assert_eq!(a.name(), b.name());
            assert_ne!(a.experiment_id(), b.experiment_id());
        }

        #[test]
        fn test_validation_distinct_from_conflict() {
            let engine = TagEngine::new();
            let err = engine.add(&exp_id(), &[], &"a".repeat(51)).unwrap_err();
            assert!(err.is_validation());
            assert!(!err.is_conflict());

            let err = engine.add(&exp_id(), &[], "   ").unwrap_err();
            assert!(err.is_validation());
        }
    }

    mod remove_tests {
        use super::*;

        #[test]
        fn test_add_remove_roundtrip() {
            let engine = TagEngine::new();
            let tag = engine.add(&exp_id(), &[], "NLP ").unwrap();
            assert_eq!(tag.name(), "nlp");

            let remaining = engine.remove(vec![tag], "nlp").unwrap();
            assert!(remaining.is_empty());
        }

        #[test]
        fn test_remove_normalizes_the_needle() {
            let engine = TagEngine::new();
            let tag = engine.add(&exp_id(), &[], "nlp").unwrap();
            let remaining = engine.remove(vec![tag], "  NLP ").unwrap();
            assert!(remaining.is_empty());
        }

        #[test]
        fn test_remove_missing_tag_is_noop() {
            let engine = TagEngine::new();
            let tag = engine.add(&exp_id(), &[], "production").unwrap();
            let remaining = engine.remove(vec![tag.clone()], "nlp").unwrap();
            assert_eq!(remaining, vec![tag]);

            let still_empty = engine.remove(vec![], "nlp").unwrap();
            assert!(still_empty.is_empty());
        }
    }
}
