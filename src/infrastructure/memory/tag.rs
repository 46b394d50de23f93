//! In-memory implementation of the tag repository
//!
//! The (experiment id, normalized name) uniqueness check happens under
//! the same write lock as the insert, so two concurrent adds of the same
//! name cannot both commit. This is the single-writer discipline the
//! domain contract requires of any store.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::experiment::ExperimentId;
use crate::domain::tag::{Tag, TagRepository};
use crate::domain::DomainError;

/// In-memory tag repository
#[derive(Debug, Default)]
pub struct InMemoryTagRepository {
    tags: RwLock<Vec<Tag>>,
}

impl InMemoryTagRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn create(&self, tag: Tag) -> Result<Tag, DomainError> {
        let mut tags = self
            .tags
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {e}")))?;

        // Re-check under the write lock; the engine's check-then-insert
        // is not atomic across callers.
        if tags
            .iter()
            .any(|t| t.experiment_id() == tag.experiment_id() && t.name() == tag.name())
        {
            return Err(DomainError::conflict(format!(
                "tag '{}' already exists for experiment '{}'",
                tag.name(),
                tag.experiment_id()
            )));
        }

        tags.push(tag.clone());
        Ok(tag)
    }

    async fn list_by_experiment(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<Vec<Tag>, DomainError> {
        let tags = self
            .tags
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {e}")))?;

        Ok(tags
            .iter()
            .filter(|t| t.experiment_id() == experiment_id)
            .cloned()
            .collect())
    }

    async fn remove_by_name(
        &self,
        experiment_id: &ExperimentId,
        normalized_name: &str,
    ) -> Result<bool, DomainError> {
        let mut tags = self
            .tags
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {e}")))?;

        let before = tags.len();
        tags.retain(|t| !(t.experiment_id() == experiment_id && t.name() == normalized_name));
        Ok(tags.len() < before)
    }

    async fn delete_by_experiment(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<usize, DomainError> {
        let mut tags = self
            .tags
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {e}")))?;

        let before = tags.len();
        tags.retain(|t| t.experiment_id() != experiment_id);
        Ok(before - tags.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tag::TagEngine;

    fn exp_id() -> ExperimentId {
        ExperimentId::from("exp-1")
    }

    #[tokio::test]
    async fn test_create_and_list_in_creation_order() {
        let repo = InMemoryTagRepository::new();
        let engine = TagEngine::new();

        for name in ["nlp", "production", "baseline"] {
            let tag = engine.add(&exp_id(), &[], name).unwrap();
            repo.create(tag).await.unwrap();
        }

        let tags = repo.list_by_experiment(&exp_id()).await.unwrap();
        let names: Vec<&str> = tags.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["nlp", "production", "baseline"]);
    }

    #[tokio::test]
    async fn test_store_level_uniqueness() {
        let repo = InMemoryTagRepository::new();
        let engine = TagEngine::new();

        // Both tags pass the engine check against an empty set; the
        // store still rejects the second insert.
        let first = engine.add(&exp_id(), &[], "nlp").unwrap();
        let second = engine.add(&exp_id(), &[], "nlp").unwrap();

        repo.create(first).await.unwrap();
        let err = repo.create(second).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_remove_by_name() {
        let repo = InMemoryTagRepository::new();
        let engine = TagEngine::new();
        repo.create(engine.add(&exp_id(), &[], "nlp").unwrap())
            .await
            .unwrap();

        assert!(repo.remove_by_name(&exp_id(), "nlp").await.unwrap());
        assert!(!repo.remove_by_name(&exp_id(), "nlp").await.unwrap());
        assert!(repo.list_by_experiment(&exp_id()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_same_name_across_experiments() {
        let repo = InMemoryTagRepository::new();
        let engine = TagEngine::new();
        let other = ExperimentId::from("exp-2");

        repo.create(engine.add(&exp_id(), &[], "nlp").unwrap())
            .await
            .unwrap();
        repo.create(engine.add(&other, &[], "nlp").unwrap())
            .await
            .unwrap();

        assert_eq!(repo.list_by_experiment(&exp_id()).await.unwrap().len(), 1);
        assert_eq!(repo.list_by_experiment(&other).await.unwrap().len(), 1);
    }
}
