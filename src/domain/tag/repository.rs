//! Tag repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Tag;
use crate::domain::experiment::ExperimentId;
use crate::domain::DomainError;

/// Repository trait for tags
///
/// Implementations must enforce the (experiment id, normalized name)
/// uniqueness atomically — e.g. via a unique constraint or a single
/// writer per experiment — so that two concurrent adds of the same name
/// cannot both commit.
#[async_trait]
pub trait TagRepository: Send + Sync + Debug {
    /// Persist a new tag; fails with `Conflict` on a duplicate name
    async fn create(&self, tag: Tag) -> Result<Tag, DomainError>;

    /// List all tags for an experiment in creation order
    async fn list_by_experiment(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<Vec<Tag>, DomainError>;

    /// Remove the tag with the given normalized name, if present
    ///
    /// Returns whether a tag was removed; removing an absent tag is not
    /// an error.
    async fn remove_by_name(
        &self,
        experiment_id: &ExperimentId,
        normalized_name: &str,
    ) -> Result<bool, DomainError>;

    /// Delete all tags for an experiment, returning how many were removed
    async fn delete_by_experiment(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<usize, DomainError>;
}
