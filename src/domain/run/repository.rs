//! Run repository trait
//!
//! Runs are immutable once created, so there is no update operation.

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Run, RunId};
use crate::domain::experiment::ExperimentId;
use crate::domain::DomainError;

/// Repository trait for runs
#[async_trait]
pub trait RunRepository: Send + Sync + Debug {
    /// Persist a new run
    async fn create(&self, run: Run) -> Result<Run, DomainError>;

    /// Get a run by ID, scoped to its owning experiment
    async fn get(
        &self,
        experiment_id: &ExperimentId,
        id: &RunId,
    ) -> Result<Option<Run>, DomainError>;

    /// List all runs for an experiment in creation order
    async fn list_by_experiment(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<Vec<Run>, DomainError>;

    /// Delete all runs for an experiment, returning how many were removed
    async fn delete_by_experiment(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<usize, DomainError>;
}
