//! In-memory implementation of the run repository
//!
//! Runs are kept in a vector so listing preserves creation order exactly,
//! without relying on timestamp ties.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::experiment::ExperimentId;
use crate::domain::run::{Run, RunId, RunRepository};
use crate::domain::DomainError;

/// In-memory run repository
#[derive(Debug, Default)]
pub struct InMemoryRunRepository {
    runs: RwLock<Vec<Run>>,
}

impl InMemoryRunRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RunRepository for InMemoryRunRepository {
    async fn create(&self, run: Run) -> Result<Run, DomainError> {
        let mut runs = self
            .runs
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {e}")))?;

        runs.push(run.clone());
        Ok(run)
    }

    async fn get(
        &self,
        experiment_id: &ExperimentId,
        id: &RunId,
    ) -> Result<Option<Run>, DomainError> {
        let runs = self
            .runs
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {e}")))?;

        Ok(runs
            .iter()
            .find(|r| r.id() == id && r.experiment_id() == experiment_id)
            .cloned())
    }

    async fn list_by_experiment(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<Vec<Run>, DomainError> {
        let runs = self
            .runs
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {e}")))?;

        Ok(runs
            .iter()
            .filter(|r| r.experiment_id() == experiment_id)
            .cloned()
            .collect())
    }

    async fn delete_by_experiment(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<usize, DomainError> {
        let mut runs = self
            .runs
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {e}")))?;

        let before = runs.len();
        runs.retain(|r| r.experiment_id() != experiment_id);
        Ok(before - runs.len())
    }
}
