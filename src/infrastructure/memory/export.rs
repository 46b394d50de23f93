//! In-memory implementation of the export job repository

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::experiment::ExperimentId;
use crate::domain::export::{ExportJob, ExportJobId, ExportJobRepository};
use crate::domain::DomainError;

/// In-memory export job repository (append-only)
#[derive(Debug, Default)]
pub struct InMemoryExportJobRepository {
    jobs: RwLock<Vec<ExportJob>>,
}

impl InMemoryExportJobRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExportJobRepository for InMemoryExportJobRepository {
    async fn record(&self, job: ExportJob) -> Result<ExportJob, DomainError> {
        let mut jobs = self
            .jobs
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {e}")))?;

        jobs.push(job.clone());
        Ok(job)
    }

    async fn get(&self, id: &ExportJobId) -> Result<Option<ExportJob>, DomainError> {
        let jobs = self
            .jobs
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {e}")))?;

        Ok(jobs.iter().find(|j| j.id() == id).cloned())
    }

    async fn list_by_experiment(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<Vec<ExportJob>, DomainError> {
        let jobs = self
            .jobs
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {e}")))?;

        Ok(jobs
            .iter()
            .filter(|j| j.experiment_id() == experiment_id)
            .cloned()
            .collect())
    }
}
