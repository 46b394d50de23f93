//! Export job repository trait
//!
//! Export jobs are append-only audit records; there is no update or
//! delete operation.

use async_trait::async_trait;
use std::fmt::Debug;

use super::job::{ExportJob, ExportJobId};
use crate::domain::experiment::ExperimentId;
use crate::domain::DomainError;

/// Repository trait for export jobs
#[async_trait]
pub trait ExportJobRepository: Send + Sync + Debug {
    /// Append a new export job record
    async fn record(&self, job: ExportJob) -> Result<ExportJob, DomainError>;

    /// Get a job by ID
    async fn get(&self, id: &ExportJobId) -> Result<Option<ExportJob>, DomainError>;

    /// List all jobs for an experiment in creation order
    async fn list_by_experiment(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<Vec<ExportJob>, DomainError>;
}
