//! Experiment repository trait and query types

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Experiment, ExperimentId, ExperimentStatus};
use crate::domain::DomainError;

/// Query parameters for listing experiments
#[derive(Debug, Clone, Default)]
pub struct ExperimentQuery {
    /// Filter by status
    pub status: Option<ExperimentStatus>,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Number of results to skip
    pub offset: Option<usize>,
}

impl ExperimentQuery {
    /// Create a new query with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by status
    pub fn with_status(mut self, status: ExperimentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set maximum number of results
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set number of results to skip
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Repository trait for experiments
///
/// The store behind this trait owns transactional atomicity; the domain
/// engines only compute over values loaded through it.
#[async_trait]
pub trait ExperimentRepository: Send + Sync + Debug {
    /// Persist a new experiment
    async fn create(&self, experiment: Experiment) -> Result<Experiment, DomainError>;

    /// Get an experiment by ID
    async fn get(&self, id: &ExperimentId) -> Result<Option<Experiment>, DomainError>;

    /// Update an existing experiment
    async fn update(&self, experiment: Experiment) -> Result<Experiment, DomainError>;

    /// Delete an experiment by ID, returning whether it existed
    async fn delete(&self, id: &ExperimentId) -> Result<bool, DomainError>;

    /// List experiments with optional filters, newest first
    async fn list(&self, query: &ExperimentQuery) -> Result<Vec<Experiment>, DomainError>;

    /// Check if an experiment exists
    async fn exists(&self, id: &ExperimentId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
