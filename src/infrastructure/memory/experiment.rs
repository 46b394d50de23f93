//! In-memory implementation of the experiment repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::experiment::{Experiment, ExperimentId, ExperimentQuery, ExperimentRepository};
use crate::domain::DomainError;

/// In-memory experiment repository
#[derive(Debug, Default)]
pub struct InMemoryExperimentRepository {
    experiments: RwLock<HashMap<String, Experiment>>,
}

impl InMemoryExperimentRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with experiments
    pub fn with_experiments(experiments: Vec<Experiment>) -> Self {
        let map: HashMap<String, Experiment> = experiments
            .into_iter()
            .map(|e| (e.id().as_str().to_string(), e))
            .collect();

        Self {
            experiments: RwLock::new(map),
        }
    }
}

#[async_trait]
impl ExperimentRepository for InMemoryExperimentRepository {
    async fn create(&self, experiment: Experiment) -> Result<Experiment, DomainError> {
        let id = experiment.id().as_str().to_string();
        let mut experiments = self
            .experiments
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {e}")))?;

        if experiments.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "experiment '{id}' already exists"
            )));
        }

        experiments.insert(id, experiment.clone());
        Ok(experiment)
    }

    async fn get(&self, id: &ExperimentId) -> Result<Option<Experiment>, DomainError> {
        let experiments = self
            .experiments
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {e}")))?;

        Ok(experiments.get(id.as_str()).cloned())
    }

    async fn update(&self, experiment: Experiment) -> Result<Experiment, DomainError> {
        let id = experiment.id().as_str().to_string();
        let mut experiments = self
            .experiments
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {e}")))?;

        if !experiments.contains_key(&id) {
            return Err(DomainError::not_found("Experiment", id));
        }

        experiments.insert(id, experiment.clone());
        Ok(experiment)
    }

    async fn delete(&self, id: &ExperimentId) -> Result<bool, DomainError> {
        let mut experiments = self
            .experiments
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {e}")))?;

        Ok(experiments.remove(id.as_str()).is_some())
    }

    async fn list(&self, query: &ExperimentQuery) -> Result<Vec<Experiment>, DomainError> {
        let experiments = self
            .experiments
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {e}")))?;

        let mut results: Vec<_> = experiments
            .values()
            .filter(|e| query.status.is_none_or(|status| e.status() == status))
            .cloned()
            .collect();

        results.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        let offset = query.offset.unwrap_or(0);
        let limit = query.limit.unwrap_or(usize::MAX);

        Ok(results.into_iter().skip(offset).take(limit).collect())
    }
}
