//! Tracker service
//!
//! Coordinates the repositories and the domain engines for one
//! request-scoped operation at a time: load the experiment (and its
//! runs/tags as needed), run the pure computation, commit the writes.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::experiment::{
    Experiment, ExperimentId, ExperimentQuery, ExperimentRepository, ExperimentStats,
    ExperimentStatus, MetricKind, MetricSummary,
};
use crate::domain::export::{ExportEngine, ExportFormat, ExportJob, ExportJobRepository};
use crate::domain::run::{Hyperparameters, Run, RunBuilder, RunId, RunRepository, RunStatus};
use crate::domain::tag::{Tag, TagEngine, TagPolicy, TagRepository};
use crate::domain::DomainError;

// ============================================================================
// Request Types
// ============================================================================

/// Request to create a new experiment
#[derive(Debug, Clone, Default)]
pub struct CreateExperimentRequest {
    pub name: String,
    pub description: String,
    pub status: Option<ExperimentStatus>,
}

/// Request to log a new run
#[derive(Debug, Clone, Default)]
pub struct CreateRunRequest {
    pub name: String,
    pub hyperparameters: Hyperparameters,
    pub accuracy: Option<f64>,
    pub loss: Option<f64>,
    pub latency_ms: Option<f64>,
    pub notes: String,
    pub status: Option<RunStatus>,
}

// ============================================================================
// Tracker Service
// ============================================================================

/// Service exposing the tracking core's operations end to end
#[derive(Debug)]
pub struct TrackerService<E, R, T, X>
where
    E: ExperimentRepository,
    R: RunRepository,
    T: TagRepository,
    X: ExportJobRepository,
{
    experiments: Arc<E>,
    runs: Arc<R>,
    tags: Arc<T>,
    export_jobs: Arc<X>,
    tag_engine: TagEngine,
    export_engine: ExportEngine,
}

impl<E, R, T, X> TrackerService<E, R, T, X>
where
    E: ExperimentRepository,
    R: RunRepository,
    T: TagRepository,
    X: ExportJobRepository,
{
    /// Create a service with the default tag policy
    pub fn new(experiments: Arc<E>, runs: Arc<R>, tags: Arc<T>, export_jobs: Arc<X>) -> Self {
        Self::with_tag_policy(experiments, runs, tags, export_jobs, TagPolicy::default())
    }

    /// Create a service with an explicit tag policy
    pub fn with_tag_policy(
        experiments: Arc<E>,
        runs: Arc<R>,
        tags: Arc<T>,
        export_jobs: Arc<X>,
        policy: TagPolicy,
    ) -> Self {
        Self {
            experiments,
            runs,
            tags,
            export_jobs,
            tag_engine: TagEngine::with_policy(policy),
            export_engine: ExportEngine::new(),
        }
    }

    // ========================================================================
    // Experiments
    // ========================================================================

    /// Create a new experiment
    pub async fn create_experiment(
        &self,
        request: CreateExperimentRequest,
    ) -> Result<Experiment, DomainError> {
        let mut experiment = Experiment::new(request.name)?;

        if !request.description.is_empty() {
            experiment = experiment.with_description(request.description)?;
        }

        if let Some(status) = request.status {
            experiment = experiment.with_status(status);
        }

        let created = self.experiments.create(experiment).await?;
        info!(experiment_id = %created.id(), "Experiment created");
        Ok(created)
    }

    /// Get an experiment by ID
    pub async fn get_experiment(&self, id: &ExperimentId) -> Result<Experiment, DomainError> {
        self.require_experiment(id).await
    }

    /// List experiments with optional filters
    pub async fn list_experiments(
        &self,
        query: &ExperimentQuery,
    ) -> Result<Vec<Experiment>, DomainError> {
        self.experiments.list(query).await
    }

    /// Delete an experiment, cascading to its runs and tags
    pub async fn delete_experiment(&self, id: &ExperimentId) -> Result<(), DomainError> {
        if !self.experiments.delete(id).await? {
            return Err(DomainError::not_found("Experiment", id.as_str()));
        }

        let runs_removed = self.runs.delete_by_experiment(id).await?;
        let tags_removed = self.tags.delete_by_experiment(id).await?;
        info!(
            experiment_id = %id,
            runs_removed,
            tags_removed,
            "Experiment deleted"
        );
        Ok(())
    }

    // ========================================================================
    // Runs
    // ========================================================================

    /// Log a new run for an experiment
    pub async fn log_run(
        &self,
        experiment_id: &ExperimentId,
        request: CreateRunRequest,
    ) -> Result<Run, DomainError> {
        self.require_experiment(experiment_id).await?;

        let mut builder = RunBuilder::new(experiment_id.clone())
            .name(request.name)
            .hyperparameters(request.hyperparameters)
            .notes(request.notes);

        if let Some(a) = request.accuracy {
            builder = builder.accuracy(a);
        }
        if let Some(l) = request.loss {
            builder = builder.loss(l);
        }
        if let Some(ms) = request.latency_ms {
            builder = builder.latency_ms(ms);
        }
        if let Some(status) = request.status {
            builder = builder.status(status);
        }

        let run = builder.build()?;
        let created = self.runs.create(run).await?;
        debug!(experiment_id = %experiment_id, run_id = %created.id(), "Run logged");
        Ok(created)
    }

    /// Get a run, scoped to its owning experiment
    pub async fn get_run(
        &self,
        experiment_id: &ExperimentId,
        run_id: &RunId,
    ) -> Result<Run, DomainError> {
        self.runs
            .get(experiment_id, run_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Run", run_id.as_str()))
    }

    /// List all runs for an experiment in creation order
    pub async fn list_runs(&self, experiment_id: &ExperimentId) -> Result<Vec<Run>, DomainError> {
        self.require_experiment(experiment_id).await?;
        self.runs.list_by_experiment(experiment_id).await
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Compute derived statistics for an experiment's runs
    pub async fn experiment_stats(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<ExperimentStats, DomainError> {
        self.require_experiment(experiment_id).await?;
        let runs = self.runs.list_by_experiment(experiment_id).await?;
        Ok(ExperimentStats::from_runs(&runs))
    }

    /// Summarize a single metric across an experiment's runs
    pub async fn metric_summary(
        &self,
        experiment_id: &ExperimentId,
        metric: MetricKind,
    ) -> Result<Option<MetricSummary>, DomainError> {
        self.require_experiment(experiment_id).await?;
        let runs = self.runs.list_by_experiment(experiment_id).await?;
        Ok(MetricSummary::from_runs(&runs, metric))
    }

    // ========================================================================
    // Tags
    // ========================================================================

    /// Add a tag to an experiment
    pub async fn add_tag(
        &self,
        experiment_id: &ExperimentId,
        name: &str,
    ) -> Result<Tag, DomainError> {
        self.require_experiment(experiment_id).await?;

        let existing = self.tags.list_by_experiment(experiment_id).await?;
        let tag = self.tag_engine.add(experiment_id, &existing, name)?;
        let created = self.tags.create(tag).await?;
        debug!(experiment_id = %experiment_id, tag = %created.name(), "Tag added");
        Ok(created)
    }

    /// List an experiment's tags in creation order
    pub async fn list_tags(&self, experiment_id: &ExperimentId) -> Result<Vec<Tag>, DomainError> {
        self.require_experiment(experiment_id).await?;
        self.tags.list_by_experiment(experiment_id).await
    }

    /// Remove a tag by name; removing an absent tag is a no-op
    pub async fn remove_tag(
        &self,
        experiment_id: &ExperimentId,
        name: &str,
    ) -> Result<(), DomainError> {
        self.require_experiment(experiment_id).await?;

        let normalized = self.tag_engine.normalize(name)?;
        let removed = self.tags.remove_by_name(experiment_id, &normalized).await?;
        debug!(experiment_id = %experiment_id, tag = %normalized, removed, "Tag removal");
        Ok(())
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Export an experiment and record the result as an immutable job
    pub async fn export_experiment(
        &self,
        experiment_id: &ExperimentId,
        format: ExportFormat,
    ) -> Result<ExportJob, DomainError> {
        let experiment = self.require_experiment(experiment_id).await?;
        let runs = self.runs.list_by_experiment(experiment_id).await?;

        let job = self.export_engine.export(&experiment, &runs, format)?;
        let recorded = self.export_jobs.record(job).await?;
        info!(
            experiment_id = %experiment_id,
            format = %format,
            job_id = %recorded.id(),
            "Experiment exported"
        );
        Ok(recorded)
    }

    /// List the export jobs recorded for an experiment
    pub async fn list_export_jobs(
        &self,
        experiment_id: &ExperimentId,
    ) -> Result<Vec<ExportJob>, DomainError> {
        self.require_experiment(experiment_id).await?;
        self.export_jobs.list_by_experiment(experiment_id).await
    }

    // Private helpers

    async fn require_experiment(&self, id: &ExperimentId) -> Result<Experiment, DomainError> {
        self.experiments
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Experiment", id.as_str()))
    }
}
