//! ML experiment tracking core
//!
//! A storage-agnostic core for tracking machine learning experiments:
//! - Experiments with lifecycle status and timestamps
//! - Immutable runs carrying metrics and hyperparameters
//! - Aggregate statistics derived from run metrics
//! - Normalized, per-experiment-unique tags
//! - JSON and CSV export with an audit trail of export jobs

pub mod domain;
pub mod infrastructure;

pub use domain::error::DomainError;
pub use domain::experiment::{
    Experiment, ExperimentId, ExperimentQuery, ExperimentRepository, ExperimentStats,
    ExperimentStatus, MetricKind, MetricSummary,
};
pub use domain::export::{
    ExportDocument, ExportEngine, ExportFormat, ExportJob, ExportJobId, ExportJobRepository,
};
pub use domain::run::{Hyperparameters, Run, RunBuilder, RunId, RunRepository, RunStatus};
pub use domain::tag::{Tag, TagEngine, TagId, TagPolicy, TagRepository};
pub use infrastructure::memory::{
    InMemoryExperimentRepository, InMemoryExportJobRepository, InMemoryRunRepository,
    InMemoryTagRepository,
};
pub use infrastructure::services::{CreateExperimentRequest, CreateRunRequest, TrackerService};
