//! Export engine: serializes one experiment and its runs
//!
//! Both formats cover every run in stored creation order, with no
//! filtering or pagination. Output is deterministic for a given input,
//! so re-exporting unchanged data reproduces the payload byte for byte.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::job::{ExportFormat, ExportJob};
use crate::domain::experiment::Experiment;
use crate::domain::run::{Hyperparameters, Run};
use crate::domain::DomainError;

/// Columns of the CSV export, in order
const CSV_COLUMNS: [&str; 6] = ["id", "name", "accuracy", "loss", "latency_ms", "status"];

// ============================================================================
// Payload shapes
// ============================================================================

/// Experiment fields covered by the JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedExperiment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
}

/// Run fields covered by the JSON export
///
/// Hyperparameters appear decoded as a structured mapping, not as their
/// stored string form. Missing metrics serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedRun {
    pub id: String,
    pub name: String,
    pub hyperparameters: Hyperparameters,
    pub accuracy: Option<f64>,
    pub loss: Option<f64>,
    pub latency_ms: Option<f64>,
    pub status: String,
}

/// Top-level shape of the JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub experiment: ExportedExperiment,
    pub runs: Vec<ExportedRun>,
}

impl ExportDocument {
    fn build(experiment: &Experiment, runs: &[Run]) -> Self {
        Self {
            experiment: ExportedExperiment {
                id: experiment.id().to_string(),
                name: experiment.name().to_string(),
                description: experiment.description().to_string(),
                status: experiment.status().to_string(),
            },
            runs: runs
                .iter()
                .map(|run| ExportedRun {
                    id: run.id().to_string(),
                    name: run.name().to_string(),
                    hyperparameters: run.hyperparameters().clone(),
                    accuracy: run.accuracy(),
                    loss: run.loss(),
                    latency_ms: run.latency_ms(),
                    status: run.status().to_string(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// ExportEngine
// ============================================================================

/// Serializes experiments into the supported export formats
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportEngine;

impl ExportEngine {
    pub fn new() -> Self {
        Self
    }

    /// Export the experiment and its runs, recording the result as a job
    ///
    /// The caller has already loaded the experiment (a missing one is its
    /// `NotFound` to signal). A declared-but-unimplemented format fails
    /// with `Unsupported`.
    pub fn export(
        &self,
        experiment: &Experiment,
        runs: &[Run],
        format: ExportFormat,
    ) -> Result<ExportJob, DomainError> {
        let payload = match format {
            ExportFormat::Json => self.render_json(experiment, runs)?,
            ExportFormat::Csv => self.render_csv(runs)?,
            ExportFormat::Parquet => {
                return Err(DomainError::unsupported(format.as_str()));
            }
        };

        debug!(
            experiment_id = %experiment.id(),
            format = %format,
            payload_bytes = payload.len(),
            "Rendered export payload"
        );

        Ok(ExportJob::new(experiment.id().clone(), format, payload))
    }

    /// Render the JSON payload (pretty-printed, 2-space indent)
    pub fn render_json(
        &self,
        experiment: &Experiment,
        runs: &[Run],
    ) -> Result<String, DomainError> {
        let document = ExportDocument::build(experiment, runs);
        serde_json::to_string_pretty(&document)
            .map_err(|e| DomainError::internal(format!("JSON export failed: {e}")))
    }

    /// Render the CSV payload
    ///
    /// Header row `id,name,accuracy,loss,latency_ms,status`, one row per
    /// run. Missing optional metrics render as empty fields.
    pub fn render_csv(&self, runs: &[Run]) -> Result<String, DomainError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(CSV_COLUMNS)
            .map_err(|e| DomainError::internal(format!("CSV export failed: {e}")))?;

        for run in runs {
            writer
                .write_record([
                    run.id().as_str(),
                    run.name(),
                    &optional_field(run.accuracy()),
                    &optional_field(run.loss()),
                    &optional_field(run.latency_ms()),
                    run.status().as_str(),
                ])
                .map_err(|e| DomainError::internal(format!("CSV export failed: {e}")))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| DomainError::internal(format!("CSV export failed: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| DomainError::internal(format!("CSV export failed: {e}")))
    }
}

/// Empty field for a missing value, never the literal "None" or "null"
fn optional_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
