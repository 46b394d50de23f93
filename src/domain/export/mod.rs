//! Export domain module
//!
//! Serializes an experiment plus its runs into JSON or CSV, with
//! format-equivalent field coverage, and records each export as an
//! immutable job.

mod engine;
mod job;
mod repository;

pub use engine::{ExportDocument, ExportEngine, ExportedExperiment, ExportedRun};
pub use job::{ExportFormat, ExportJob, ExportJobId};
pub use repository::ExportJobRepository;
