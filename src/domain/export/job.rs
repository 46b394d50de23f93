//! Export job record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::experiment::ExperimentId;
use crate::domain::DomainError;

// ============================================================================
// ExportFormat
// ============================================================================

/// Serialization format for an export
///
/// `Parquet` is declared but not implemented: requesting it is an
/// `Unsupported` failure, distinct from an unrecognized format string,
/// which fails at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Parquet,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }

    /// Whether the engine can actually render this format
    pub fn is_implemented(&self) -> bool {
        !matches!(self, Self::Parquet)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "parquet" => Ok(Self::Parquet),
            other => Err(DomainError::validation(
                "format",
                format!("unrecognized export format: '{other}'"),
            )),
        }
    }
}

// ============================================================================
// ExportJobId
// ============================================================================

/// Opaque unique identifier for an export job
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportJobId(String);

impl ExportJobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new unique ID
    pub fn generate() -> Self {
        Self(format!("export-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ExportJobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ExportJobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ExportJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ExportJob
// ============================================================================

/// Immutable audit record of one export
///
/// Captures which experiment was exported, in what format, the full
/// serialized payload, and when. Never mutated after creation; the type
/// exposes no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportJob {
    id: ExportJobId,
    experiment_id: ExperimentId,
    format: ExportFormat,
    payload: String,
    created_at: DateTime<Utc>,
}

impl ExportJob {
    /// Record a completed export
    pub fn new(
        experiment_id: ExperimentId,
        format: ExportFormat,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            id: ExportJobId::generate(),
            experiment_id,
            format,
            payload: payload.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &ExportJobId {
        &self.id
    }

    pub fn experiment_id(&self) -> &ExperimentId {
        &self.experiment_id
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
