//! Tag domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::experiment::ExperimentId;

/// Opaque unique identifier for a tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(String);

impl TagId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new unique ID
    pub fn generate() -> Self {
        Self(format!("tag-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TagId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TagId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short normalized label attached to an experiment
///
/// The name is always stored in normalized form (trimmed, lower-cased);
/// construction goes through the tag engine, which enforces that. The
/// pair (experiment id, name) is unique per experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    experiment_id: ExperimentId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Tag {
    /// Construct a tag from an already-normalized name
    pub(crate) fn new(experiment_id: ExperimentId, normalized_name: impl Into<String>) -> Self {
        Self {
            id: TagId::generate(),
            experiment_id,
            name: normalized_name.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &TagId {
        &self.id
    }

    pub fn experiment_id(&self) -> &ExperimentId {
        &self.experiment_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
