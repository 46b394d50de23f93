//! Service layer

pub mod tracker_service;

pub use tracker_service::{CreateExperimentRequest, CreateRunRequest, TrackerService};
