//! In-memory repository implementations
//!
//! These back the service in tests and in embedded use; a persistent
//! store implements the same domain traits.

pub mod experiment;
pub mod export;
pub mod run;
pub mod tag;

pub use experiment::InMemoryExperimentRepository;
pub use export::InMemoryExportJobRepository;
pub use run::InMemoryRunRepository;
pub use tag::InMemoryTagRepository;
