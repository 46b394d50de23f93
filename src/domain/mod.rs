//! Core domain types and engines
//!
//! Pure, synchronous computations over values already loaded into
//! memory: the entity model, the aggregation engine, the tag engine, and
//! the export engine. None of them perform I/O; the repository traits
//! are the seams a persistence layer implements.

pub mod error;
pub mod experiment;
pub mod export;
pub mod run;
pub mod tag;

pub use error::DomainError;
