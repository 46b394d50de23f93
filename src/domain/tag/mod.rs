//! Tag domain module
//!
//! Tags are short normalized labels attached to experiments for grouping
//! and filtering. The engine enforces normalization, length bounds, and
//! per-experiment uniqueness.

pub mod csv_column;

mod engine;
mod entity;
mod repository;

pub use engine::{
    normalize_tag_name, TagEngine, TagPolicy, TagValidationError, MAX_TAG_NAME_LENGTH,
};
pub use entity::{Tag, TagId};
pub use repository::TagRepository;
