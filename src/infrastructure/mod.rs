//! Infrastructure layer
//!
//! Concrete implementations of the domain's repository traits plus the
//! service that wires them to the engines.

pub mod memory;
pub mod services;
