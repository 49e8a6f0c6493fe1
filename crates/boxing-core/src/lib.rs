//! Boxing Core - domain model, validation and the shared facilities
//!
//! This crate provides:
//! - The `Boxer` record and its weight classes
//! - Field validation applied before anything reaches storage
//! - The canonical error facility (`ExError`, `ExErrorKind`) and the
//!   domain error taxonomy (`BoxingError`)
//! - The structured logging facility and its lifecycle macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

pub use boxing_core_types::schema;

// Re-export commonly used types
pub use errors::{BoxingError, ExError, ExErrorKind, Result};
pub use model::{Boxer, WeightClass};
