//! Rules applied to boxer input before it reaches storage

pub mod validation;

pub use validation::validate_boxer_fields;
