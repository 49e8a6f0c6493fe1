//! Repository layer mapping boxer records to storage rows

pub mod boxer_repo;

pub use boxer_repo::{boxer_from_row, BoxerRepo};
