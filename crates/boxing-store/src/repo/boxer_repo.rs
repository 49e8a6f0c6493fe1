//! Boxer repository
//!
//! Validates input, runs one parameterized statement per lookup and maps
//! rows to `Boxer` records.
//!
//! ## Logging Ownership
//!
//! Public operations own lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The storage layer below uses only `tracing::debug!()`.

use std::time::Instant;

use boxing_core::errors::{BoxingError, ExError};
use boxing_core::model::Boxer;
use boxing_core::rules::validate_boxer_fields;
use boxing_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::{is_unique_violation, Result};
use crate::storage::{ConnectionProvider, SqlValue, StorageConnection};

const SELECT_BOXER: &str = "SELECT id, name, weight, height, reach, age FROM boxers";

const INSERT_BOXER: &str =
    "INSERT INTO boxers (name, weight, height, reach, age) VALUES (?1, ?2, ?3, ?4, ?5)";

const BOXER_COLUMNS: usize = 6;

/// Repository for Boxer records over an injected connection provider
pub struct BoxerRepo<P> {
    provider: P,
}

impl<P: ConnectionProvider> BoxerRepo<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Create a new boxer
    ///
    /// ## Errors
    ///
    /// - `InvalidInput`: a field failed validation (storage is not touched)
    /// - `DuplicateEntity`: a boxer with this name already exists
    /// - `Persistence`: database error
    pub fn create_boxer(
        &self,
        name: &str,
        weight: f64,
        height: f64,
        reach: f64,
        age: i64,
    ) -> Result<()> {
        log_op_start!("create_boxer", boxer_name = name);
        let start = Instant::now();

        self.create_boxer_impl(name, weight, height, reach, age)
            .map_err(|e| {
                log_op_error!(
                    "create_boxer",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    boxer_name = name
                );
                e
            })?;

        log_op_end!(
            "create_boxer",
            duration_ms = start.elapsed().as_millis() as u64,
            boxer_name = name
        );
        Ok(())
    }

    fn create_boxer_impl(
        &self,
        name: &str,
        weight: f64,
        height: f64,
        reach: f64,
        age: i64,
    ) -> Result<()> {
        validate_boxer_fields(name, weight, height, reach, age)
            .map_err(|e| ExError::from(e).with_op("create_boxer"))?;

        let mut conn = self.provider.connect()?;

        let existing = conn.query_one("SELECT id FROM boxers WHERE name = ?1", &[name.into()])?;
        if existing.is_some() {
            return Err(duplicate(name));
        }

        conn.execute(
            INSERT_BOXER,
            &[
                name.into(),
                weight.into(),
                height.into(),
                reach.into(),
                age.into(),
            ],
        )
        .map_err(|e| {
            // Another writer may have taken the name since the lookup above
            if is_unique_violation(&e) {
                duplicate(name).with_source(e)
            } else {
                e
            }
        })?;
        conn.commit()?;

        tracing::debug!(boxer_name = name, "boxer row inserted");
        Ok(())
    }

    /// Get a boxer by storage id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no boxer has this id
    /// - `Persistence`: database error or malformed row
    pub fn get_boxer_by_id(&self, boxer_id: i64) -> Result<Boxer> {
        log_op_start!("get_boxer_by_id", boxer_id = boxer_id);
        let start = Instant::now();

        let boxer = self
            .fetch_boxer("WHERE id = ?1", boxer_id.into())
            .and_then(|found| {
                found.ok_or_else(|| {
                    ExError::from(BoxingError::BoxerNotFound { boxer_id }).with_op("get_boxer_by_id")
                })
            })
            .map_err(|e| {
                log_op_error!(
                    "get_boxer_by_id",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    boxer_id = boxer_id
                );
                e
            })?;

        log_op_end!(
            "get_boxer_by_id",
            duration_ms = start.elapsed().as_millis() as u64,
            boxer_id = boxer_id
        );
        Ok(boxer)
    }

    /// Get a boxer by its unique name
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no boxer has this name
    /// - `Persistence`: database error or malformed row
    pub fn get_boxer_by_name(&self, name: &str) -> Result<Boxer> {
        log_op_start!("get_boxer_by_name", boxer_name = name);
        let start = Instant::now();

        let boxer = self
            .fetch_boxer("WHERE name = ?1", name.into())
            .and_then(|found| {
                found.ok_or_else(|| {
                    ExError::from(BoxingError::BoxerNameNotFound {
                        name: name.to_string(),
                    })
                    .with_op("get_boxer_by_name")
                })
            })
            .map_err(|e| {
                log_op_error!(
                    "get_boxer_by_name",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    boxer_name = name
                );
                e
            })?;

        log_op_end!(
            "get_boxer_by_name",
            duration_ms = start.elapsed().as_millis() as u64,
            boxer_name = name
        );
        Ok(boxer)
    }

    /// List every boxer in id order
    ///
    /// ## Errors
    ///
    /// - `Persistence`: database error or malformed row
    pub fn list_boxers(&self) -> Result<Vec<Boxer>> {
        log_op_start!("list_boxers");
        let start = Instant::now();

        let boxers = self.list_boxers_impl().map_err(|e| {
            log_op_error!(
                "list_boxers",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "list_boxers",
            duration_ms = start.elapsed().as_millis() as u64,
            count = boxers.len() as u64
        );
        Ok(boxers)
    }

    fn list_boxers_impl(&self) -> Result<Vec<Boxer>> {
        let mut conn = self.provider.connect()?;
        let rows = conn.query_all(&format!("{} ORDER BY id", SELECT_BOXER), &[])?;
        rows.iter()
            .map(|row| boxer_from_row(row).map_err(ExError::from))
            .collect()
    }

    /// Run the shared select with one filter and decode the first row
    fn fetch_boxer(&self, filter: &str, key: SqlValue) -> Result<Option<Boxer>> {
        let mut conn = self.provider.connect()?;
        let row = conn.query_one(&format!("{} {}", SELECT_BOXER, filter), &[key])?;
        row.map(|row| boxer_from_row(&row).map_err(ExError::from))
            .transpose()
    }
}

fn duplicate(name: &str) -> ExError {
    ExError::from(BoxingError::DuplicateBoxer {
        name: name.to_string(),
    })
    .with_op("create_boxer")
}

/// Build a Boxer from a row in (id, name, weight, height, reach, age) order
pub fn boxer_from_row(row: &[SqlValue]) -> std::result::Result<Boxer, BoxingError> {
    if row.len() != BOXER_COLUMNS {
        return Err(BoxingError::MalformedRow {
            reason: format!("expected {} columns, got {}", BOXER_COLUMNS, row.len()),
        });
    }

    let malformed = |column: &str| BoxingError::MalformedRow {
        reason: format!("unexpected value in column '{}': {:?}", column, row),
    };

    Ok(Boxer {
        id: row[0].as_i64().ok_or_else(|| malformed("id"))?,
        name: row[1].as_str().ok_or_else(|| malformed("name"))?.to_string(),
        weight: row[2].as_f64().ok_or_else(|| malformed("weight"))?,
        height: row[3].as_f64().ok_or_else(|| malformed("height"))?,
        reach: row[4].as_f64().ok_or_else(|| malformed("reach"))?,
        age: row[5].as_i64().ok_or_else(|| malformed("age"))?,
    })
}
