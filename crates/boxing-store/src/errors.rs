//! Error handling for boxing-store
//!
//! Wraps boxing-core ExError with store-specific helpers

use boxing_core::errors::{ExError, ExErrorKind};
use rusqlite::{ffi, ErrorCode};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Field tag carried by `ConstraintViolation` errors from a UNIQUE index
pub const UNIQUE_CONSTRAINT: &str = "unique";

/// Create a database error from rusqlite::Error
///
/// SQLite constraint failures are classified as `ConstraintViolation`.
/// Failures of a UNIQUE index (e.g. on boxer names) are additionally tagged
/// with the `UNIQUE_CONSTRAINT` field.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let (kind, unique) = match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            (
                ExErrorKind::ConstraintViolation,
                failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE,
            )
        }
        _ => (ExErrorKind::Persistence, false),
    };
    let ex = ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string());
    if unique {
        ex.with_field(UNIQUE_CONSTRAINT)
    } else {
        ex
    }
}

/// Whether an error came from a UNIQUE index rejecting a row
pub fn is_unique_violation(err: &ExError) -> bool {
    err.kind() == ExErrorKind::ConstraintViolation && err.field() == Some(UNIQUE_CONSTRAINT)
}

/// Create a configuration error
pub fn config_error(key: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Configuration)
        .with_op("load_config")
        .with_field(key)
        .with_message(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_is_constraint_violation() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();

        let err = conn
            .execute("INSERT INTO t VALUES ('a')", [])
            .map_err(from_rusqlite)
            .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn test_check_violation_is_not_unique_violation() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (age INTEGER CHECK (age >= 18));")
            .unwrap();

        let err = conn
            .execute("INSERT INTO t VALUES (12)", [])
            .map_err(from_rusqlite)
            .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert!(!is_unique_violation(&err));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_sql_error_is_persistence() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();

        let err = conn
            .execute("INSERT INTO missing_table VALUES (1)", [])
            .map_err(from_rusqlite)
            .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("sqlite"));
    }
}
