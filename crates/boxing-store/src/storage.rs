//! Storage interface
//!
//! The repository talks to storage only through these two traits, so a
//! test can hand it a mock connection instead of a database. A connection
//! is scoped: it is released when dropped, and anything not committed by
//! then is discarded.

use crate::errors::Result;

/// A single cell of a result row or a statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of the cell; integer cells widen to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SqlValue::Integer(v) => Some(*v as f64),
            SqlValue::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

/// One result row, columns in select-list order
pub type Row = Vec<SqlValue>;

/// An open, scoped connection to storage
#[cfg_attr(test, mockall::automock)]
pub trait StorageConnection {
    /// Run a statement that returns no rows; yields the affected row count
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<usize>;

    /// Run a query and return its first row, if any
    fn query_one(&mut self, sql: &str, params: &[SqlValue]) -> Result<Option<Row>>;

    /// Run a query and return every row
    fn query_all(&mut self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>>;

    /// Make the work done on this connection durable
    fn commit(&mut self) -> Result<()>;
}

/// Hands out a fresh connection per operation
#[cfg_attr(test, mockall::automock(type Conn = MockStorageConnection;))]
pub trait ConnectionProvider {
    type Conn: StorageConnection;

    fn connect(&self) -> Result<Self::Conn>;
}
