//! Database connection management
//!
//! SQLite implementation of the storage interface. Every `connect()` opens a
//! new connection and begins a deferred transaction; `commit()` makes the
//! work durable, and dropping the connection rolls back whatever is left.

use std::path::{Path, PathBuf};
use std::time::Duration;

use boxing_core::errors::{ExError, ExErrorKind};
use rusqlite::types::{ToSqlOutput, Value, ValueRef};
use rusqlite::{params_from_iter, Connection, ToSql};

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, Result};
use crate::storage::{ConnectionProvider, Row, SqlValue, StorageConnection};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const BOXERS_SCHEMA: &str = include_str!("../sql/boxers.sql");

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection with the settings every operation expects
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(from_rusqlite)?;
    conn.busy_timeout(BUSY_TIMEOUT).map_err(from_rusqlite)?;
    Ok(())
}

/// Create the `boxers` table if it does not exist yet
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(BOXERS_SCHEMA).map_err(from_rusqlite)
}

/// Connection provider backed by a SQLite file
#[derive(Debug, Clone)]
pub struct SqliteProvider {
    path: PathBuf,
}

impl SqliteProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.db_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the database once and make sure the schema is in place
    pub fn initialize(&self) -> Result<()> {
        let conn = open(&self.path)?;
        configure(&conn)?;
        ensure_schema(&conn)?;
        tracing::debug!(db_path = %self.path.display(), "boxers schema ready");
        Ok(())
    }
}

impl ConnectionProvider for SqliteProvider {
    type Conn = SqliteConnection;

    fn connect(&self) -> Result<SqliteConnection> {
        let conn = open(&self.path)?;
        configure(&conn)?;
        SqliteConnection::begin(conn)
    }
}

/// A scoped SQLite connection with an open transaction
pub struct SqliteConnection {
    conn: Connection,
}

impl SqliteConnection {
    /// Wrap an already-configured connection and begin a transaction on it
    pub fn begin(conn: Connection) -> Result<Self> {
        conn.execute_batch("BEGIN DEFERRED")
            .map_err(from_rusqlite)?;
        Ok(Self { conn })
    }

    fn fetch(&mut self, sql: &str, params: &[SqlValue], limit: Option<usize>) -> Result<Vec<Row>> {
        let mut stmt = self.conn.prepare(sql).map_err(from_rusqlite)?;
        let column_count = stmt.column_count();
        let mut rows = stmt
            .query(params_from_iter(params.iter()))
            .map_err(from_rusqlite)?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(from_rusqlite)? {
            out.push(read_row(row, column_count)?);
            if limit.is_some_and(|n| out.len() >= n) {
                break;
            }
        }
        Ok(out)
    }
}

impl StorageConnection for SqliteConnection {
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<usize> {
        self.conn
            .execute(sql, params_from_iter(params.iter()))
            .map_err(from_rusqlite)
    }

    fn query_one(&mut self, sql: &str, params: &[SqlValue]) -> Result<Option<Row>> {
        Ok(self.fetch(sql, params, Some(1))?.into_iter().next())
    }

    fn query_all(&mut self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        self.fetch(sql, params, None)
    }

    fn commit(&mut self) -> Result<()> {
        // Keep the connection transactional for any statements after the commit
        self.conn
            .execute_batch("COMMIT; BEGIN DEFERRED")
            .map_err(from_rusqlite)
    }
}

impl Drop for SqliteConnection {
    fn drop(&mut self) {
        if self.conn.is_autocommit() {
            return;
        }
        if let Err(e) = self.conn.execute_batch("ROLLBACK") {
            tracing::debug!(error = %e, "rollback on release failed");
        }
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlValue::Null => ToSqlOutput::Owned(Value::Null),
            SqlValue::Integer(v) => ToSqlOutput::Owned(Value::Integer(*v)),
            SqlValue::Real(v) => ToSqlOutput::Owned(Value::Real(*v)),
            SqlValue::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
        })
    }
}

fn read_row(row: &rusqlite::Row<'_>, column_count: usize) -> Result<Row> {
    (0..column_count)
        .map(|idx| {
            let value = match row.get_ref(idx).map_err(from_rusqlite)? {
                ValueRef::Null => SqlValue::Null,
                ValueRef::Integer(v) => SqlValue::Integer(v),
                ValueRef::Real(v) => SqlValue::Real(v),
                ValueRef::Text(bytes) => SqlValue::Text(String::from_utf8_lossy(bytes).into_owned()),
                ValueRef::Blob(_) => {
                    return Err(ExError::new(ExErrorKind::Persistence)
                        .with_op("sqlite")
                        .with_message(format!("unsupported BLOB value in column {}", idx)))
                }
            };
            Ok(value)
        })
        .collect()
}
