use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::errors::{Result, SalesAgentError};

/// The embedded SQL schema applied when initializing a new database.
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// SQLite database holding products, customers and sales.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Creates (or reuses) a database at `db_path`, creating parent
    /// directories if needed, and applies the schema.
    pub fn initialize(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| SalesAgentError::Database {
                    message: format!("failed to create database directory: {e}"),
                    operation: "initialize".to_string(),
                })?;
            }
        }

        let conn = Connection::open(db_path).map_err(|e| SalesAgentError::Database {
            message: format!("failed to open database: {e}"),
            operation: "initialize".to_string(),
        })?;

        Self::from_connection(conn, "initialize")
    }

    /// Opens an existing database at `db_path`. Fails if the file is missing.
    pub fn open(db_path: &Path) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn =
            Connection::open_with_flags(db_path, flags).map_err(|e| SalesAgentError::Database {
                message: format!("failed to open database '{}': {e}", db_path.display()),
                operation: "open".to_string(),
            })?;

        Self::from_connection(conn, "open")
    }

    /// Creates a throwaway in-memory database with the schema applied.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, "in_memory")
    }

    fn from_connection(conn: Connection, operation: &str) -> Result<Self> {
        Self::apply_pragmas(&conn)?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| SalesAgentError::Database {
                message: format!("failed to apply schema: {e}"),
                operation: operation.to_string(),
            })?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    fn apply_pragmas(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| SalesAgentError::Database {
            message: format!("failed to apply pragmas: {e}"),
            operation: "apply_pragmas".to_string(),
        })
    }
}
