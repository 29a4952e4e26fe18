//! SQLite connection management for the register database.
//!
//! The register schema is owned by an external system; this crate opens the
//! database read-only in spirit and never creates or migrates tables.

use crate::infra::db_config::DbConfig;
use anyhow::Result;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Database wrapper that manages the SQLite connection
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open the register database using the ambient configuration.
    pub fn open() -> Result<Self> {
        let config = DbConfig::load();
        Self::open_at(config.path)
    }

    /// Open an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Open the register database at a specific path
    pub fn open_at(path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Apply connection pragmas. Schema creation is out of scope: the
    /// register tables belong to the external system that feeds them.
    fn init(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .expect("Database: failed to acquire database lock");
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    pub fn record_repo(&self) -> crate::infra::db::repository::RecordRepository {
        crate::infra::db::repository::RecordRepository::new(self.connection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let res: i32 = guard.query_row("SELECT 1", [], |row| row.get(0)).unwrap();
        assert_eq!(res, 1);
    }

    #[test]
    fn test_database_open_at_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("register.sqlite");
        let db = Database::open_at(path.clone()).unwrap();
        drop(db);
        assert!(path.exists());
    }
}
