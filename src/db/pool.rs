//! SQLite connection wrapper (lightweight for CLI usage).
//! The connection sits behind a mutex so async tasks can share one handle.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use parking_lot::Mutex;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    conn: Mutex<Connection>,
}

impl DbPool {
    /// Open the database file and make sure the schema is current.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database, schema included.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut guard = self.conn.lock();
        func(&mut guard)
    }
}
