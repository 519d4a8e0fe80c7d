//! Durable device key-value storage.
//!
//! This is the single source of truth for the access token and the selected
//! tenant; the in-memory `ConfigStore` is only a cache loaded from here.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use parking_lot::Mutex;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

/// Well-known storage keys.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const BASE_URL: &str = "base_url";
    pub const COMPANY_INFO: &str = "company_info";
}

pub trait DeviceStorage: Send + Sync {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;

    /// Remove every stored key. Clearing an empty store is not an error.
    fn clear(&self) -> AppResult<()>;

    /// Record a diagnostic line. Never fails the caller.
    fn log_event(&self, _operation: &str, _target: &str, _message: &str) {}
}

/// SQLite-backed storage (the `storage` and `log` tables).
pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::open(path)?,
        })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::open_in_memory()?,
        })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl DeviceStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let value = self.pool.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM storage WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()
        })?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.with_conn(|conn| {
            conn.execute(
                "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
        })?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.pool
            .with_conn(|conn| conn.execute("DELETE FROM storage WHERE key = ?1", [key]))?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.pool
            .with_conn(|conn| conn.execute("DELETE FROM storage", []))?;
        Ok(())
    }

    fn log_event(&self, operation: &str, target: &str, message: &str) {
        let outcome = self
            .pool
            .with_conn(|conn| Ok(ttlog(conn, operation, target, message)));
        if let Ok(Err(e)) = outcome {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }
}

/// Volatile storage for tests and one-shot invocations.
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    journal: Mutex<Vec<(String, String, String)>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Diagnostic lines recorded through `log_event`, as (operation, target, message).
    pub fn journal(&self) -> Vec<(String, String, String)> {
        self.journal.lock().clone()
    }
}

impl DeviceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.items.lock().remove(key);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.items.lock().clear();
        Ok(())
    }

    fn log_event(&self, operation: &str, target: &str, message: &str) {
        self.journal.lock().push((
            operation.to_string(),
            target.to_string(),
            message.to_string(),
        ));
    }
}
