//! Runtime tenant configuration.
//!
//! `ConfigStore` holds the currently selected organization's API base URL and
//! its company metadata. Readers take a snapshot (`Arc<RuntimeConfig>`) per
//! call; writers replace the whole snapshot, so a reader never observes a
//! half-updated value.

use crate::db::{DeviceStorage, keys};
use crate::errors::AppResult;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub base_url: Option<String>,
    pub company_info: Value,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            company_info: Value::Object(Default::default()),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigStore {
    current: RwLock<Arc<RuntimeConfig>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the cache from durable storage (read-through at startup).
    /// A corrupt `company_info` entry is ignored rather than failing startup.
    pub fn load(storage: &dyn DeviceStorage) -> AppResult<Self> {
        let base_url = storage.get_item(keys::BASE_URL)?;
        let company_info = storage
            .get_item(keys::COMPANY_INFO)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(|| Value::Object(Default::default()));

        Ok(Self {
            current: RwLock::new(Arc::new(RuntimeConfig {
                base_url,
                company_info,
            })),
        })
    }

    /// The value live at this instant.
    pub fn snapshot(&self) -> Arc<RuntimeConfig> {
        Arc::clone(&self.current.read())
    }

    pub fn base_url(&self) -> Option<String> {
        self.current.read().base_url.clone()
    }

    pub fn company_info(&self) -> Value {
        self.current.read().company_info.clone()
    }

    /// Replace the base URL in memory only. No validation or normalization.
    pub fn set_base_url(&self, url: impl Into<String>) {
        let url = url.into();
        self.replace(|cfg| cfg.base_url = Some(url));
    }

    /// Replace the company metadata in memory only.
    pub fn set_company_info(&self, info: Value) {
        self.replace(|cfg| cfg.company_info = info);
    }

    /// Persist the selected organization's base URL, then refresh the cache.
    pub fn select_organization(&self, storage: &dyn DeviceStorage, url: &str) -> AppResult<()> {
        storage.set_item(keys::BASE_URL, url)?;
        self.set_base_url(url);
        Ok(())
    }

    /// Persist company metadata, then refresh the cache.
    pub fn update_company_info(&self, storage: &dyn DeviceStorage, info: Value) -> AppResult<()> {
        storage.set_item(keys::COMPANY_INFO, &serde_json::to_string(&info)?)?;
        self.set_company_info(info);
        Ok(())
    }

    /// Back to the initial `{ base_url: None, company_info: {} }`.
    pub fn clear(&self) {
        *self.current.write() = Arc::new(RuntimeConfig::default());
    }

    fn replace<F>(&self, update: F)
    where
        F: FnOnce(&mut RuntimeConfig),
    {
        let mut guard = self.current.write();
        let mut next = RuntimeConfig::clone(&guard);
        update(&mut next);
        *guard = Arc::new(next);
    }
}
