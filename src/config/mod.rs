use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod env_overrides;

pub use env_overrides::apply_env_overrides;

/// Hardcoded fallbacks used when neither the config file nor the
/// environment provides a value.
pub const DEFAULT_API_BASE_URL: &str = "https://api.hrms.example.com/api";
pub const DEFAULT_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_ENVIRONMENT: &str = "production";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    #[serde(default)]
    pub geocoding_api_key: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Per-request deadline in seconds; `None` leaves HTTP calls unbounded.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Answer given by the CLI permission gate when a location is requested.
    #[serde(default = "default_location_permission")]
    pub location_permission: bool,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_geocoding_url() -> String {
    DEFAULT_GEOCODING_URL.to_string()
}
fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}
fn default_location_permission() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            api_base_url: default_api_base_url(),
            geocoding_url: default_geocoding_url(),
            geocoding_api_key: String::new(),
            environment: default_environment(),
            request_timeout_secs: None,
            location_permission: default_location_permission(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rhrms")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rhrms")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhrms.conf")
    }

    /// Return the full path of the SQLite device store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rhrms.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Environment overrides are applied on top in both cases.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let cfg = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            Config::default()
        };

        Ok(apply_env_overrides(cfg, |key| env::var(key).ok()))
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case(DEFAULT_ENVIRONMENT)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration file and device store location.
    /// Returns the resolved database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided (as given, ~ expanded) or default
        let db_path = match custom_db {
            Some(name) => expand_tilde(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::write(Self::config_file(), config.to_yaml()?).map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config.database)
    }
}
