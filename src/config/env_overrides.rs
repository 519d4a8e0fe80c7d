//! Environment variable overrides for the loaded configuration.

use super::Config;

pub const ENV_API_BASE_URL: &str = "RHRMS_API_BASE_URL";
pub const ENV_GEOCODING_API_KEY: &str = "RHRMS_GEOCODING_API_KEY";
pub const ENV_ENVIRONMENT: &str = "RHRMS_ENV";
pub const ENV_GEOCODING_URL: &str = "RHRMS_GEOCODING_URL";

/// Apply overrides coming from `lookup` (normally `std::env::var`).
/// Empty values are ignored so an exported-but-blank variable keeps the file value.
pub fn apply_env_overrides<F>(mut cfg: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(ENV_API_BASE_URL) {
        cfg.api_base_url = url;
    }
    if let Some(key) = get(ENV_GEOCODING_API_KEY) {
        cfg.geocoding_api_key = key;
    }
    if let Some(url) = get(ENV_GEOCODING_URL) {
        cfg.geocoding_url = url;
    }
    if let Some(env) = get(ENV_ENVIRONMENT) {
        cfg.environment = env;
    }

    cfg
}
