//! Explicit wiring of configuration, storage and the request pipeline.
//! Built once per process and handed to every command.

use crate::api::{ConsoleAlerts, ReqwestTransport, RequestPipeline, Transport};
use crate::auth::AuthState;
use crate::config::Config;
use crate::db::{DeviceStorage, SqliteStorage, keys};
use crate::errors::{AppError, AppResult};
use crate::location::{
    Coordinates, FixedPosition, Geocoder, LocationResolver, StaticPermission,
};
use crate::store::ConfigStore;
use std::sync::Arc;
use std::time::Duration;

pub struct AppContext {
    pub config: Config,
    pub storage: Arc<SqliteStorage>,
    pub store: Arc<ConfigStore>,
    pub auth: Arc<AuthState>,
    pub pipeline: RequestPipeline,
    transport: Arc<dyn Transport>,
}

impl AppContext {
    /// Open the device store and load the cached tenant configuration from it.
    pub fn open(config: Config) -> AppResult<Self> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Same wiring over a caller-supplied transport.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> AppResult<Self> {
        let storage = Arc::new(SqliteStorage::open(&config.database)?);
        let store = Arc::new(ConfigStore::load(storage.as_ref())?);
        let token = storage.get_item(keys::ACCESS_TOKEN)?;
        let auth = Arc::new(AuthState::from_token(token.as_deref()));

        let pipeline = RequestPipeline::new(
            Arc::clone(&transport),
            storage.clone(),
            Arc::clone(&store),
            Arc::clone(&auth),
            Arc::new(ConsoleAlerts),
        )
        .with_default_base_url(Some(config.api_base_url.clone()))
        .with_default_timeout(config.request_timeout_secs.map(Duration::from_secs));

        Ok(Self {
            config,
            storage,
            store,
            auth,
            pipeline,
            transport,
        })
    }

    /// Fail early for commands that need an authenticated session.
    pub fn require_login(&self) -> AppResult<()> {
        if self.auth.is_logged_in() {
            Ok(())
        } else {
            Err(AppError::NotLoggedIn)
        }
    }

    pub fn geocoder(&self) -> Geocoder {
        Geocoder::new(
            Arc::clone(&self.transport),
            self.config.geocoding_url.clone(),
            self.config.geocoding_api_key.clone(),
        )
    }

    /// Resolver fed with caller-supplied coordinates; `None` means no fix.
    pub fn location_resolver(&self, coords: Option<Coordinates>) -> LocationResolver {
        let provider = match coords {
            Some(c) => FixedPosition::new(c),
            None => FixedPosition::unavailable(),
        };
        LocationResolver::new(
            Arc::new(StaticPermission(self.config.location_permission)),
            Arc::new(provider),
            self.geocoder(),
        )
    }
}
