use super::error::LocationError;
use super::geocoder::Geocoder;
use super::{Coordinates, LocationErrorKind, LocationResult, PositionOptions};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;

/// Runtime permission prompt. Platforms without one answer `true`.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    async fn request_location_permission(&self) -> bool;
}

/// One-shot position source.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, LocationError>;
}

pub struct LocationResolver {
    permission: Arc<dyn PermissionGate>,
    provider: Arc<dyn PositionProvider>,
    geocoder: Geocoder,
    options: PositionOptions,
    last_fix: Mutex<Option<(Instant, Coordinates)>>,
}

impl LocationResolver {
    pub fn new(
        permission: Arc<dyn PermissionGate>,
        provider: Arc<dyn PositionProvider>,
        geocoder: Geocoder,
    ) -> Self {
        Self {
            permission,
            provider,
            geocoder,
            options: PositionOptions::default(),
            last_fix: Mutex::new(None),
        }
    }

    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    /// Permission check, then a position fix. A fix younger than
    /// `maximum_age` is reused instead of asking the provider again.
    pub async fn get_current_location(&self) -> Result<Coordinates, LocationError> {
        if !self.permission.request_location_permission().await {
            return Err(LocationError::permission_not_granted());
        }

        if let Some((taken, coords)) = *self.last_fix.lock()
            && taken.elapsed() <= self.options.maximum_age
        {
            return Ok(coords);
        }

        let fix = tokio::time::timeout(
            self.options.timeout,
            self.provider.current_position(&self.options),
        )
        .await
        .map_err(|_| LocationError::new(LocationErrorKind::Timeout))??;

        *self.last_fix.lock() = Some((Instant::now(), fix));
        Ok(fix)
    }

    /// Address for the coordinates, or a fallback string. Never fails.
    pub async fn get_address_from_coordinates(&self, latitude: f64, longitude: f64) -> String {
        self.geocoder.address_for(latitude, longitude).await
    }

    /// Fails only when permission or the position fix fails.
    pub async fn get_location_with_address(&self) -> Result<LocationResult, LocationError> {
        let coords = self.get_current_location().await?;
        let address = self
            .get_address_from_coordinates(coords.latitude, coords.longitude)
            .await;

        Ok(LocationResult {
            latitude: coords.latitude,
            longitude: coords.longitude,
            address: Some(address),
        })
    }
}
