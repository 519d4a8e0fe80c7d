//! Position and permission sources for hosts without a platform GPS API.

use super::resolver::{PermissionGate, PositionProvider};
use super::{Coordinates, LocationError, LocationErrorKind, PositionOptions};
use async_trait::async_trait;

/// Fixed answer to the permission prompt (from configuration).
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission(pub bool);

#[async_trait]
impl PermissionGate for StaticPermission {
    async fn request_location_permission(&self) -> bool {
        self.0
    }
}

/// Coordinates supplied by the caller (command line, external GPS daemon).
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition {
    coords: Option<Coordinates>,
}

impl FixedPosition {
    pub fn new(coords: Coordinates) -> Self {
        Self {
            coords: Some(coords),
        }
    }

    /// A source that never has a fix.
    pub fn unavailable() -> Self {
        Self { coords: None }
    }
}

#[async_trait]
impl PositionProvider for FixedPosition {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        match self.coords {
            Some(c) if c.is_valid() => Ok(c),
            _ => Err(LocationError::new(LocationErrorKind::PositionUnavailable)),
        }
    }
}
