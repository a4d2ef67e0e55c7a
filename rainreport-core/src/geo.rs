use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::{GeoError, PositionError},
    model::Coordinates,
};

/// A platform capability that can report the device position.
#[async_trait]
pub trait Geolocation: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, PositionError>;
}

/// Always reports the same position, e.g. one given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl Geolocation for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        Ok(self.0)
    }
}

/// A capability whose user declined to share the position.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedPosition;

#[async_trait]
impl Geolocation for DeniedPosition {
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        Err(PositionError::PermissionDenied)
    }
}

/// Obtain the device position. `None` means the platform has no location
/// capability, in which case no acquisition is attempted.
pub async fn acquire(capability: Option<&dyn Geolocation>) -> Result<Coordinates, GeoError> {
    let capability = capability.ok_or(GeoError::CapabilityUnavailable)?;

    capability
        .current_position()
        .await
        .map_err(GeoError::AcquisitionFailed)
}
