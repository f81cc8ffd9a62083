//! Driving port for parking lot mutations.

use async_trait::async_trait;

use crate::domain::validation::{InputPayload, UpdateMode};
use crate::domain::{Error, ParkingLot, ParkingLotId};

/// Driving port for parking lot write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParkingLotCommand: Send + Sync {
    /// Validate and persist a new parking lot.
    async fn create_parking_lot(&self, input: InputPayload) -> Result<ParkingLot, Error>;

    /// Validate and apply changes to parking lot `id`.
    async fn update_parking_lot(
        &self,
        id: ParkingLotId,
        input: InputPayload,
        mode: UpdateMode,
    ) -> Result<ParkingLot, Error>;
}
