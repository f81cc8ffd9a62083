//! Driving port for occupancy reads.

use async_trait::async_trait;

use crate::domain::{Error, OccupancyState, OccupancyStateId, ParkingLotId};

/// Driving port for occupancy read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OccupancyStateQuery: Send + Sync {
    /// Fetch one occupancy state, failing with `not_found` when absent.
    async fn get_state(&self, id: OccupancyStateId) -> Result<OccupancyState, Error>;

    /// States of one parking lot, failing with `not_found` for unknown lots.
    async fn list_states_for_parking_lot(
        &self,
        parking_lot_id: ParkingLotId,
    ) -> Result<Vec<OccupancyState>, Error>;
}
