//! Driving port for parking lot reads.

use async_trait::async_trait;

use crate::domain::{Error, ParkingLot, ParkingLotId};

/// Driving port for parking lot read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParkingLotQuery: Send + Sync {
    /// Fetch one parking lot, failing with `not_found` when absent.
    async fn get_parking_lot(&self, id: ParkingLotId) -> Result<ParkingLot, Error>;

    /// Every parking lot, ordered by identifier.
    async fn list_parking_lots(&self) -> Result<Vec<ParkingLot>, Error>;
}
