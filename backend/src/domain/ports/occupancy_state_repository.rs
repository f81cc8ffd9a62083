//! Port for occupancy state persistence.

use async_trait::async_trait;

use crate::domain::{OccupancyState, OccupancyStateDraft, OccupancyStateId, ParkingLotId};

use super::RepositoryError;

/// Port for storing and reading occupancy intervals.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OccupancyStateRepository: Send + Sync {
    /// Fetch an occupancy state by identifier.
    async fn find_by_id(
        &self,
        id: OccupancyStateId,
    ) -> Result<Option<OccupancyState>, RepositoryError>;

    /// States recorded for one parking lot, ordered by identifier.
    async fn list_for_parking_lot(
        &self,
        parking_lot_id: ParkingLotId,
    ) -> Result<Vec<OccupancyState>, RepositoryError>;

    /// Persist a new occupancy state.
    async fn create(&self, draft: &OccupancyStateDraft) -> Result<OccupancyState, RepositoryError>;

    /// Overwrite the stored fields of occupancy state `id`.
    async fn update(
        &self,
        id: OccupancyStateId,
        draft: &OccupancyStateDraft,
    ) -> Result<OccupancyState, RepositoryError>;
}
