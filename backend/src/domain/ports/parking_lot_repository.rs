//! Port for parking lot persistence.

use async_trait::async_trait;

use crate::domain::{ParkingLot, ParkingLotDraft, ParkingLotId};

use super::RepositoryError;

/// Parking lot columns carrying a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkingLotUniqueField {
    /// Location label.
    Location,
}

/// Port for storing and reading parking lots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParkingLotRepository: Send + Sync {
    /// Whether a lot other than `excluding` already holds `value` in `field`.
    async fn exists_by_unique(
        &self,
        field: ParkingLotUniqueField,
        value: &str,
        excluding: Option<ParkingLotId>,
    ) -> Result<bool, RepositoryError>;

    /// Fetch a parking lot by identifier.
    async fn find_by_id(&self, id: ParkingLotId) -> Result<Option<ParkingLot>, RepositoryError>;

    /// Every stored parking lot, ordered by identifier.
    async fn list(&self) -> Result<Vec<ParkingLot>, RepositoryError>;

    /// Persist a new parking lot and return it with its assigned identifier.
    async fn create(&self, draft: &ParkingLotDraft) -> Result<ParkingLot, RepositoryError>;

    /// Overwrite the stored fields of parking lot `id`.
    async fn update(
        &self,
        id: ParkingLotId,
        draft: &ParkingLotDraft,
    ) -> Result<ParkingLot, RepositoryError>;
}
