//! Occupancy state domain service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{
    OccupancyStateCommand, OccupancyStateQuery, OccupancyStateRepository, ParkingLotRepository,
};
use crate::domain::service_support::{map_repository_error, map_validation_failure};
use crate::domain::{
    Error, InputPayload, OccupancyState, OccupancyStateId, OccupancyStateValidator, ParkingLotId,
    UpdateMode,
};

const ENTITY: &str = "occupancy state";

/// Occupancy service implementing the command and query driving ports.
pub struct OccupancyStateService<L: ?Sized, S: ?Sized> {
    parking_lot_repo: Arc<L>,
    state_repo: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<L: ?Sized, S: ?Sized> OccupancyStateService<L, S> {
    /// Create a new service. `clock` decides what "now" means for entries.
    pub fn new(parking_lot_repo: Arc<L>, state_repo: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            parking_lot_repo,
            state_repo,
            clock,
        }
    }
}

impl<L, S> OccupancyStateService<L, S>
where
    L: ParkingLotRepository + ?Sized,
    S: OccupancyStateRepository + ?Sized,
{
    fn validator(&self) -> OccupancyStateValidator<'_, L> {
        OccupancyStateValidator::new(self.parking_lot_repo.as_ref(), self.clock.as_ref())
    }

    async fn find(&self, id: OccupancyStateId) -> Result<OccupancyState, Error> {
        self.state_repo
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error(ENTITY, err))?
            .ok_or_else(|| Error::not_found(format!("occupancy state {id} not found")))
    }
}

#[async_trait]
impl<L, S> OccupancyStateCommand for OccupancyStateService<L, S>
where
    L: ParkingLotRepository + ?Sized,
    S: OccupancyStateRepository + ?Sized,
{
    async fn record_state(&self, input: InputPayload) -> Result<OccupancyState, Error> {
        let draft = self
            .validator()
            .validate_and_build(None, &input, false)
            .await
            .map_err(|failure| map_validation_failure(ENTITY, failure))?;

        self.state_repo
            .create(&draft)
            .await
            .map_err(|err| map_repository_error(ENTITY, err))
    }

    async fn update_state(
        &self,
        id: OccupancyStateId,
        input: InputPayload,
        mode: UpdateMode,
    ) -> Result<OccupancyState, Error> {
        let existing = self.find(id).await?;
        let draft = self
            .validator()
            .validate_and_build(Some(&existing), &input, mode.is_partial())
            .await
            .map_err(|failure| map_validation_failure(ENTITY, failure))?;

        self.state_repo
            .update(id, &draft)
            .await
            .map_err(|err| map_repository_error(ENTITY, err))
    }
}

#[async_trait]
impl<L, S> OccupancyStateQuery for OccupancyStateService<L, S>
where
    L: ParkingLotRepository + ?Sized,
    S: OccupancyStateRepository + ?Sized,
{
    async fn get_state(&self, id: OccupancyStateId) -> Result<OccupancyState, Error> {
        self.find(id).await
    }

    async fn list_states_for_parking_lot(
        &self,
        parking_lot_id: ParkingLotId,
    ) -> Result<Vec<OccupancyState>, Error> {
        let lot = self
            .parking_lot_repo
            .find_by_id(parking_lot_id)
            .await
            .map_err(|err| map_repository_error("parking lot", err))?;
        if lot.is_none() {
            return Err(Error::not_found(format!(
                "parking lot {parking_lot_id} not found"
            )));
        }

        self.state_repo
            .list_for_parking_lot(parking_lot_id)
            .await
            .map_err(|err| map_repository_error(ENTITY, err))
    }
}

#[cfg(test)]
#[path = "occupancy_state_service_tests.rs"]
mod tests;
