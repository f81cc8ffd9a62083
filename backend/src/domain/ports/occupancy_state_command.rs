//! Driving port for occupancy mutations.

use async_trait::async_trait;

use crate::domain::validation::{InputPayload, UpdateMode};
use crate::domain::{Error, OccupancyState, OccupancyStateId};

/// Driving port for recording entries and exits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OccupancyStateCommand: Send + Sync {
    /// Validate and persist a new occupancy interval.
    async fn record_state(&self, input: InputPayload) -> Result<OccupancyState, Error>;

    /// Validate and apply changes to occupancy state `id`, e.g. an exit time.
    async fn update_state(
        &self,
        id: OccupancyStateId,
        input: InputPayload,
        mode: UpdateMode,
    ) -> Result<OccupancyState, Error>;
}
