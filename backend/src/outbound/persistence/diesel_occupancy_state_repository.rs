//! PostgreSQL-backed `OccupancyStateRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{OccupancyStateRepository, RepositoryError};
use crate::domain::{OccupancyState, OccupancyStateDraft, OccupancyStateId, ParkingLotId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{OccupancyStateRow, OccupancyStateWrite};
use super::pool::DbPool;
use super::schema::occupancy_states;

/// Diesel-backed implementation of the `OccupancyStateRepository` port.
#[derive(Clone)]
pub struct DieselOccupancyStateRepository {
    pool: DbPool,
}

impl DieselOccupancyStateRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_state(row: OccupancyStateRow) -> OccupancyState {
    OccupancyState::new(
        OccupancyStateId::new(row.id),
        OccupancyStateDraft {
            parking_lot_id: ParkingLotId::new(row.parking_lot_id),
            entered_at: row.entered_at,
            exited_at: row.exited_at,
        },
    )
}

fn to_write(draft: &OccupancyStateDraft) -> OccupancyStateWrite {
    OccupancyStateWrite {
        parking_lot_id: draft.parking_lot_id.get(),
        entered_at: draft.entered_at,
        exited_at: draft.exited_at,
    }
}

#[async_trait]
impl OccupancyStateRepository for DieselOccupancyStateRepository {
    async fn find_by_id(
        &self,
        id: OccupancyStateId,
    ) -> Result<Option<OccupancyState>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<OccupancyStateRow> = occupancy_states::table
            .find(id.get())
            .select(OccupancyStateRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_state))
    }

    async fn list_for_parking_lot(
        &self,
        parking_lot_id: ParkingLotId,
    ) -> Result<Vec<OccupancyState>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<OccupancyStateRow> = occupancy_states::table
            .filter(occupancy_states::parking_lot_id.eq(parking_lot_id.get()))
            .order(occupancy_states::id.asc())
            .select(OccupancyStateRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_state).collect())
    }

    async fn create(&self, draft: &OccupancyStateDraft) -> Result<OccupancyState, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: OccupancyStateRow = diesel::insert_into(occupancy_states::table)
            .values(&to_write(draft))
            .returning(OccupancyStateRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_state(row))
    }

    async fn update(
        &self,
        id: OccupancyStateId,
        draft: &OccupancyStateDraft,
    ) -> Result<OccupancyState, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: OccupancyStateRow = diesel::update(occupancy_states::table.find(id.get()))
            .set(&to_write(draft))
            .returning(OccupancyStateRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_state(row))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn cleared_exit_is_written_as_null() {
        let entered_at = Utc
            .with_ymd_and_hms(2026, 3, 1, 8, 0, 0)
            .single()
            .expect("timestamp");
        let write = to_write(&OccupancyStateDraft {
            parking_lot_id: ParkingLotId::new(3),
            entered_at,
            exited_at: None,
        });

        assert_eq!(write.parking_lot_id, 3);
        assert!(write.exited_at.is_none());
    }

    #[rstest]
    fn rows_convert_to_states() {
        let entered_at = Utc
            .with_ymd_and_hms(2026, 3, 1, 8, 0, 0)
            .single()
            .expect("timestamp");
        let state = row_to_state(OccupancyStateRow {
            id: 6,
            parking_lot_id: 3,
            entered_at,
            exited_at: None,
        });

        assert_eq!(state.parking_lot_id(), ParkingLotId::new(3));
        assert!(state.is_open());
    }
}
