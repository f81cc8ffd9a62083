//! PostgreSQL-backed `ParkingLotRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ParkingLotRepository, ParkingLotUniqueField, RepositoryError};
use crate::domain::{CompanyId, ParkingLot, ParkingLotDraft, ParkingLotId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ParkingLotRow, ParkingLotWrite};
use super::pool::DbPool;
use super::schema::parking_lots;

/// Diesel-backed implementation of the `ParkingLotRepository` port.
#[derive(Clone)]
pub struct DieselParkingLotRepository {
    pool: DbPool,
}

impl DieselParkingLotRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_parking_lot(row: ParkingLotRow) -> ParkingLot {
    ParkingLot::new(
        ParkingLotId::new(row.id),
        ParkingLotDraft {
            company_id: CompanyId::new(row.company_id),
            location: row.location,
            active: row.active,
        },
    )
}

fn to_write(draft: &ParkingLotDraft) -> ParkingLotWrite<'_> {
    ParkingLotWrite {
        company_id: draft.company_id.get(),
        location: &draft.location,
        active: draft.active,
    }
}

#[async_trait]
impl ParkingLotRepository for DieselParkingLotRepository {
    async fn exists_by_unique(
        &self,
        field: ParkingLotUniqueField,
        value: &str,
        excluding: Option<ParkingLotId>,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = parking_lots::table.into_boxed();
        query = match field {
            ParkingLotUniqueField::Location => query.filter(parking_lots::location.eq(value)),
        };
        if let Some(id) = excluding {
            query = query.filter(parking_lots::id.ne(id.get()));
        }

        let matches: i64 = query
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(matches > 0)
    }

    async fn find_by_id(&self, id: ParkingLotId) -> Result<Option<ParkingLot>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ParkingLotRow> = parking_lots::table
            .find(id.get())
            .select(ParkingLotRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_parking_lot))
    }

    async fn list(&self) -> Result<Vec<ParkingLot>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ParkingLotRow> = parking_lots::table
            .order(parking_lots::id.asc())
            .select(ParkingLotRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_parking_lot).collect())
    }

    async fn create(&self, draft: &ParkingLotDraft) -> Result<ParkingLot, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ParkingLotRow = diesel::insert_into(parking_lots::table)
            .values(&to_write(draft))
            .returning(ParkingLotRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_parking_lot(row))
    }

    async fn update(
        &self,
        id: ParkingLotId,
        draft: &ParkingLotDraft,
    ) -> Result<ParkingLot, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ParkingLotRow = diesel::update(parking_lots::table.find(id.get()))
            .set(&to_write(draft))
            .returning(ParkingLotRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_parking_lot(row))
    }
}
