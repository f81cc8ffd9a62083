//! Parking lot domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CompanyRepository, ParkingLotCommand, ParkingLotQuery, ParkingLotRepository,
};
use crate::domain::service_support::{map_repository_error, map_validation_failure};
use crate::domain::{Error, InputPayload, ParkingLot, ParkingLotId, ParkingLotValidator, UpdateMode};

const ENTITY: &str = "parking lot";

/// Parking lot service implementing the command and query driving ports.
///
/// The company repository is read to resolve the owning company reference.
pub struct ParkingLotService<C: ?Sized, L: ?Sized> {
    company_repo: Arc<C>,
    parking_lot_repo: Arc<L>,
}

impl<C: ?Sized, L: ?Sized> ParkingLotService<C, L> {
    /// Create a new service over the company and parking lot repositories.
    pub fn new(company_repo: Arc<C>, parking_lot_repo: Arc<L>) -> Self {
        Self {
            company_repo,
            parking_lot_repo,
        }
    }
}

impl<C, L> ParkingLotService<C, L>
where
    C: CompanyRepository + ?Sized,
    L: ParkingLotRepository + ?Sized,
{
    fn validator(&self) -> ParkingLotValidator<'_, C, L> {
        ParkingLotValidator::new(self.company_repo.as_ref(), self.parking_lot_repo.as_ref())
    }

    async fn find(&self, id: ParkingLotId) -> Result<ParkingLot, Error> {
        self.parking_lot_repo
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error(ENTITY, err))?
            .ok_or_else(|| Error::not_found(format!("parking lot {id} not found")))
    }
}

#[async_trait]
impl<C, L> ParkingLotCommand for ParkingLotService<C, L>
where
    C: CompanyRepository + ?Sized,
    L: ParkingLotRepository + ?Sized,
{
    async fn create_parking_lot(&self, input: InputPayload) -> Result<ParkingLot, Error> {
        let draft = self
            .validator()
            .validate_and_build(None, &input, false)
            .await
            .map_err(|failure| map_validation_failure(ENTITY, failure))?;

        self.parking_lot_repo
            .create(&draft)
            .await
            .map_err(|err| map_repository_error(ENTITY, err))
    }

    async fn update_parking_lot(
        &self,
        id: ParkingLotId,
        input: InputPayload,
        mode: UpdateMode,
    ) -> Result<ParkingLot, Error> {
        let existing = self.find(id).await?;
        let draft = self
            .validator()
            .validate_and_build(Some(&existing), &input, mode.is_partial())
            .await
            .map_err(|failure| map_validation_failure(ENTITY, failure))?;

        self.parking_lot_repo
            .update(id, &draft)
            .await
            .map_err(|err| map_repository_error(ENTITY, err))
    }
}

#[async_trait]
impl<C, L> ParkingLotQuery for ParkingLotService<C, L>
where
    C: CompanyRepository + ?Sized,
    L: ParkingLotRepository + ?Sized,
{
    async fn get_parking_lot(&self, id: ParkingLotId) -> Result<ParkingLot, Error> {
        self.find(id).await
    }

    async fn list_parking_lots(&self) -> Result<Vec<ParkingLot>, Error> {
        self.parking_lot_repo
            .list()
            .await
            .map_err(|err| map_repository_error(ENTITY, err))
    }
}

#[cfg(test)]
#[path = "parking_lot_service_tests.rs"]
mod tests;
