//! In-process store implementing every repository port.
//!
//! Used when no database URL is configured and throughout the test suites.
//! Uniqueness and reference constraints are enforced on write, mirroring the
//! PostgreSQL schema, so races that slip past validation still surface as
//! [`RepositoryError::Conflict`].

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    CompanyRepository, CompanyUniqueField, OccupancyStateRepository, ParkingLotRepository,
    ParkingLotUniqueField, RepositoryError,
};
use crate::domain::{
    Company, CompanyDraft, CompanyId, OccupancyState, OccupancyStateDraft, OccupancyStateId,
    ParkingLot, ParkingLotDraft, ParkingLotId,
};

#[derive(Default)]
struct Tables {
    companies: BTreeMap<CompanyId, Company>,
    parking_lots: BTreeMap<ParkingLotId, ParkingLot>,
    states: BTreeMap<OccupancyStateId, OccupancyState>,
    last_company_id: i64,
    last_parking_lot_id: i64,
    last_state_id: i64,
}

impl Tables {
    fn email_taken(&self, email: &str, excluding: Option<CompanyId>) -> bool {
        self.companies
            .values()
            .any(|company| Some(company.id()) != excluding && company.email() == email)
    }

    fn location_taken(&self, location: &str, excluding: Option<ParkingLotId>) -> bool {
        self.parking_lots
            .values()
            .any(|lot| Some(lot.id()) != excluding && lot.location() == location)
    }

    fn check_company(
        &self,
        draft: &CompanyDraft,
        excluding: Option<CompanyId>,
    ) -> Result<(), RepositoryError> {
        if self.email_taken(&draft.email, excluding) {
            return Err(RepositoryError::conflict("companies_email_key"));
        }
        Ok(())
    }

    fn check_parking_lot(
        &self,
        draft: &ParkingLotDraft,
        excluding: Option<ParkingLotId>,
    ) -> Result<(), RepositoryError> {
        if !self.companies.contains_key(&draft.company_id) {
            return Err(RepositoryError::conflict("parking_lots_company_id_fkey"));
        }
        if self.location_taken(&draft.location, excluding) {
            return Err(RepositoryError::conflict("parking_lots_location_key"));
        }
        Ok(())
    }

    fn check_state(&self, draft: &OccupancyStateDraft) -> Result<(), RepositoryError> {
        if !self.parking_lots.contains_key(&draft.parking_lot_id) {
            return Err(RepositoryError::conflict(
                "occupancy_states_parking_lot_id_fkey",
            ));
        }
        Ok(())
    }
}

fn next_id(last: &mut i64) -> i64 {
    *last += 1;
    *last
}

/// Mutex-guarded tables of companies, parking lots and occupancy states.
///
/// # Examples
/// ```
/// use smartparking::outbound::memory::InMemoryStore;
///
/// let store = InMemoryStore::default();
/// # let _ = store;
/// ```
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    fn lock(&self) -> Result<MutexGuard<'_, Tables>, RepositoryError> {
        self.tables.lock().map_err(|_| {
            debug!("in-memory store lock poisoned");
            RepositoryError::query("in-memory store lock poisoned")
        })
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn exists_by_unique(
        &self,
        field: CompanyUniqueField,
        value: &str,
        excluding: Option<CompanyId>,
    ) -> Result<bool, RepositoryError> {
        let tables = self.lock()?;
        Ok(match field {
            CompanyUniqueField::Email => tables.email_taken(value, excluding),
        })
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, RepositoryError> {
        Ok(self.lock()?.companies.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Company>, RepositoryError> {
        Ok(self.lock()?.companies.values().cloned().collect())
    }

    async fn create(&self, draft: &CompanyDraft) -> Result<Company, RepositoryError> {
        let mut tables = self.lock()?;
        tables.check_company(draft, None)?;
        let id = CompanyId::new(next_id(&mut tables.last_company_id));
        let company = Company::new(id, draft.clone());
        tables.companies.insert(id, company.clone());
        Ok(company)
    }

    async fn update(
        &self,
        id: CompanyId,
        draft: &CompanyDraft,
    ) -> Result<Company, RepositoryError> {
        let mut tables = self.lock()?;
        if !tables.companies.contains_key(&id) {
            return Err(RepositoryError::not_found(format!("company {id}")));
        }
        tables.check_company(draft, Some(id))?;
        let company = Company::new(id, draft.clone());
        tables.companies.insert(id, company.clone());
        Ok(company)
    }
}

#[async_trait]
impl ParkingLotRepository for InMemoryStore {
    async fn exists_by_unique(
        &self,
        field: ParkingLotUniqueField,
        value: &str,
        excluding: Option<ParkingLotId>,
    ) -> Result<bool, RepositoryError> {
        let tables = self.lock()?;
        Ok(match field {
            ParkingLotUniqueField::Location => tables.location_taken(value, excluding),
        })
    }

    async fn find_by_id(&self, id: ParkingLotId) -> Result<Option<ParkingLot>, RepositoryError> {
        Ok(self.lock()?.parking_lots.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<ParkingLot>, RepositoryError> {
        Ok(self.lock()?.parking_lots.values().cloned().collect())
    }

    async fn create(&self, draft: &ParkingLotDraft) -> Result<ParkingLot, RepositoryError> {
        let mut tables = self.lock()?;
        tables.check_parking_lot(draft, None)?;
        let id = ParkingLotId::new(next_id(&mut tables.last_parking_lot_id));
        let lot = ParkingLot::new(id, draft.clone());
        tables.parking_lots.insert(id, lot.clone());
        Ok(lot)
    }

    async fn update(
        &self,
        id: ParkingLotId,
        draft: &ParkingLotDraft,
    ) -> Result<ParkingLot, RepositoryError> {
        let mut tables = self.lock()?;
        if !tables.parking_lots.contains_key(&id) {
            return Err(RepositoryError::not_found(format!("parking lot {id}")));
        }
        tables.check_parking_lot(draft, Some(id))?;
        let lot = ParkingLot::new(id, draft.clone());
        tables.parking_lots.insert(id, lot.clone());
        Ok(lot)
    }
}

#[async_trait]
impl OccupancyStateRepository for InMemoryStore {
    async fn find_by_id(
        &self,
        id: OccupancyStateId,
    ) -> Result<Option<OccupancyState>, RepositoryError> {
        Ok(self.lock()?.states.get(&id).cloned())
    }

    async fn list_for_parking_lot(
        &self,
        parking_lot_id: ParkingLotId,
    ) -> Result<Vec<OccupancyState>, RepositoryError> {
        Ok(self
            .lock()?
            .states
            .values()
            .filter(|state| state.parking_lot_id() == parking_lot_id)
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &OccupancyStateDraft) -> Result<OccupancyState, RepositoryError> {
        let mut tables = self.lock()?;
        tables.check_state(draft)?;
        let id = OccupancyStateId::new(next_id(&mut tables.last_state_id));
        let state = OccupancyState::new(id, draft.clone());
        tables.states.insert(id, state.clone());
        Ok(state)
    }

    async fn update(
        &self,
        id: OccupancyStateId,
        draft: &OccupancyStateDraft,
    ) -> Result<OccupancyState, RepositoryError> {
        let mut tables = self.lock()?;
        if !tables.states.contains_key(&id) {
            return Err(RepositoryError::not_found(format!("occupancy state {id}")));
        }
        tables.check_state(draft)?;
        let state = OccupancyState::new(id, draft.clone());
        tables.states.insert(id, state.clone());
        Ok(state)
    }
}
