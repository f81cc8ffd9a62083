//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    CompanyCommand, CompanyQuery, CompanyRepository, OccupancyStateCommand, OccupancyStateQuery,
    OccupancyStateRepository, ParkingLotCommand, ParkingLotQuery, ParkingLotRepository,
};
use crate::domain::{CompanyService, OccupancyStateService, ParkingLotService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub companies: Arc<dyn CompanyCommand>,
    pub companies_query: Arc<dyn CompanyQuery>,
    pub parking_lots: Arc<dyn ParkingLotCommand>,
    pub parking_lots_query: Arc<dyn ParkingLotQuery>,
    pub occupancy_states: Arc<dyn OccupancyStateCommand>,
    pub occupancy_states_query: Arc<dyn OccupancyStateQuery>,
}

impl HttpState {
    /// Build every domain service on top of the given repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use smartparking::inbound::http::state::HttpState;
    /// use smartparking::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let state = HttpState::with_repositories(
    ///     store.clone(),
    ///     store.clone(),
    ///     store,
    ///     Arc::new(DefaultClock),
    /// );
    /// let _companies = state.companies.clone();
    /// ```
    pub fn with_repositories<C, L, S>(
        companies: Arc<C>,
        parking_lots: Arc<L>,
        states: Arc<S>,
        clock: Arc<dyn Clock>,
    ) -> Self
    where
        C: CompanyRepository + 'static,
        L: ParkingLotRepository + 'static,
        S: OccupancyStateRepository + 'static,
    {
        let company_service = Arc::new(CompanyService::new(companies.clone()));
        let parking_lot_service = Arc::new(ParkingLotService::new(companies, parking_lots.clone()));
        let state_service = Arc::new(OccupancyStateService::new(parking_lots, states, clock));

        Self {
            companies: company_service.clone(),
            companies_query: company_service,
            parking_lots: parking_lot_service.clone(),
            parking_lots_query: parking_lot_service,
            occupancy_states: state_service.clone(),
            occupancy_states_query: state_service,
        }
    }
}
