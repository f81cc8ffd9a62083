//! Builders for the HTTP state from the configured storage.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use smartparking::inbound::http::state::HttpState;
use smartparking::outbound::memory::InMemoryStore;
use smartparking::outbound::persistence::{
    DbPool, DieselCompanyRepository, DieselOccupancyStateRepository, DieselParkingLotRepository,
};

use super::ServerConfig;

fn diesel_state(pool: &DbPool) -> HttpState {
    HttpState::with_repositories(
        Arc::new(DieselCompanyRepository::new(pool.clone())),
        Arc::new(DieselParkingLotRepository::new(pool.clone())),
        Arc::new(DieselOccupancyStateRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    )
}

fn memory_state() -> HttpState {
    let store = Arc::new(InMemoryStore::default());
    HttpState::with_repositories(store.clone(), store.clone(), store, Arc::new(DefaultClock))
}

/// Build the shared HTTP state, using PostgreSQL when a pool is configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(storage = "postgres", "building repositories");
            diesel_state(pool)
        }
        None => {
            info!(storage = "memory", "building repositories");
            memory_state()
        }
    };
    web::Data::new(state)
}
