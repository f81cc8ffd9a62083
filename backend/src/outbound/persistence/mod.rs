//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Rows (`models.rs`) and table definitions (`schema.rs`) never leave
//! this module, and every database failure is mapped to
//! [`crate::domain::ports::RepositoryError`].
//!
//! # Example
//!
//! ```no_run
//! use smartparking::outbound::persistence::{DbPool, DieselCompanyRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), smartparking::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/parking")).await?;
//! let companies = DieselCompanyRepository::new(pool);
//! # let _ = companies;
//! # Ok(())
//! # }
//! ```

mod diesel_company_repository;
mod diesel_error_mapping;
mod diesel_occupancy_state_repository;
mod diesel_parking_lot_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_company_repository::DieselCompanyRepository;
pub use diesel_occupancy_state_repository::DieselOccupancyStateRepository;
pub use diesel_parking_lot_repository::DieselParkingLotRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
