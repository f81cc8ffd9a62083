//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (`*Repository`) describe how the domain reaches storage.
//! Driving ports (`*Command`, `*Query`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod company_command;
mod company_query;
mod company_repository;
mod occupancy_state_command;
mod occupancy_state_query;
mod occupancy_state_repository;
mod parking_lot_command;
mod parking_lot_query;
mod parking_lot_repository;
mod repository_error;

#[cfg(test)]
pub use company_command::MockCompanyCommand;
pub use company_command::CompanyCommand;
#[cfg(test)]
pub use company_query::MockCompanyQuery;
pub use company_query::CompanyQuery;
#[cfg(test)]
pub use company_repository::MockCompanyRepository;
pub use company_repository::{CompanyRepository, CompanyUniqueField};
#[cfg(test)]
pub use occupancy_state_command::MockOccupancyStateCommand;
pub use occupancy_state_command::OccupancyStateCommand;
#[cfg(test)]
pub use occupancy_state_query::MockOccupancyStateQuery;
pub use occupancy_state_query::OccupancyStateQuery;
#[cfg(test)]
pub use occupancy_state_repository::MockOccupancyStateRepository;
pub use occupancy_state_repository::OccupancyStateRepository;
#[cfg(test)]
pub use parking_lot_command::MockParkingLotCommand;
pub use parking_lot_command::ParkingLotCommand;
#[cfg(test)]
pub use parking_lot_query::MockParkingLotQuery;
pub use parking_lot_query::ParkingLotQuery;
#[cfg(test)]
pub use parking_lot_repository::MockParkingLotRepository;
pub use parking_lot_repository::{ParkingLotRepository, ParkingLotUniqueField};
pub use repository_error::RepositoryError;
