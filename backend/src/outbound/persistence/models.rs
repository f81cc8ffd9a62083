//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{companies, occupancy_states, parking_lots};

/// Row struct for reading from the companies table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CompanyRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub secret: String,
    pub capacity: i32,
}

/// Insertable and changeset struct for company writes.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = companies)]
pub(crate) struct CompanyWrite<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub secret: &'a str,
    pub capacity: i32,
}

/// Row struct for reading from the parking_lots table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = parking_lots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ParkingLotRow {
    pub id: i64,
    pub company_id: i64,
    pub location: String,
    pub active: bool,
}

/// Insertable and changeset struct for parking lot writes.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = parking_lots)]
pub(crate) struct ParkingLotWrite<'a> {
    pub company_id: i64,
    pub location: &'a str,
    pub active: bool,
}

/// Row struct for reading from the occupancy_states table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = occupancy_states)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OccupancyStateRow {
    pub id: i64,
    pub parking_lot_id: i64,
    pub entered_at: DateTime<Utc>,
    pub exited_at: Option<DateTime<Utc>>,
}

/// Insertable and changeset struct for occupancy writes.
///
/// `exited_at` is written even when `None` so updates can clear it.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = occupancy_states)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct OccupancyStateWrite {
    pub parking_lot_id: i64,
    pub entered_at: DateTime<Utc>,
    pub exited_at: Option<DateTime<Utc>>,
}
