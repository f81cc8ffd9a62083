//! SmartParking backend library.
//!
//! Companies register parking lots, and each lot accumulates occupancy
//! intervals. The crate follows a ports-and-adapters layout: [`domain`] holds
//! entities, validators and services; [`inbound`] exposes them over HTTP;
//! [`outbound`] stores them in PostgreSQL or in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
