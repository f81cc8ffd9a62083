//! Outbound adapters implementing the domain repository ports.
//!
//! - **memory**: mutex-guarded in-process tables, the default store
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
