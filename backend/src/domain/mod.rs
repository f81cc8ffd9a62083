//! Domain primitives, validators and services.
//!
//! Purpose: define the parking entities, the rules their input must satisfy
//! and the output projections exposed by the API. Storage is reached only
//! through the traits in [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - Company, ParkingLot, OccupancyState: stored entities.
//! - `*Validator`: turn raw input into drafts or a field error set.
//! - `*Service`: implement the driving ports.

pub mod company;
mod company_service;
pub mod error;
pub mod occupancy_state;
mod occupancy_state_service;
pub mod parking_lot;
mod parking_lot_service;
mod service_support;
pub mod ports;
mod record_id;
pub mod trace_id;
pub mod validation;

pub use self::company::{Company, CompanyDraft, CompanyValidator, CompanyView, Secret};
pub use self::company_service::CompanyService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::occupancy_state::{
    OccupancyState, OccupancyStateDraft, OccupancyStateValidator, OccupancyStateView,
};
pub use self::occupancy_state_service::OccupancyStateService;
pub use self::parking_lot::{ParkingLot, ParkingLotDraft, ParkingLotValidator, ParkingLotView};
pub use self::parking_lot_service::ParkingLotService;
pub use self::record_id::{CompanyId, OccupancyStateId, ParkingLotId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{
    ErrorSet, FieldError, FieldErrorKind, InputPayload, UpdateMode, ValidationFailure,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use smartparking::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
