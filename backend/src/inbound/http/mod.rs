//! HTTP inbound adapter exposing REST endpoints.
//!
//! Every resource route lives under `/api/v1`; see [`api_scope`].

pub mod companies;
pub mod error;
pub mod health;
pub mod occupancy_states;
pub mod parking_lots;
mod payload;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Body extraction settings shared by every resource route.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(error::json_error_handler)
}

/// The versioned API scope with every resource handler registered.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use smartparking::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(json_config())
        .service(companies::list_companies)
        .service(companies::create_company)
        .service(companies::get_company)
        .service(companies::replace_company)
        .service(companies::patch_company)
        .service(parking_lots::list_parking_lots)
        .service(parking_lots::create_parking_lot)
        .service(parking_lots::get_parking_lot)
        .service(parking_lots::replace_parking_lot)
        .service(parking_lots::patch_parking_lot)
        .service(parking_lots::list_parking_lot_states)
        .service(occupancy_states::record_state)
        .service(occupancy_states::get_state)
        .service(occupancy_states::replace_state)
        .service(occupancy_states::patch_state)
}
