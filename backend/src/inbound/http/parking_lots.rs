//! Parking lot HTTP handlers.
//!
//! ```text
//! GET   /api/v1/parking-lots
//! POST  /api/v1/parking-lots {"companyId":1,"location":"Centro"}
//! GET   /api/v1/parking-lots/{id}
//! PUT   /api/v1/parking-lots/{id}
//! PATCH /api/v1/parking-lots/{id} {"active":false}
//! GET   /api/v1/parking-lots/{id}/states
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, patch, post, put, web};
use serde_json::Value;
use tracing::info;

use crate::domain::{OccupancyStateView, ParkingLotId, ParkingLotView, UpdateMode};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::into_input;
use crate::inbound::http::schemas::{ErrorSchema, ParkingLotInputSchema};
use crate::inbound::http::state::HttpState;

/// List every parking lot.
#[utoipa::path(
    get,
    path = "/api/v1/parking-lots",
    responses(
        (status = 200, description = "Parking lots", body = [ParkingLotView]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["parking-lots"],
    operation_id = "listParkingLots"
)]
#[get("/parking-lots")]
pub async fn list_parking_lots(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ParkingLotView>>> {
    let lots = state.parking_lots_query.list_parking_lots().await?;
    Ok(web::Json(lots.iter().map(ParkingLotView::from).collect()))
}

/// Register a parking lot for an existing company.
#[utoipa::path(
    post,
    path = "/api/v1/parking-lots",
    request_body = ParkingLotInputSchema,
    responses(
        (status = 201, description = "Parking lot created", body = ParkingLotView,
            headers(("Location" = String, description = "URL of the new parking lot"))),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 409, description = "Storage constraint violated", body = ErrorSchema)
    ),
    tags = ["parking-lots"],
    operation_id = "createParkingLot"
)]
#[post("/parking-lots")]
pub async fn create_parking_lot(
    state: web::Data<HttpState>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let input = into_input(body.into_inner())?;
    let lot = state.parking_lots.create_parking_lot(input).await?;
    info!(parking_lot_id = %lot.id(), company_id = %lot.company_id(), "parking lot created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/parking-lots/{}", lot.id())))
        .json(ParkingLotView::from(&lot)))
}

/// Fetch one parking lot.
#[utoipa::path(
    get,
    path = "/api/v1/parking-lots/{id}",
    params(("id" = i64, Path, description = "Parking lot identifier")),
    responses(
        (status = 200, description = "Parking lot", body = ParkingLotView),
        (status = 404, description = "Unknown parking lot", body = ErrorSchema)
    ),
    tags = ["parking-lots"],
    operation_id = "getParkingLot"
)]
#[get("/parking-lots/{id}")]
pub async fn get_parking_lot(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ParkingLotView>> {
    let lot = state
        .parking_lots_query
        .get_parking_lot(ParkingLotId::new(path.into_inner()))
        .await?;
    Ok(web::Json(ParkingLotView::from(&lot)))
}

async fn update(
    state: &HttpState,
    id: i64,
    body: Value,
    mode: UpdateMode,
) -> ApiResult<web::Json<ParkingLotView>> {
    let input = into_input(body)?;
    let lot = state
        .parking_lots
        .update_parking_lot(ParkingLotId::new(id), input, mode)
        .await?;
    info!(parking_lot_id = %lot.id(), ?mode, "parking lot updated");
    Ok(web::Json(ParkingLotView::from(&lot)))
}

/// Replace every field of a parking lot.
#[utoipa::path(
    put,
    path = "/api/v1/parking-lots/{id}",
    params(("id" = i64, Path, description = "Parking lot identifier")),
    request_body = ParkingLotInputSchema,
    responses(
        (status = 200, description = "Parking lot updated", body = ParkingLotView),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "Unknown parking lot", body = ErrorSchema)
    ),
    tags = ["parking-lots"],
    operation_id = "replaceParkingLot"
)]
#[put("/parking-lots/{id}")]
pub async fn replace_parking_lot(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> ApiResult<web::Json<ParkingLotView>> {
    update(&state, path.into_inner(), body.into_inner(), UpdateMode::Replace).await
}

/// Change only the supplied parking lot fields.
#[utoipa::path(
    patch,
    path = "/api/v1/parking-lots/{id}",
    params(("id" = i64, Path, description = "Parking lot identifier")),
    request_body = ParkingLotInputSchema,
    responses(
        (status = 200, description = "Parking lot updated", body = ParkingLotView),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "Unknown parking lot", body = ErrorSchema)
    ),
    tags = ["parking-lots"],
    operation_id = "patchParkingLot"
)]
#[patch("/parking-lots/{id}")]
pub async fn patch_parking_lot(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> ApiResult<web::Json<ParkingLotView>> {
    update(&state, path.into_inner(), body.into_inner(), UpdateMode::Partial).await
}

/// Occupancy states recorded for one parking lot.
#[utoipa::path(
    get,
    path = "/api/v1/parking-lots/{id}/states",
    params(("id" = i64, Path, description = "Parking lot identifier")),
    responses(
        (status = 200, description = "Occupancy states", body = [OccupancyStateView]),
        (status = 404, description = "Unknown parking lot", body = ErrorSchema)
    ),
    tags = ["parking-lots"],
    operation_id = "listParkingLotStates"
)]
#[get("/parking-lots/{id}/states")]
pub async fn list_parking_lot_states(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<OccupancyStateView>>> {
    let states = state
        .occupancy_states_query
        .list_states_for_parking_lot(ParkingLotId::new(path.into_inner()))
        .await?;
    Ok(web::Json(states.iter().map(OccupancyStateView::from).collect()))
}

#[cfg(test)]
#[path = "parking_lots_tests.rs"]
mod tests;
