//! Occupancy state HTTP handlers.
//!
//! ```text
//! POST  /api/v1/occupancy-states {"parkingLotId":1,"enteredAt":"2026-03-01T08:00:00Z"}
//! GET   /api/v1/occupancy-states/{id}
//! PUT   /api/v1/occupancy-states/{id}
//! PATCH /api/v1/occupancy-states/{id} {"exitedAt":"2026-03-01T09:30:00Z"}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, patch, post, put, web};
use serde_json::Value;
use tracing::info;

use crate::domain::{OccupancyStateId, OccupancyStateView, UpdateMode};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::into_input;
use crate::inbound::http::schemas::{ErrorSchema, OccupancyStateInputSchema};
use crate::inbound::http::state::HttpState;

/// Record a vehicle entering a parking lot.
#[utoipa::path(
    post,
    path = "/api/v1/occupancy-states",
    request_body = OccupancyStateInputSchema,
    responses(
        (status = 201, description = "Occupancy recorded", body = OccupancyStateView,
            headers(("Location" = String, description = "URL of the new occupancy state"))),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 409, description = "Storage constraint violated", body = ErrorSchema)
    ),
    tags = ["occupancy-states"],
    operation_id = "recordOccupancyState"
)]
#[post("/occupancy-states")]
pub async fn record_state(
    state: web::Data<HttpState>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let input = into_input(body.into_inner())?;
    let recorded = state.occupancy_states.record_state(input).await?;
    info!(
        state_id = %recorded.id(),
        parking_lot_id = %recorded.parking_lot_id(),
        "occupancy state recorded"
    );
    Ok(HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!("/api/v1/occupancy-states/{}", recorded.id()),
        ))
        .json(OccupancyStateView::from(&recorded)))
}

/// Fetch one occupancy state.
#[utoipa::path(
    get,
    path = "/api/v1/occupancy-states/{id}",
    params(("id" = i64, Path, description = "Occupancy state identifier")),
    responses(
        (status = 200, description = "Occupancy state", body = OccupancyStateView),
        (status = 404, description = "Unknown occupancy state", body = ErrorSchema)
    ),
    tags = ["occupancy-states"],
    operation_id = "getOccupancyState"
)]
#[get("/occupancy-states/{id}")]
pub async fn get_state(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<OccupancyStateView>> {
    let found = state
        .occupancy_states_query
        .get_state(OccupancyStateId::new(path.into_inner()))
        .await?;
    Ok(web::Json(OccupancyStateView::from(&found)))
}

async fn update(
    state: &HttpState,
    id: i64,
    body: Value,
    mode: UpdateMode,
) -> ApiResult<web::Json<OccupancyStateView>> {
    let input = into_input(body)?;
    let updated = state
        .occupancy_states
        .update_state(OccupancyStateId::new(id), input, mode)
        .await?;
    info!(state_id = %updated.id(), open = updated.is_open(), ?mode, "occupancy state updated");
    Ok(web::Json(OccupancyStateView::from(&updated)))
}

/// Replace every field of an occupancy state.
#[utoipa::path(
    put,
    path = "/api/v1/occupancy-states/{id}",
    params(("id" = i64, Path, description = "Occupancy state identifier")),
    request_body = OccupancyStateInputSchema,
    responses(
        (status = 200, description = "Occupancy state updated", body = OccupancyStateView),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "Unknown occupancy state", body = ErrorSchema)
    ),
    tags = ["occupancy-states"],
    operation_id = "replaceOccupancyState"
)]
#[put("/occupancy-states/{id}")]
pub async fn replace_state(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> ApiResult<web::Json<OccupancyStateView>> {
    update(&state, path.into_inner(), body.into_inner(), UpdateMode::Replace).await
}

/// Change only the supplied fields, typically to record the exit.
#[utoipa::path(
    patch,
    path = "/api/v1/occupancy-states/{id}",
    params(("id" = i64, Path, description = "Occupancy state identifier")),
    request_body = OccupancyStateInputSchema,
    responses(
        (status = 200, description = "Occupancy state updated", body = OccupancyStateView),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "Unknown occupancy state", body = ErrorSchema)
    ),
    tags = ["occupancy-states"],
    operation_id = "patchOccupancyState"
)]
#[patch("/occupancy-states/{id}")]
pub async fn patch_state(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> ApiResult<web::Json<OccupancyStateView>> {
    update(&state, path.into_inner(), body.into_inner(), UpdateMode::Partial).await
}

#[cfg(test)]
#[path = "occupancy_states_tests.rs"]
mod tests;
