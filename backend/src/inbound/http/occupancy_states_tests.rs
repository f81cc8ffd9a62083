//! Tests for occupancy state HTTP handlers.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{Duration, Utc};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{field_codes, memory_state, test_app};

async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: actix_test::TestRequest,
) -> ServiceResponse {
    actix_test::call_service(app, req.to_request()).await
}

fn hours_ago(hours: i64) -> String {
    (Utc::now() - Duration::hours(hours)).to_rfc3339()
}

#[fixture]
fn state() -> HttpState {
    memory_state()
}

async fn seed_lot(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
) {
    let company = send(
        app,
        actix_test::TestRequest::post()
            .uri("/api/v1/companies")
            .set_json(json!({
                "name": "Empresa 1",
                "email": "e1@example.com",
                "secret": "pw",
                "capacity": 50,
            })),
    )
    .await;
    assert_eq!(company.status(), StatusCode::CREATED);
    let lot = send(
        app,
        actix_test::TestRequest::post()
            .uri("/api/v1/parking-lots")
            .set_json(json!({ "companyId": 1, "location": "Centro" })),
    )
    .await;
    assert_eq!(lot.status(), StatusCode::CREATED);
}

#[rstest]
#[actix_web::test]
async fn recording_returns_projection_without_timestamps(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    seed_lot(&app).await;

    let res = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/occupancy-states")
            .set_json(json!({ "parkingLotId": 1, "enteredAt": hours_ago(2) })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/api/v1/occupancy-states/1")
    );
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({ "id": 1, "parkingLotId": 1 }));
}

#[rstest]
#[actix_web::test]
async fn future_entry_is_rejected(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    seed_lot(&app).await;

    let res = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/occupancy-states")
            .set_json(json!({ "parkingLotId": 1, "enteredAt": hours_ago(-1) })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(field_codes(&body, "enteredAt"), vec!["future_datetime"]);
}

#[rstest]
#[actix_web::test]
async fn patch_records_the_exit(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    seed_lot(&app).await;
    send(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/occupancy-states")
            .set_json(json!({ "parkingLotId": 1, "enteredAt": hours_ago(2) })),
    )
    .await;

    let res = send(
        &app,
        actix_test::TestRequest::patch()
            .uri("/api/v1/occupancy-states/1")
            .set_json(json!({ "exitedAt": hours_ago(1) })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn exit_before_entry_is_rejected_on_patch(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    seed_lot(&app).await;
    send(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/occupancy-states")
            .set_json(json!({ "parkingLotId": 1, "enteredAt": hours_ago(2) })),
    )
    .await;

    let res = send(
        &app,
        actix_test::TestRequest::patch()
            .uri("/api/v1/occupancy-states/1")
            .set_json(json!({ "exitedAt": hours_ago(3) })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(field_codes(&body, "exitedAt"), vec!["exit_before_entry"]);
}

#[rstest]
#[actix_web::test]
async fn unknown_state_is_not_found(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;

    let res = send(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/occupancy-states/5"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
