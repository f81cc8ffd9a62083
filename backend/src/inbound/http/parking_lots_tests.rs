//! Tests for parking lot HTTP handlers.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{Duration, Utc};
use rstest::rstest;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{field_codes, memory_state, test_app};

async fn post(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
    body: Value,
) -> ServiceResponse {
    let req = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    actix_test::call_service(app, req).await
}

async fn seed_company(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
) {
    let res = post(
        app,
        "/api/v1/companies",
        json!({ "name": "Empresa 1", "email": "e1@example.com", "secret": "pw", "capacity": 50 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[rstest]
#[actix_web::test]
async fn create_defaults_to_active() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    seed_company(&app).await;

    let res = post(
        &app,
        "/api/v1/parking-lots",
        json!({ "companyId": 1, "location": "  Centro  " }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/api/v1/parking-lots/1")
    );
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({ "id": 1, "location": "Centro", "active": true }));
}

#[rstest]
#[actix_web::test]
async fn unknown_company_is_a_field_error() {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let res = post(
        &app,
        "/api/v1/parking-lots",
        json!({ "companyId": 1000, "location": "Centro" }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(field_codes(&body, "companyId"), vec!["does_not_exist"]);
    assert!(field_codes(&body, "location").is_empty());
}

#[rstest]
#[actix_web::test]
async fn patch_deactivates_and_keeps_location() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    seed_company(&app).await;
    post(
        &app,
        "/api/v1/parking-lots",
        json!({ "companyId": 1, "location": "Centro" }),
    )
    .await;

    let req = actix_test::TestRequest::patch()
        .uri("/api/v1/parking-lots/1")
        .set_json(json!({ "active": false }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "id": 1, "location": "Centro", "active": false }));
}

#[rstest]
#[actix_web::test]
async fn states_are_listed_per_lot() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    seed_company(&app).await;
    for location in ["Norte", "Sur"] {
        post(
            &app,
            "/api/v1/parking-lots",
            json!({ "companyId": 1, "location": location }),
        )
        .await;
    }
    let entered_at = (Utc::now() - Duration::hours(1)).to_rfc3339();
    for lot in [1, 2, 1] {
        let res = post(
            &app,
            "/api/v1/occupancy-states",
            json!({ "parkingLotId": lot, "enteredAt": entered_at }),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/parking-lots/1/states")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!([{ "id": 1, "parkingLotId": 1 }, { "id": 3, "parkingLotId": 1 }])
    );
}

#[rstest]
#[actix_web::test]
async fn states_of_unknown_lot_are_not_found() {
    let app = actix_test::init_service(test_app(memory_state())).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/parking-lots/9/states")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
