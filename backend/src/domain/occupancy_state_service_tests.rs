//! Tests for the occupancy state service.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::MockClock;
use mockall::predicate::eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockOccupancyStateRepository, MockParkingLotRepository};
use crate::domain::{CompanyId, ErrorCode, OccupancyStateDraft, ParkingLot, ParkingLotDraft};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[fixture]
fn clock() -> Arc<dyn Clock> {
    let mut clock = MockClock::new();
    clock.expect_utc().return_const(now());
    Arc::new(clock)
}

fn payload(value: Value) -> InputPayload {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn lot(id: ParkingLotId) -> ParkingLot {
    ParkingLot::new(
        id,
        ParkingLotDraft {
            company_id: CompanyId::new(1),
            location: "Centro".to_owned(),
            active: true,
        },
    )
}

fn known_lots() -> MockParkingLotRepository {
    let mut repo = MockParkingLotRepository::new();
    repo.expect_find_by_id().returning(|id| Ok(Some(lot(id))));
    repo
}

fn open_state(id: i64) -> OccupancyState {
    OccupancyState::new(
        OccupancyStateId::new(id),
        OccupancyStateDraft {
            parking_lot_id: ParkingLotId::new(1),
            entered_at: now() - Duration::hours(1),
            exited_at: None,
        },
    )
}

#[rstest]
#[tokio::test]
async fn record_state_persists_the_interval(clock: Arc<dyn Clock>) {
    let mut states = MockOccupancyStateRepository::new();
    states
        .expect_create()
        .times(1)
        .returning(|draft| Ok(OccupancyState::new(OccupancyStateId::new(1), draft.clone())));

    let state = OccupancyStateService::new(Arc::new(known_lots()), Arc::new(states), clock)
        .record_state(payload(json!({
            "parkingLotId": 1,
            "enteredAt": (now() - Duration::minutes(10)).to_rfc3339(),
        })))
        .await
        .expect("record succeeds");

    assert!(state.is_open());
}

#[rstest]
#[tokio::test]
async fn future_entry_is_never_persisted(clock: Arc<dyn Clock>) {
    let mut states = MockOccupancyStateRepository::new();
    states.expect_create().never();

    let error = OccupancyStateService::new(Arc::new(known_lots()), Arc::new(states), clock)
        .record_state(payload(json!({
            "parkingLotId": 1,
            "enteredAt": (now() + Duration::minutes(30)).to_rfc3339(),
        })))
        .await
        .expect_err("future entry");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("details");
    assert_eq!(details["fields"]["enteredAt"][0]["code"], "future_datetime");
}

#[rstest]
#[tokio::test]
async fn recording_an_exit_closes_the_interval(clock: Arc<dyn Clock>) {
    let mut states = MockOccupancyStateRepository::new();
    states
        .expect_find_by_id()
        .with(eq(OccupancyStateId::new(3)))
        .returning(|id| Ok(Some(open_state(id.get()))));
    states
        .expect_update()
        .returning(|id, draft| Ok(OccupancyState::new(id, draft.clone())));

    let state = OccupancyStateService::new(Arc::new(known_lots()), Arc::new(states), clock)
        .update_state(
            OccupancyStateId::new(3),
            payload(json!({ "exitedAt": now().to_rfc3339() })),
            UpdateMode::Partial,
        )
        .await
        .expect("exit recorded");

    assert_eq!(state.exited_at(), Some(now()));
}

#[rstest]
#[tokio::test]
async fn states_of_unknown_lot_are_not_found(clock: Arc<dyn Clock>) {
    let mut lots = MockParkingLotRepository::new();
    lots.expect_find_by_id().returning(|_| Ok(None));
    let mut states = MockOccupancyStateRepository::new();
    states.expect_list_for_parking_lot().never();

    let error = OccupancyStateService::new(Arc::new(lots), Arc::new(states), clock)
        .list_states_for_parking_lot(ParkingLotId::new(40))
        .await
        .expect_err("unknown lot");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn states_are_listed_per_lot(clock: Arc<dyn Clock>) {
    let mut states = MockOccupancyStateRepository::new();
    states
        .expect_list_for_parking_lot()
        .with(eq(ParkingLotId::new(1)))
        .returning(|_| Ok(vec![open_state(1), open_state(2)]));

    let listed = OccupancyStateService::new(Arc::new(known_lots()), Arc::new(states), clock)
        .list_states_for_parking_lot(ParkingLotId::new(1))
        .await
        .expect("list succeeds");

    assert_eq!(listed.len(), 2);
}
