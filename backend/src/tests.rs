//! Tests for the backend application bootstrap, covering readiness
//! signalling and route wiring.

use std::net::SocketAddr;

use actix_web::web;
use rstest::{fixture, rstest};

use super::server::{ServerConfig, create_server, drain};
use smartparking::inbound::http::health::HealthState;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_address() -> SocketAddr {
    "127.0.0.1:0".parse().expect("loopback address")
}

#[rstest]
fn config_keeps_the_bind_address(bind_address: SocketAddr) {
    assert_eq!(ServerConfig::new(bind_address).bind_addr(), bind_address);
}

#[rstest]
#[actix_web::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
) {
    assert!(!health_state.is_ready());

    let server = create_server(health_state.clone(), ServerConfig::new(bind_address))
        .expect("server binds to an ephemeral port");

    assert!(health_state.is_ready());
    server.handle().stop(false).await;
}

#[rstest]
#[actix_web::test]
async fn drain_fails_liveness_before_stopping(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
) {
    let server = create_server(health_state.clone(), ServerConfig::new(bind_address))
        .expect("server binds to an ephemeral port");
    assert!(health_state.is_alive());

    drain(server.handle(), &health_state).await;

    assert!(!health_state.is_alive());
}
