//! Backend entry-point: loads settings, prepares storage and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use smartparking::inbound::http::health::HealthState;
use smartparking::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use smartparking::settings::ServerSettings;

use server::{ServerConfig, create_server, drain};

async fn connect_database(
    settings: &ServerSettings,
    database_url: &str,
) -> std::io::Result<DbPool> {
    if settings.run_migrations {
        run_pending_migrations(database_url)
            .await
            .map_err(std::io::Error::other)?;
    }
    DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_size()))
        .await
        .map_err(std::io::Error::other)
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut health_state = HealthState::new();
    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url.as_deref() {
        Some(database_url) => {
            let pool = connect_database(&settings, database_url).await?;
            health_state = health_state.with_database(pool.clone());
            config = config.with_db_pool(pool);
        }
        None => warn!("no database URL configured; records are kept in memory"),
    }

    let health_state = web::Data::new(health_state);
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if let Err(error) = shutdown_signal().await {
            warn!(%error, "failed to listen for shutdown signals");
            return;
        }
        info!("shutdown requested; draining connections");
        drain(handle, &health_state).await;
    });
    info!(%bind_addr, "server listening");
    server.await
}

#[cfg(test)]
mod tests;
