//! Backend entry-point: loads settings, picks a store, and serves the API.

use std::net::{SocketAddr, ToSocketAddrs};

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::TriviaSettings;
use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};

mod server;

use server::{ServerConfig, create_server};

fn resolve_bind_addr(settings: &TriviaSettings) -> Result<SocketAddr> {
    (settings.host(), settings.port())
        .to_socket_addrs()
        .wrap_err("resolve bind address")?
        .next()
        .ok_or_else(|| eyre!("no address for {}:{}", settings.host(), settings.port()))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = TriviaSettings::load().wrap_err("load settings")?;
    let bind_addr = resolve_bind_addr(&settings)?;
    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        let pool = DbPool::new(
            PoolConfig::new(url).with_max_size(settings.db_max_connections()),
        )
        .await
        .wrap_err("build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("bind server")?;
    info!(%bind_addr, "trivia API listening");
    server.await.wrap_err("server terminated")
}
