//! Server entry-point: loads settings, wires the identity client and starts
//! the HTTP listener.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use authgate::inbound::http::{HealthState, HttpState};
use authgate::outbound::gotrue::GoTrueAuthClient;
use authgate::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;
use server::{AppSettings, ServerConfig, create_server};

/// Install the JSON subscriber, filtered by `RUST_LOG`.
fn init_tracing() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
        .map_err(|err| eyre!("failed to initialise tracing: {err}"))
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = AppSettings::load().wrap_err("failed to load settings")?;
    let auth_config = settings
        .auth_service()
        .wrap_err("identity service is not configured")?;
    let auth = GoTrueAuthClient::new(auth_config).wrap_err("failed to build identity client")?;

    let pool = match settings.database_url() {
        Some(url) => Some(
            DbPool::new(PoolConfig::new(url))
                .await
                .wrap_err("failed to build database pool")?,
        ),
        None => None,
    };

    let health_state = web::Data::new(HealthState::new(pool));
    let http_state = web::Data::new(HttpState::new(Arc::new(auth), settings.app_name()));
    let config = ServerConfig::from_settings(&settings);

    let server = create_server(health_state.clone(), http_state, &config)
        .wrap_err_with(|| format!("failed to bind {}", config.bind_label()))?;
    info!(
        addr = %config.bind_label(),
        env = settings.app_env(),
        app = settings.app_name(),
        "starting server"
    );

    let result = server.await;
    health_state.mark_unhealthy();
    info!(addr = %config.bind_label(), "server stopped");
    result.wrap_err("server terminated with an error")
}

#[cfg(test)]
mod tests {
    use super::init_tracing;

    #[test]
    fn second_tracing_init_reports_an_error() {
        init_tracing().ok();

        let err = init_tracing().expect_err("global subscriber already set");
        assert!(err.to_string().starts_with("failed to initialise tracing"));
    }
}
