mod api;
mod middleware;

use std::sync::Arc;

use anyhow::Context;
use ngodir_geocode::OlaMapsClient;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, default_rate_limit_state, AppState, SearchSettings},
    middleware::AuthState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ngodir_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = ngodir_db::PoolConfig::from_app_config(&config);
    let pool = ngodir_db::connect_pool(&config.database_url, pool_config).await?;
    let applied = ngodir_db::run_migrations(&pool).await?;
    tracing::info!(applied, "database migrations up to date");

    let api_key = config
        .olamaps_api_key
        .clone()
        .context("OLA_MAPS_API_KEY is required to run the server")?;
    let geocoder = OlaMapsClient::with_base_url(
        &api_key,
        config.geocode_timeout_secs,
        &config.geocode_base_url,
    )?
    .with_retry(
        config.geocode_max_retries,
        config.geocode_retry_backoff_base_ms,
    );

    let auth = AuthState::from_env(matches!(
        config.env,
        ngodir_core::Environment::Development
    ))?;
    let state = AppState {
        pool,
        geocoder: Arc::new(geocoder),
        classifier: Arc::new(config.query_classifier()),
        search: SearchSettings::from_app_config(&config),
    };
    let app = build_app(state, auth, default_rate_limit_state());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "ngodir-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
