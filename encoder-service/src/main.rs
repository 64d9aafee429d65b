//! Encoder service entry point.

use std::env;

use encoder_service::{server, ServiceConfig, SidecarRunner};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("encoder_service=info,tower_http=info"));

    let json = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment and logging
    dotenv::dotenv().ok();
    init_tracing();

    info!(
        service_name = "encoder-service",
        service_version = env!("CARGO_PKG_VERSION"),
        "Starting encoder service"
    );

    let config = ServiceConfig::from_env().inspect_err(|e| {
        error!(error = %e, "Invalid configuration");
    })?;

    info!(
        sidecar_path = %config.sidecar_path.display(),
        timeout_ms = config.sidecar_timeout.as_millis() as u64,
        max_concurrent = config.max_concurrent_sidecars,
        "Sidecar configured"
    );

    let app = server::create_app(SidecarRunner::from_config(&config));
    server::run_server(app, config.addr()).await
}
