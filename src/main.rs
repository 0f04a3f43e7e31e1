//! Sales landing page server.

use landing_telemetry::{init_metrics, setup_telemetry};
use sales_landing::config::{Config, SERVICE_NAME, VERSION};
use sales_landing::startup::build_app;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init()?;
    let telemetry = setup_telemetry(&config.telemetry_config());
    let metrics_handle = init_metrics();

    info!(
        version = VERSION,
        address = %config.http_address,
        strapi_url = config.strapi_base_url(),
        otlp = config.otlp_endpoint.is_some(),
        pid = std::process::id(),
        "Starting {SERVICE_NAME}"
    );

    let (app, addr) = build_app(&config, metrics_handle)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    telemetry.shutdown();
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
