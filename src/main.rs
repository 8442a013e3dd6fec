use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biteright_core::{CoreConfig, DashboardStore, constants::DEFAULT_REST_ADDR};

/// Main entry point for the BiteRight HQ server
///
/// Resolves configuration once, seeds a fresh in-memory [`DashboardStore`] and serves the
/// REST API until Ctrl-C. State lives only as long as the process.
///
/// # Environment Variables
/// - `BITERIGHT_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `BITERIGHT_EQUITY`, `BITERIGHT_LOAN`: funding overrides in rupees
/// - `BITERIGHT_SUBSIDY_PERCENT`: PMEGP subsidy percentage override
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a funding override is not a valid amount,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("biteright=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("BITERIGHT_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = Arc::new(CoreConfig::from_env_values(
        std::env::var("BITERIGHT_EQUITY").ok(),
        std::env::var("BITERIGHT_LOAN").ok(),
        std::env::var("BITERIGHT_SUBSIDY_PERCENT").ok(),
    )?);
    tracing::info!(
        "funding: equity {} loan {} subsidy {}%",
        cfg.funding().equity,
        cfg.funding().loan,
        cfg.funding().subsidy_percent
    );

    let app = api_rest::router(DashboardStore::new(cfg));

    tracing::info!("++ Starting BiteRight HQ REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- BiteRight HQ stopped, in-memory state discarded");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}
