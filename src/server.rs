//! HTTP server initialization and runtime setup.
//!
//! Handles logging setup, state construction and the Axum server lifecycle.

use crate::application::services::CalculatorService;
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::middleware::rate_limit::{CALCULATE_QUOTA, PAGE_QUOTA};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber from the configuration.
///
/// `log_level` is parsed as an [`EnvFilter`] directive (falling back to `info`);
/// `log_format` selects plain text or JSON lines.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Calculator service over the built-in benchmark catalog
/// - Axum router with rate limiting and tracing
/// - Graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The listen address does not parse
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let calculator = Arc::new(CalculatorService::new());
    tracing::info!(
        presets = calculator.presets().len(),
        "Benchmark catalog loaded"
    );

    tracing::info!(
        pages_rps = PAGE_QUOTA.requests_per_second(),
        pages_burst = PAGE_QUOTA.burst,
        calculate_rps = CALCULATE_QUOTA.requests_per_second(),
        calculate_burst = CALCULATE_QUOTA.burst,
        behind_proxy = config.behind_proxy,
        "Rate limits configured"
    );

    let state = AppState::new(calculator, config.cta_url.as_str());

    let app = app_router(state, &config.static_dir, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {e}");
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
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
