mod actor_framework;
mod app_system;
mod clients;
mod config;
mod domain;
mod error;
mod http;
mod store;
mod user;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tracing::{error, info};

use crate::app_system::{setup_tracing, UserSystem};
use crate::config::Config;
use crate::http::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::parse();
    setup_tracing(config.log_format);

    info!(bind = %config.bind, "Starting user service");

    let system = UserSystem::new(config.store_buffer);
    let router = create_router(AppState::new(system.user_service()));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.bind, e))?;

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        error!(error = %e, "HTTP server failed");
    }

    system.shutdown().await?;
    served.map_err(|e| e.to_string())?;

    info!("User service stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
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
                error!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}
