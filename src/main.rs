use abios_live::cli::Args;
use abios_live::config::Config;
use abios_live::constants::SHUTDOWN_GRACE_SECONDS;
use abios_live::error::AppError;
use abios_live::logging::setup_logging;
use abios_live::server::{self, AppState};
use abios_live::{AbiosLiveService, HttpAbiosClient, NAME, VERSION};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Missing or malformed settings stop startup here
    let config = Config::load(args.config.as_deref()).await?;

    if args.list_config {
        config.display();
        return Ok(());
    }

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!("Logs are being written to: {log_file_path}");
    info!("Starting {NAME} v{VERSION}");

    let client = HttpAbiosClient::new(&config)?;
    let live_service = Arc::new(AbiosLiveService::new(client));

    let request_root = CancellationToken::new();
    let state = AppState::new(live_service, request_root.clone())?;

    let listener = TcpListener::bind(&args.listen)
        .await
        .map_err(|e| AppError::server_error(format!("failed to bind {}: {e}", args.listen)))?;

    let shutdown = CancellationToken::new();
    let mut server_task = tokio::spawn(server::serve(listener, state, shutdown.clone()));

    tokio::select! {
        result = &mut server_task => return server::join_result(result),
        _ = shutdown_signal() => info!("Shutdown signal received"),
    }

    shutdown.cancel();
    let grace = Duration::from_secs(SHUTDOWN_GRACE_SECONDS);
    server::wait_for_shutdown(server_task, &request_root, grace).await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
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
}
