//! movie-studio HTTP API server.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tower_http::trace::TraceLayer;

use movie_studio::server::{init_logging, router, AppState, Config};

/// movie-studio HTTP API server.
#[derive(Parser, Debug)]
#[command(name = "movie-studio-server")]
#[command(about = "HTTP API server for the movie-studio metadata store")]
struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "movie-studio.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::from_file(&args.config)?;
    init_logging(&config.logging)?;

    match &config.data.metadata {
        Some(path) => tracing::info!("metadata source: {}", path.display()),
        None => tracing::info!("no metadata source configured"),
    }
    match &config.data.stats {
        Some(path) => tracing::info!("stats source: {}", path.display()),
        None => tracing::info!("no stats source configured"),
    }

    // Create application state; CSV sources load lazily on first request
    let state = AppState::from_config(&config);

    // Build router
    let app = router(state).layer(TraceLayer::new_for_http());

    // Parse bind address
    let addr: SocketAddr = config.bind_addr().parse()?;

    tracing::info!("Starting server on {}", addr);

    // Create the listener
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
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
