mod app;
mod config;
mod handlers;
mod middleware;
mod models;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todolist_core::storage::TodoRepository;

use crate::{
    app::create_app,
    config::{Config, DatabaseConfig, LogFormat},
    state::AppState,
};

/// Todolist - A small authenticated HTTP API for managing to-do items
#[derive(Parser, Debug)]
#[command(name = "todolist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8080", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    init_tracing(config.log_format);

    tracing::debug!(?config, "Loaded configuration");

    let repo = init_repository(&config.database).await?;
    let state = AppState::new(repo, config.auth);

    // Build the application router
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "todolist=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Connect to MySQL and make sure the table exists.
#[cfg(feature = "mysql")]
async fn init_repository(database: &DatabaseConfig) -> Result<Arc<dyn TodoRepository>> {
    use crate::storage::mysql::{connect, MySqlRepository};

    let pool = connect(database).await?;
    let repo = MySqlRepository::new(pool);
    repo.migrate().await?;

    tracing::info!(
        host = %database.host,
        port = database.port,
        database = %database.name,
        "Using MySQL storage"
    );

    Ok(Arc::new(repo))
}

/// Start with an empty in-memory store.
#[cfg(all(feature = "inmemory", not(feature = "mysql")))]
async fn init_repository(_database: &DatabaseConfig) -> Result<Arc<dyn TodoRepository>> {
    use crate::storage::inmemory::InMemoryRepository;

    tracing::warn!("Using in-memory storage; data is lost on restart");

    Ok(Arc::new(InMemoryRepository::new()))
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
