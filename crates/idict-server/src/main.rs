//! Igala dictionary HTTP server
//!
//! Run with: `cargo run -p idict-server -- --help`

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use idict_config::Config;
use idict_config::logging::{init_logging, report_ignored};
use idict_server::{AppState, build_router};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[derive(Parser, Debug)]
#[command(name = "idict-server")]
#[command(about = "Serve Igala dictionary lookups over HTTP")]
struct Args {
    /// JSON config file; IDICT_* environment variables still apply
    #[arg(long, env = "IDICT_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overrides config
    #[arg(long)]
    listen: Option<SocketAddr>,

    /// Parsed dataset, overrides config
    #[arg(long)]
    dataset: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let (mut config, ignored) = Config::resolve(args.config.as_deref())?;
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(dataset) = args.dataset {
        config.dataset.path = dataset;
    }

    init_logging(config.log_format, "info,idict_server=debug,tower_http=info");
    if let Some(path) = &args.config {
        tracing::info!("Loaded config from {}", path.display());
    }
    report_ignored(&ignored);

    let cancel = CancellationToken::new();
    let shutdown_token = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            return;
        }
        tracing::info!("Shutdown requested");
        shutdown_token.cancel();
    });

    run(config, cancel.cancelled_owned()).await
}

async fn run(
    config: Config,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    tracing::info!(
        listen = %config.server.listen,
        dataset = %config.dataset.path.display(),
        "Starting Igala dictionary server"
    );

    let state = Arc::new(AppState::load(&config.dataset.path));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.server.listen).await?;
    tracing::info!(address = %config.server.listen, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
