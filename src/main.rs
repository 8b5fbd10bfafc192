use std::io::stderr;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_aggregation_service::api::{build_router, AppState};
use transaction_aggregation_service::engine::AggregationEngine;
use transaction_aggregation_service::storage::TransactionStorage;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

struct ServerConfig {
    bind_address: SocketAddr,
    log_level: LevelFilter
}

impl ServerConfig {
    fn from_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();

        if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
            eprintln!("Usage: transaction-aggregation-service [bind_address:optional] [log_level:optional]");
            eprintln!("Defaults: bind_address={DEFAULT_BIND_ADDRESS}, log_level=info");
            eprintln!("Available log levels: error, warn, info, debug, trace");
            std::process::exit(0);
        }

        let bind_address = args.get(1).map(String::as_str).unwrap_or(DEFAULT_BIND_ADDRESS);
        let bind_address = bind_address.parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address '{bind_address}'"))?;

        let log_level = args.get(2)
            .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::INFO);

        Ok(Self { bind_address, log_level })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_args()?;

    setup_logging(config.log_level);

    let storage = Arc::new(TransactionStorage::new());
    let engine = Arc::new(AggregationEngine::new(storage));
    let router = build_router(AppState::new(engine));

    let listener = TcpListener::bind(config.bind_address).await
        .with_context(|| format!("Could not bind to {}", config.bind_address))?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn shutdown_signal() {
    //NOTE: In-flight requests are drained by axum before serve() returns
    if let Err(error) = signal::ctrl_c().await {
        warn!("Could not listen for shutdown signal, serving until killed: {error}");
        std::future::pending::<()>().await;
    }

    info!("Shutdown signal received");
}
