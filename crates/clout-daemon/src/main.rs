// crates/clout-daemon/src/main.rs
//
// Binary entrypoint for the Clout reputation daemon.
//
// Parses CLI arguments, loads configuration, initializes tracing, opens the
// configured repute store, and serves the JSON-RPC API until interrupted.

mod config;

use std::time::Instant;

use clap::Parser;
use config::DaemonConfig;

use clout_reputation::ScoringEngine;
use clout_rpc::{CloutRpcServer, RpcConfig};
use clout_store::{open_store, StoreBackend};

/// Clout reputation daemon: records reputes and serves reputation scores.
#[derive(Parser, Debug)]
#[command(name = "clout-daemon", version = "0.1.0", about = "Clout reputation daemon")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "~/.clout/config.toml")]
    config: String,

    /// Store backend override: rocksdb or memory.
    #[arg(long)]
    store_backend: Option<StoreBackend>,

    /// RPC port override.
    #[arg(long)]
    rpc_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before tracing is up so the configured log level
    // applies; the outcome is logged once the subscriber exists.
    let config_path = expand_tilde(&args.config);
    let loaded = DaemonConfig::load(&config_path);
    let mut daemon_config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => DaemonConfig::default(),
    };

    // Initialize tracing subscriber for structured logging.
    let default_level = daemon_config.log_level.clone();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match loaded {
        Ok(_) => tracing::info!("Loaded configuration from {}", config_path),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            config_path,
            e
        ),
    }

    // CLI flags override the config file values.
    if let Some(backend) = args.store_backend {
        daemon_config.store.backend = backend;
    }
    if let Some(port) = args.rpc_port {
        daemon_config.rpc_port = port;
    }
    daemon_config.store.path = expand_tilde(&daemon_config.store.path);

    tracing::info!("Clout Daemon v0.1.0");
    tracing::info!("Store backend: {}", daemon_config.store.backend);
    if daemon_config.store.backend == StoreBackend::Rocksdb {
        tracing::info!("Store path: {}", daemon_config.store.path);
    }
    tracing::info!(
        "RPC endpoint: {}:{}",
        daemon_config.rpc_host,
        daemon_config.rpc_port
    );
    tracing::info!(
        "Confidence thresholds: reach {:?}, clarity {:?}",
        daemon_config.scoring.reach,
        daemon_config.scoring.clarity
    );

    let engine = ScoringEngine::new(daemon_config.scoring)?;
    let store = open_store(&daemon_config.store)?;

    let rpc_config = RpcConfig {
        host: daemon_config.rpc_host.clone(),
        port: daemon_config.rpc_port,
    };
    let rpc_server = CloutRpcServer::new(rpc_config, store, engine).with_start_time(Instant::now());

    tokio::select! {
        result = rpc_server.start() => {
            if let Err(e) = result {
                tracing::error!("RPC server error: {}", e);
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupt received, shutting down");
        }
    }

    tracing::info!("Clout daemon shut down gracefully");
    Ok(())
}

/// Expand `~` at the start of a path to the user's home directory.
fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
