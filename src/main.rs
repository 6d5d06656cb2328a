//! Patient care relay server.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser form                 ┌──────────────────────────────────────────┐
//!   ─────────────────────────────┼─▶ http::server (CORS, request ID, trace)  │
//!                                │        │                                 │
//!                                │        ▼                                 │
//!                                │   relay::RelayHandler (×3)               │       Workflow
//!                                │        │ validate → resolve flow ID      │       service
//!                                │        ▼                                 │
//!                                │   upstream::WorkflowClient ──────────────┼──▶ POST /run/{flow}
//!                                │        │                                 │
//!   ◀────────────────────────────┼── JSON or {"error": ...} ◀──────────────┼───
//!                                │                                          │
//!                                │   /health · / → {base}/ · {base}/* SPA   │
//!                                └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use patient_care_relay::config::loader;
use patient_care_relay::http::HttpServer;
use patient_care_relay::lifecycle::{signals, startup, Shutdown};
use patient_care_relay::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "patient-care-relay")]
#[command(about = "Relay for patient registration, scheduling, and adherence workflows", long_about = None)]
struct Args {
    /// Optional TOML configuration file; environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = loader::load(args.config.as_deref())?;

    logging::init(&config.observability);
    startup::install_fatal_panic_hook();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "patient-care-relay starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_path = %config.client.base_path,
        dist_dir = %config.client.dist_dir,
        grace_period_secs = config.shutdown.grace_period_secs,
        "Configuration loaded"
    );
    startup::report_configuration(&config);

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        _ = signals::terminate() => shutdown.trigger(),
        result = &mut server_task => {
            result??;
            return Ok(());
        }
    }

    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
