//! rollwatchd — the rollwatch daemon.
//!
//! Single binary that assembles the deployment-tracking service:
//! - Deployment store (in-memory)
//! - Error-rate evaluator (built-in baseline table)
//! - gRPC API (deploy / set-ratio / get) with server reflection
//! - HTTP API (`GET /check?svc=<name>`)
//!
//! # Usage
//!
//! ```text
//! rollwatchd serve --http-port 8080 --grpc-port 50051
//! ```

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::sync::watch;
use tracing::info;

#[derive(Parser)]
#[command(name = "rollwatchd", about = "Rollwatch daemon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the gRPC and HTTP APIs.
    Serve {
        /// Port for the HTTP check endpoint.
        #[arg(long, default_value = "8080")]
        http_port: u16,

        /// Port for the gRPC deployment service.
        #[arg(long, default_value = "50051")]
        grpc_port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rollwatchd=debug,rollwatch=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            http_port,
            grpc_port,
        } => run_serve(http_port, grpc_port).await,
    }
}

async fn run_serve(http_port: u16, grpc_port: u16) -> anyhow::Result<()> {
    info!("rollwatch daemon starting");

    // ── Initialize subsystems ──────────────────────────────────

    // Deployment store.
    let store = rollwatch_state::DeploymentStore::new();
    info!("deployment store initialized");

    // Error-rate evaluator over the built-in baseline table.
    let table = rollwatch_health::ErrorRateTable::builtin();
    let evaluator = rollwatch_health::ErrorRateEvaluator::new(store.clone(), table);
    info!("error-rate evaluator initialized");

    // ── Shutdown signal ────────────────────────────────────────

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    // ── Start gRPC server ──────────────────────────────────────

    let reflection = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(rollwatch_rpc::proto::FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let rpc = rollwatch_rpc::DeploymentServer::new(store.clone());
    let grpc_addr = SocketAddr::from(([0, 0, 0, 0], grpc_port));

    info!(%grpc_addr, "gRPC server starting");

    let grpc_handle = tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(reflection)
            .add_service(rpc.into_service())
            .serve_with_shutdown(grpc_addr, async move {
                let _ = shutdown_rx.changed().await;
            })
            .await
    });

    // ── Start HTTP server ──────────────────────────────────────

    let router = rollwatch_api::build_router(evaluator);
    let http_addr = SocketAddr::from(([0, 0, 0, 0], http_port));

    info!(%http_addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(http_addr).await?;

    // Graceful shutdown on Ctrl-C.
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
        info!("shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    server.await?;

    // Wait for the gRPC server to drain.
    grpc_handle.await??;

    info!("rollwatch daemon stopped");
    Ok(())
}
