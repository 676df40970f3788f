//! In-memory variant of the OCR server.
//!
//! Serves `POST /api/v1/ocr` and processes images from a buffer without
//! staging them on disk, so PDFs are not supported here. Engine failures
//! surface as HTTP 500 instead of the folded envelope.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use typhoon_ocr_api::api::{create_memory_router, AppState, ServerMode};
use typhoon_ocr_api::config::Config;

#[derive(Parser)]
#[command(name = "typhoon-ocr-api-mem")]
#[command(about = "In-memory HTTP API that OCRs images via the Typhoon OCR engine")]
struct Args {
    /// Bind address, overriding the HOST environment variable
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overriding the PORT environment variable
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::from_filename("config.env").ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL")
                .unwrap_or_else(|_| "typhoon_ocr_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let state = AppState::new(config.clone(), ServerMode::InMemory)?;
    let app = create_memory_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Typhoon OCR API starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/health", addr);
    tracing::info!("  API docs:     http://{}/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/openapi.json", addr);
    tracing::info!("  Mode:         in-memory (images only, nothing staged on disk)");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server...");
}
