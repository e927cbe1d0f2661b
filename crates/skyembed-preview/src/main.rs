//! Skyembed Preview - HTTP server for Bluesky embed rendering.

use axum::http::Request;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use skyembed_core::metrics;
use skyembed_preview::{AppState, Config, router};

/// Skyembed Preview - HTML rendering for Bluesky post embeds.
#[derive(Parser, Debug)]
#[command(name = "skyembed-preview")]
#[command(about = "HTML rendering server for Bluesky post embeds", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A broken route table is a startup error, not a per-request one.
    let app_router = skyembed_core::Router::global();
    app_router.validate()?;
    tracing::info!(routes = app_router.routes().count(), "route table validated");

    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    if let Some(port) = config.metrics_port {
        let handle = metrics::init_metrics();
        metrics::start_metrics_server(port, handle).await?;
    }

    let state = AppState::new(config);

    let app = router(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting embed server");

    axum::serve(listener, app).await?;

    Ok(())
}
