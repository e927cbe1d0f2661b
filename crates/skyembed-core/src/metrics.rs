//! Prometheus metrics helpers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use skyembed_core::metrics::{init_metrics, start_metrics_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let handle = init_metrics();
//!     start_metrics_server(9092, handle).await.unwrap();
//! }
//! ```
//!
//! # Metric Naming Conventions
//!
//! - Prefix: component (`embed_`, `route_`, `render_cache_`)
//! - Suffix: `_total` for counters
//! - Labels: node kind or screen only; both are closed sets

use axum::{Router, routing::get};
use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;

use crate::embed::RenderNode;
use crate::route::MatchResult;

/// Initialize the Prometheus metrics recorder.
///
/// # Panics
///
/// Panics if called more than once (the recorder can only be installed once).
pub fn init_metrics() -> PrometheusHandle {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder");

    register_metrics();

    handle
}

/// Like [`init_metrics`] but returns `None` if a recorder is already installed.
pub fn try_init_metrics() -> Option<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder().ok()?;
    register_metrics();
    Some(handle)
}

/// Serve `/metrics` on the given port from a background task.
pub async fn start_metrics_server(port: u16, handle: PrometheusHandle) -> crate::Result<()> {
    let app = Router::new().route(
        "/metrics",
        get(move || {
            let handle = handle.clone();
            async move { handle.render() }
        }),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "metrics server listening");

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!(error = %err, "metrics server stopped");
        }
    });

    Ok(())
}

fn register_metrics() {
    describe_counter!(
        "embed_render_total",
        "Embeds resolved, by top-level node kind (label: kind)"
    );
    describe_counter!(
        "embed_error_total",
        "Resolved embeds containing at least one error placeholder"
    );
    describe_counter!(
        "route_match_total",
        "Paths matched to a screen (label: screen)"
    );
    describe_counter!("route_not_found_total", "Paths that matched no route");
    describe_counter!(
        "render_cache_hits_total",
        "Embed HTML served from the render cache"
    );
}

/// Count one resolved embed. `None` is recorded as kind `empty`.
pub fn record_render(node: Option<&RenderNode>) {
    let kind = node.map(RenderNode::kind).unwrap_or("empty");
    metrics::counter!("embed_render_total", "kind" => kind).increment(1);
    if node.is_some_and(RenderNode::contains_error) {
        metrics::counter!("embed_error_total").increment(1);
    }
}

/// Count one route match.
pub fn record_route(result: &MatchResult) {
    if result.is_not_found {
        metrics::counter!("route_not_found_total").increment(1);
    } else {
        metrics::counter!("route_match_total", "screen" => result.screen.as_str()).increment(1);
    }
}

#[inline]
pub fn increment(name: &'static str, count: u64) {
    metrics::counter!(name).increment(count);
}
