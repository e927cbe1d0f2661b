//! Route definitions for the preview service.
//!
//! ## Routes
//!
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `POST /embed` - Render an embed view as an HTML page
//! - `POST /embed.json` - Resolve an embed view to its render tree
//! - `GET /route?path=...` - Match an app path to a screen

mod embed;
mod health;
mod navigate;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the complete preview service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/embed", post(embed::embed_html))
        .route("/embed.json", post(embed::embed_json))
        .route("/route", get(navigate::route_handler))
        .with_state(state)
}

/// Serve robots.txt. Embed pages are fragments, not content to index.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nDisallow: /\n",
    )
}
