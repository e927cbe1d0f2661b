//! Skyembed Preview - HTML rendering service for Bluesky post embeds.
//!
//! This crate wraps the `skyembed-core` resolver and route matcher in a small
//! HTTP server. Callers post the hydrated `embed` view of a post and get back
//! a static HTML fragment page they can iframe or cache at the edge.
//!
//! # Architecture
//!
//! - **Resolve**: `skyembed_core::resolve` turns the embed view into a render tree
//! - **Render**: Generates HTML from the tree using maud (compile-time templates)
//! - **Cache**: In-process moka cache keyed by a hash of the request body
//!
//! # Endpoints
//!
//! ```text
//! POST /embed        embed view JSON -> HTML page
//! POST /embed.json   embed view JSON -> render tree JSON
//! GET  /route?path=  app path -> screen, params, query
//! ```
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - URLs are validated (HTTPS/HTTP only) before use in attributes
//! - Strict Content-Security-Policy: no JavaScript execution

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
