//! Core logic for rendering Bluesky post embeds and routing app paths.
//!
//! This crate provides:
//! - Embed resolution: `app.bsky.embed.*#view` JSON to a [`RenderNode`] tree
//! - Route matching: app path to a [`Screen`] with named parameters
//! - Link helpers shared by both (record keys, link domains, profile paths)
//! - Prometheus metrics helpers
//!
//! Everything except the metrics server is synchronous and pure.

pub mod embed;
mod error;
pub mod link;
pub mod metrics;
pub mod route;

pub use embed::{RenderNode, resolve};
pub use error::{EmbedError, Error, Result};
pub use link::record_key;
pub use route::{Icon, IconStyle, MatchResult, Router, Screen, match_path, query_params};
