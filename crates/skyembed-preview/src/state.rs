//! Application state shared across all request handlers.

use std::sync::Arc;

use moka::future::Cache;

use crate::config::Config;

/// Cached HTML response with metadata.
#[derive(Clone, Debug)]
pub struct CachedHtml {
    /// Rendered HTML string.
    pub html: String,
    /// When this entry was cached.
    pub cached_at: chrono::DateTime<chrono::Utc>,
}

/// Render cache keyed by the xxh3 hash of the request body.
pub type HtmlCache = Cache<u64, CachedHtml>;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// In-memory cache of rendered embed pages.
    pub cache: HtmlCache,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        tracing::info!(
            cache_capacity = config.cache_capacity,
            cache_ttl_secs = config.cache_ttl.as_secs(),
            "application state initialized"
        );

        Self {
            config: Arc::new(config),
            cache,
        }
    }
}
