//! Application configuration loaded from environment variables.

use std::time::Duration;

use anyhow::Context;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8082").
    pub bind_addr: String,

    /// Prefix for app-relative links in rendered HTML, without trailing slash.
    /// e.g., "https://bsky.app"
    pub link_base_url: String,

    /// Site name shown in page titles.
    pub site_name: String,

    /// Maximum number of rendered embeds kept in memory.
    pub cache_capacity: u64,

    /// How long a rendered embed stays cached.
    pub cache_ttl: Duration,

    /// Port for the Prometheus `/metrics` endpoint. Disabled when `None`.
    pub metrics_port: Option<u16>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PREVIEW_BIND_ADDR`: Server bind address (default: "0.0.0.0:8082")
    /// - `PREVIEW_LINK_BASE_URL`: Base for internal links (default: "https://bsky.app")
    /// - `PREVIEW_SITE_NAME`: Site name (default: "Bluesky Embed")
    /// - `PREVIEW_CACHE_CAPACITY`: Render cache entries (default: 10000)
    /// - `PREVIEW_CACHE_TTL_SECS`: Render cache TTL (default: 300)
    /// - `PREVIEW_METRICS_PORT`: Metrics port (default: disabled)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("PREVIEW_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8082".to_string());

        let link_base_url = std::env::var("PREVIEW_LINK_BASE_URL")
            .unwrap_or_else(|_| "https://bsky.app".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("PREVIEW_SITE_NAME").unwrap_or_else(|_| "Bluesky Embed".to_string());

        let cache_capacity = parse_var("PREVIEW_CACHE_CAPACITY")?.unwrap_or(10_000);

        let cache_ttl = Duration::from_secs(parse_var("PREVIEW_CACHE_TTL_SECS")?.unwrap_or(300));

        let metrics_port = parse_var("PREVIEW_METRICS_PORT")?;

        tracing::info!(
            bind_addr = %bind_addr,
            link_base_url = %link_base_url,
            site_name = %site_name,
            cache_capacity,
            cache_ttl_secs = cache_ttl.as_secs(),
            metrics_port = ?metrics_port,
            "preview configuration loaded"
        );

        Ok(Self {
            bind_addr,
            link_base_url,
            site_name,
            cache_capacity,
            cache_ttl,
            metrics_port,
        })
    }
}

/// Parse an optional numeric variable. Unset or blank gives `None`.
fn parse_var<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid value for {key}: '{raw}'")),
        _ => Ok(None),
    }
}
