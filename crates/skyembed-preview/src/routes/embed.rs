//! Embed rendering endpoints.
//!
//! Handles `POST /embed` (HTML page) and `POST /embed.json` (render tree).
//! The body is an `app.bsky.embed.*#view` object; an empty body or `null`
//! means the post has no embed.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use skyembed_core::{RenderNode, metrics};

use crate::error::PreviewError;
use crate::render;
use crate::state::{AppState, CachedHtml};

/// Render an embed payload as an HTML page.
///
/// 1. Hashes the body and checks the in-process cache
/// 2. On miss, parses and resolves the payload
/// 3. Renders, caches, and returns the page with security headers and an ETag
pub async fn embed_html(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, PreviewError> {
    let key = xxhash_rust::xxh3::xxh3_64(&body);

    if let Some(cached) = state.cache.get(&key).await {
        tracing::debug!(key, cached_at = %cached.cached_at, "cache hit");
        metrics::increment("render_cache_hits_total", 1);
        return Ok(build_response(&cached.html));
    }

    tracing::debug!(key, "cache miss, resolving");

    let node = resolve_body(&body)?;
    let html = render::render_page(
        node.as_ref(),
        &state.config.link_base_url,
        &state.config.site_name,
    )
    .into_string();

    let cached = CachedHtml {
        html: html.clone(),
        cached_at: chrono::Utc::now(),
    };
    state.cache.insert(key, cached).await;

    Ok(build_response(&html))
}

/// Resolve an embed payload and return the render tree as JSON.
pub async fn embed_json(body: Bytes) -> Result<Json<Option<RenderNode>>, PreviewError> {
    Ok(Json(resolve_body(&body)?))
}

/// Parse a request body and run it through the resolver.
fn resolve_body(body: &[u8]) -> Result<Option<RenderNode>, PreviewError> {
    let payload: Option<Value> = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        Some(serde_json::from_slice(body)?)
    };

    let node = skyembed_core::resolve(payload.as_ref());
    metrics::record_render(node.as_ref());
    if let Some(node) = &node {
        tracing::debug!(kind = node.kind(), has_error = node.contains_error(), "embed resolved");
    }
    Ok(node)
}

/// Build an HTTP response with HTML content and security/cache headers.
fn build_response(html: &str) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=300"),
    );

    (StatusCode::OK, headers, html.to_string()).into_response()
}
