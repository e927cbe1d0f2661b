//! Route lookup endpoint.
//!
//! `GET /route?path=/profile/alice.test/post/3k` returns the screen the app
//! would show for that path, its parameters, and the decoded query string.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::Query;
use serde::{Deserialize, Serialize};
use skyembed_core::{MatchResult, match_path, metrics, query_params};

/// Query parameters for `GET /route`.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    path: String,
}

/// Match result plus the path's own query string.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    #[serde(flatten)]
    result: MatchResult,
    query: BTreeMap<String, String>,
}

pub async fn route_handler(Query(RouteQuery { path }): Query<RouteQuery>) -> Json<RouteResponse> {
    let result = match_path(&path);
    metrics::record_route(&result);
    tracing::debug!(path = %path, screen = result.screen.as_str(), "route matched");

    Json(RouteResponse {
        query: query_params(&path),
        result,
    })
}
