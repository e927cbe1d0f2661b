//! Link targets and URI helpers.
//!
//! Every path built here parses back through [`crate::route::match_path`].

/// Last `/`-separated segment of a resource URI.
///
/// `at://did:plc:abc/app.bsky.feed.post/xyz` gives `xyz`; a string without
/// `/` is returned unchanged.
pub fn record_key(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}

/// Host (with non-default port) of a URL, or the input when there is none.
///
/// Never fails: unparseable input and host-less URLs such as `mailto:`
/// fall back to the raw string.
pub fn nice_domain(uri: &str) -> String {
    let Ok(parsed) = url::Url::parse(uri) else {
        return uri.to_string();
    };
    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) if !host.is_empty() => format!("{host}:{port}"),
        (Some(host), None) if !host.is_empty() => host.to_string(),
        _ => uri.to_string(),
    }
}

pub fn profile_path(did: &str) -> String {
    format!("/profile/{did}")
}

pub fn post_path(did: &str, uri: &str) -> String {
    format!("/profile/{did}/post/{}", record_key(uri))
}

pub fn list_path(did: &str, uri: &str) -> String {
    format!("/profile/{did}/lists/{}", record_key(uri))
}

pub fn feed_path(did: &str, uri: &str) -> String {
    format!("/profile/{did}/feed/{}", record_key(uri))
}
