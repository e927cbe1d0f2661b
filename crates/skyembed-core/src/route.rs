//! Path-to-screen routing.
//!
//! # Matching rules
//! - Patterns are anchored at the start of the path
//! - The matched prefix must be followed by `?` or end of input
//! - Matching is case-insensitive; captured values keep their case
//! - First match wins, in declaration order
//! - No match yields the not-found result, never an error
//!
//! Because of the boundary rule `/profile/(?<name>[^/]+)` does not match
//! `/profile/alice/followers`, so shorter routes can be declared before the
//! deeper ones. [`Router::validate`] checks that every route stays reachable.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// Screens a path can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Home,
    Search,
    Notifications,
    Settings,
    Profile,
    ProfileFollowers,
    ProfileFollows,
    ProfileList,
    ProfileFeed,
    PostThread,
    PostLikedBy,
    PostRepostedBy,
    Debug,
    Log,
    NotFound,
}

impl Screen {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search => "search",
            Self::Notifications => "notifications",
            Self::Settings => "settings",
            Self::Profile => "profile",
            Self::ProfileFollowers => "profile-followers",
            Self::ProfileFollows => "profile-follows",
            Self::ProfileList => "profile-list",
            Self::ProfileFeed => "profile-feed",
            Self::PostThread => "post-thread",
            Self::PostLikedBy => "post-liked-by",
            Self::PostRepostedBy => "post-reposted-by",
            Self::Debug => "debug",
            Self::Log => "log",
            Self::NotFound => "not-found",
        }
    }
}

/// Icon family, following Font Awesome's solid/regular split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Solid,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub style: IconStyle,
    pub name: &'static str,
}

impl Icon {
    pub const fn solid(name: &'static str) -> Self {
        Self {
            style: IconStyle::Solid,
            name,
        }
    }

    pub const fn regular(name: &'static str) -> Self {
        Self {
            style: IconStyle::Regular,
            name,
        }
    }
}

/// A route as declared, before its pattern is compiled.
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub screen: Screen,
    pub default_title: &'static str,
    pub icon: Icon,
    /// Regex source without anchors; named groups become parameters.
    pub pattern: &'static str,
}

const fn route(
    screen: Screen,
    default_title: &'static str,
    icon: Icon,
    pattern: &'static str,
) -> RouteDef {
    RouteDef {
        screen,
        default_title,
        icon,
        pattern,
    }
}

/// The application route table, in match order.
pub const ROUTES: &[RouteDef] = &[
    route(Screen::Home, "Home", Icon::solid("house"), "/"),
    route(Screen::Search, "Search", Icon::solid("magnifying-glass"), "/search"),
    route(Screen::Notifications, "Notifications", Icon::solid("bell"), "/notifications"),
    route(Screen::Settings, "Settings", Icon::solid("bell"), "/settings"),
    route(Screen::Profile, "User", Icon::regular("user"), "/profile/(?<name>[^/]+)"),
    route(
        Screen::ProfileFollowers,
        "Followers",
        Icon::solid("users"),
        "/profile/(?<name>[^/]+)/followers",
    ),
    route(
        Screen::ProfileFollows,
        "Follows",
        Icon::solid("users"),
        "/profile/(?<name>[^/]+)/follows",
    ),
    route(
        Screen::ProfileList,
        "List",
        Icon::solid("list"),
        "/profile/(?<name>[^/]+)/lists/(?<rkey>[^/]+)",
    ),
    route(
        Screen::ProfileFeed,
        "Feed",
        Icon::solid("rss"),
        "/profile/(?<name>[^/]+)/feed/(?<rkey>[^/]+)",
    ),
    route(
        Screen::PostThread,
        "Post",
        Icon::regular("message"),
        "/profile/(?<name>[^/]+)/post/(?<rkey>[^/]+)",
    ),
    route(
        Screen::PostLikedBy,
        "Liked by",
        Icon::solid("heart"),
        "/profile/(?<name>[^/]+)/post/(?<rkey>[^/]+)/upvoted-by",
    ),
    route(
        Screen::PostRepostedBy,
        "Reposted by",
        Icon::solid("retweet"),
        "/profile/(?<name>[^/]+)/post/(?<rkey>[^/]+)/reposted-by",
    ),
    route(Screen::Debug, "Debug", Icon::solid("house"), "/sys/debug"),
    route(Screen::Log, "Log", Icon::solid("house"), "/sys/log"),
];

/// Result returned when no route matches.
const NOT_FOUND: RouteDef = route(
    Screen::NotFound,
    "Not found",
    Icon::solid("magnifying-glass"),
    "",
);

/// Outcome of matching one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub screen: Screen,
    pub default_title: &'static str,
    pub icon: Icon,
    pub params: BTreeMap<String, String>,
    pub is_not_found: bool,
}

impl MatchResult {
    fn new(def: &RouteDef, params: BTreeMap<String, String>) -> Self {
        Self {
            screen: def.screen,
            default_title: def.default_title,
            icon: def.icon,
            params,
            is_not_found: def.screen == Screen::NotFound,
        }
    }

    pub fn not_found() -> Self {
        Self::new(&NOT_FOUND, BTreeMap::new())
    }
}

#[derive(Debug)]
struct CompiledRoute {
    def: RouteDef,
    regex: Regex,
}

/// Compiled, immutable route table.
#[derive(Debug)]
pub struct Router {
    routes: Vec<CompiledRoute>,
}

static GLOBAL: LazyLock<Router> =
    LazyLock::new(|| Router::new(ROUTES).expect("built-in route table should compile"));

/// Placeholder capture groups, replaced when building sample paths.
static CAPTURE_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\?P?<(\w+)>[^)]*\)").expect("capture group regex should compile")
});

impl Router {
    /// Compile a route table. Order is preserved.
    pub fn new(defs: &[RouteDef]) -> Result<Self> {
        let routes = defs
            .iter()
            .map(|def| {
                let anchored = format!("(?i)^{}(?:[?]|$)", def.pattern);
                Regex::new(&anchored)
                    .map(|regex| CompiledRoute { def: *def, regex })
                    .map_err(|source| Error::InvalidPattern {
                        pattern: def.pattern.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { routes })
    }

    /// The router for [`ROUTES`].
    pub fn global() -> &'static Router {
        &GLOBAL
    }

    pub fn routes(&self) -> impl Iterator<Item = &RouteDef> {
        self.routes.iter().map(|route| &route.def)
    }

    /// Match a path (query string allowed) against the table.
    ///
    /// Captures never extend into the query string.
    pub fn match_path(&self, path: &str) -> MatchResult {
        let target = path.split_once('?').map_or(path, |(path, _)| path);
        for route in &self.routes {
            let Some(caps) = route.regex.captures(target) else {
                continue;
            };
            let params = route
                .regex
                .capture_names()
                .flatten()
                .filter_map(|name| {
                    caps.name(name)
                        .map(|value| (name.to_string(), value.as_str().to_string()))
                })
                .collect();
            return MatchResult::new(&route.def, params);
        }
        tracing::debug!(path = %path, "no route matched");
        MatchResult::not_found()
    }

    /// Check that each route wins for a sample path built from its own pattern.
    ///
    /// Capture groups are replaced with a placeholder segment, so this catches
    /// an earlier, more general pattern swallowing a later one.
    pub fn validate(&self) -> Result<()> {
        for route in &self.routes {
            let sample = sample_path(route.def.pattern);
            let result = self.match_path(&sample);
            if result.is_not_found {
                return Err(Error::UnreachableRoute {
                    route: route.def.screen,
                    sample,
                });
            }
            if result.screen != route.def.screen {
                return Err(Error::ShadowedRoute {
                    route: route.def.screen,
                    shadowed_by: result.screen,
                });
            }
        }
        Ok(())
    }
}

fn sample_path(pattern: &str) -> String {
    CAPTURE_GROUP.replace_all(pattern, "sample-${1}").into_owned()
}

/// Match a path against the built-in route table.
pub fn match_path(path: &str) -> MatchResult {
    Router::global().match_path(path)
}

/// Decode the query string of a path into a map. Later keys win.
pub fn query_params(path: &str) -> BTreeMap<String, String> {
    let Some((_, query)) = path.split_once('?') else {
        return BTreeMap::new();
    };
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
