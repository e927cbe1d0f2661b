//! Error types for embed resolution and route matching.

use thiserror::Error;

use crate::route::Screen;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or checking a route table.
#[derive(Error, Debug)]
pub enum Error {
    /// A route pattern failed to compile.
    #[error("invalid route pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as declared in the table.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// An earlier route matches every path a later route was written for.
    #[error("route {route:?} is shadowed by earlier route {shadowed_by:?}")]
    ShadowedRoute {
        /// The unreachable route.
        route: Screen,
        /// The earlier route that wins instead.
        shadowed_by: Screen,
    },

    /// No route (including its own) matches the sample path built from a pattern.
    #[error("route {route:?} does not match its own sample path '{sample}'")]
    UnreachableRoute {
        /// The route whose pattern failed.
        route: Screen,
        /// Sample path generated from the pattern.
        sample: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures inside the embed resolver.
///
/// These never leave [`crate::embed::resolve`]; they are turned into a
/// visible error node at the nearest fault boundary. The `Display` text is
/// what the reader sees in that node.
#[derive(Error, Debug)]
pub enum EmbedError {
    /// The top-level `$type` is missing or not one of the four embed views.
    #[error("Unsupported embed type")]
    UnsupportedEmbed,

    /// A quoted record is not one of the six record views.
    #[error("Unknown embed type")]
    UnknownRecord,

    /// The `$type` was recognized but the fields did not decode.
    #[error("Malformed embed: {0}")]
    Malformed(#[from] serde_json::Error),
}
